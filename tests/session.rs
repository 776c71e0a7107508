//! Full-session scenarios driven through the game loop with recording
//! collaborators.

use glam::Vec2;
use river_adventure::highscores::MemoryStore;
use river_adventure::platform::{AudioCue, AudioSink, FixedFrames, RenderSink, UiNotifier};
use river_adventure::sim::{
    CollectibleKind, Entity, GamePhase, GameState, ObstacleKind, SessionSnapshot, TickInput,
};
use river_adventure::consts::FRAME_MS;
use river_adventure::{FrameOutcome, GameLoop, Hooks};

#[derive(Default)]
struct RenderLog {
    frames: usize,
    scores: Vec<u64>,
    phases: Vec<GamePhase>,
}

impl RenderSink for RenderLog {
    fn render(&mut self, state: &GameState) {
        self.frames += 1;
        self.scores.push(state.stats.score);
        self.phases.push(state.phase);
    }
}

#[derive(Default)]
struct UiLog {
    started: Vec<SessionSnapshot>,
    ended: Vec<(SessionSnapshot, bool)>,
}

impl UiNotifier for UiLog {
    fn session_started(&mut self, snapshot: &SessionSnapshot) {
        self.started.push(snapshot.clone());
    }

    fn session_ended(&mut self, snapshot: &SessionSnapshot, new_best: bool) {
        self.ended.push((snapshot.clone(), new_best));
    }
}

#[derive(Default)]
struct AudioLog {
    cues: Vec<AudioCue>,
}

impl AudioSink for AudioLog {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

#[derive(Default)]
struct Host {
    render: RenderLog,
    ui: UiLog,
    audio: AudioLog,
}

impl Host {
    fn hooks(&mut self) -> Hooks<'_> {
        Hooks {
            renderer: &mut self.render,
            ui: &mut self.ui,
            audio: &mut self.audio,
        }
    }
}

/// Player parked at the left edge with a log dropping straight onto it
fn log_on_collision_course(game: &mut GameLoop<MemoryStore>) {
    let state = game.state_mut();
    state.player.bounds.pos = Vec2::new(0.0, 400.0);
    let id = state.next_entity_id();
    state
        .obstacles
        .push(Entity::obstacle(id, ObstacleKind::Log, Vec2::new(0.0, -30.0), 5.0, 0));
}

#[test]
fn test_log_collision_ends_session() {
    let mut host = Host::default();
    let mut game = GameLoop::new(7, MemoryStore::default());
    assert_eq!(game.phase(), GamePhase::Idle);

    game.start(0.0, &mut host.hooks());
    log_on_collision_course(&mut game);

    let mut frames = FixedFrames::new(17.0, 17.0, 200);
    let ticks = game.run(&mut frames, &TickInput::default(), &mut host.hooks());

    assert_eq!(game.phase(), GamePhase::Over);
    // Log bottom starts at y=0 and sinks 5 per tick; it overlaps the boat's
    // top edge at y=400 on the 81st tick
    assert_eq!(ticks, 81);
    assert_eq!(host.render.frames as u64, ticks);
    assert_eq!(host.render.phases.last(), Some(&GamePhase::Over));
    assert_eq!(host.ui.started.len(), 1);
    assert_eq!(host.ui.ended.len(), 1);
    assert_eq!(host.audio.cues.first(), Some(&AudioCue::SessionStarted));
    assert_eq!(
        &host.audio.cues[host.audio.cues.len() - 2..],
        &[AudioCue::Crashed, AudioCue::SessionStopped]
    );
}

#[test]
fn test_frames_after_game_over_do_nothing() {
    let mut host = Host::default();
    let mut game = GameLoop::new(7, MemoryStore::default());
    game.start(0.0, &mut host.hooks());
    log_on_collision_course(&mut game);
    game.run(&mut FixedFrames::new(17.0, 17.0, 200), &TickInput::default(), &mut host.hooks());

    let frames = host.render.frames;
    let score = game.state().stats.score;
    let outcome = game.frame(99_999.0, &TickInput::default(), &mut host.hooks());
    assert_eq!(outcome, FrameOutcome::Inactive);
    assert_eq!(host.render.frames, frames);
    assert_eq!(game.state().stats.score, score);
}

#[test]
fn test_finger_pickup_through_loop() {
    let mut host = Host::default();
    let mut game = GameLoop::new(3, MemoryStore::default());
    game.start(0.0, &mut host.hooks());

    let state = game.state_mut();
    let pos = state.player.bounds.pos;
    let id = state.next_entity_id();
    state
        .collectibles
        .push(Entity::collectible(id, CollectibleKind::Finger, pos, 0.0));

    assert_eq!(
        game.frame(20.0, &TickInput::default(), &mut host.hooks()),
        FrameOutcome::Ticked
    );
    let state = game.state();
    assert_eq!(state.stats.score, 25);
    assert_eq!(state.stats.fingers, 1);
    assert!(state.player.boost.active);
    assert_eq!(state.player.boost.end_time, 20.0 + 3000.0);
    assert!(host
        .audio
        .cues
        .contains(&AudioCue::Collected(CollectibleKind::Finger)));
}

#[test]
fn test_new_best_is_saved_and_restart_resets() {
    let mut host = Host::default();
    let mut game = GameLoop::new(11, MemoryStore::with_value(5));
    assert_eq!(game.high_score().best(), 5);

    game.start(0.0, &mut host.hooks());
    assert_eq!(host.ui.started[0].high_score, 5);
    log_on_collision_course(&mut game);
    let state = game.state_mut();
    let id = state.next_entity_id();
    state
        .collectibles
        .push(Entity::collectible(id, CollectibleKind::Nugget, Vec2::new(0.0, 410.0), 0.0));

    game.run(&mut FixedFrames::new(17.0, 17.0, 200), &TickInput::default(), &mut host.hooks());

    let (snapshot, new_best) = host.ui.ended[0].clone();
    assert!(new_best);
    assert_eq!(snapshot.score, 10);
    assert_eq!(snapshot.nuggets, 1);
    assert_eq!(snapshot.high_score, 10);
    assert_eq!(game.high_score().store().value, Some(10));
    assert_eq!(game.high_score().store().saves, 1);

    // Restart goes through the same reset path
    game.start(5_000.0, &mut host.hooks());
    assert_eq!(game.phase(), GamePhase::Active);
    assert_eq!(game.state().stats.score, 0);
    assert!(game.state().obstacles.is_empty());
    assert_eq!(host.ui.started.len(), 2);
    assert_eq!(host.ui.started[1].high_score, 10);

    // A worse second run leaves the stored best alone
    log_on_collision_course(&mut game);
    game.run(&mut FixedFrames::new(5_017.0, 17.0, 200), &TickInput::default(), &mut host.hooks());
    let (_, new_best) = host.ui.ended[1].clone();
    assert!(!new_best);
    assert_eq!(game.high_score().store().saves, 1);
}

#[test]
fn test_score_never_decreases_over_a_long_run() {
    let mut host = Host::default();
    let mut game = GameLoop::new(2024, MemoryStore::default());
    game.start(0.0, &mut host.hooks());

    // Weave across the river until something hits us or time runs out
    let mut t = 0.0;
    for i in 0..5_000 {
        t += 1000.0 / 60.0;
        let input = TickInput {
            left: (i / 90) % 2 == 0,
            right: (i / 90) % 2 == 1,
            ..Default::default()
        };
        if game.frame(t, &input, &mut host.hooks()) == FrameOutcome::Ended {
            break;
        }
    }
    assert!(host.render.scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_first_tick_spawns_obstacle_and_collectible() {
    let mut host = Host::default();
    let mut game = GameLoop::new(19, MemoryStore::default());
    game.start(5_000.0, &mut host.hooks());
    assert!(game.state().obstacles.is_empty());
    assert!(game.state().collectibles.is_empty());

    assert_eq!(
        game.frame(5_017.0, &TickInput::default(), &mut host.hooks()),
        FrameOutcome::Ticked
    );
    assert_eq!(game.state().obstacles.len(), 1);
    assert_eq!(game.state().collectibles.len(), 1);
    assert_eq!(game.state().last_obstacle_spawn, 5_017.0);

    // Next spawns wait out the full intervals
    game.frame(5_034.0, &TickInput::default(), &mut host.hooks());
    assert_eq!(game.state().obstacles.len(), 1);
    assert_eq!(game.state().collectibles.len(), 1);
}

#[test]
fn test_native_rate_frames_all_tick() {
    let mut host = Host::default();
    let mut game = GameLoop::new(5, MemoryStore::default());
    game.start(0.0, &mut host.hooks());
    let mut frames = FixedFrames::new(FRAME_MS, FRAME_MS, 60);
    let ticks = game.run(&mut frames, &TickInput::default(), &mut host.hooks());
    assert_eq!(ticks, 60);
    assert_eq!(game.state().time_ticks, 60);
}

#[test]
fn test_start_while_active_is_ignored() {
    let mut host = Host::default();
    let mut game = GameLoop::new(1, MemoryStore::default());
    game.start(0.0, &mut host.hooks());
    game.state_mut().stats.score = 77;
    game.start(100.0, &mut host.hooks());
    assert_eq!(game.state().stats.score, 77);
    assert_eq!(host.ui.started.len(), 1);
}
