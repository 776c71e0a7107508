//! Session orchestration
//!
//! The host calls `GameLoop::frame` on every display frame. A `FrameGate`
//! coalesces frames that arrive faster than the target rate; each accepted
//! frame runs exactly one simulation tick (no catch-up substeps) and is then
//! handed to the render sink.

use crate::consts::FRAME_MS;
use crate::highscores::{HighScore, HighScoreStore};
use crate::platform::{AudioCue, AudioSink, FrameSource, InputSource, RenderSink, UiNotifier};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Slack for float rounding in frame timestamps, so frames arriving exactly
/// at the target rate are never coalesced
const GATE_EPSILON_MS: f64 = 1e-6;

/// Fixed-step gate: accepts a frame once at least one period has passed since
/// the last accepted frame
#[derive(Debug, Clone)]
pub struct FrameGate {
    period: f64,
    last: Option<f64>,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(FRAME_MS)
    }
}

impl FrameGate {
    pub fn new(period: f64) -> Self {
        Self { period, last: None }
    }

    /// Measure the next accepted frame from `now`
    pub fn reset_at(&mut self, now: f64) {
        self.last = Some(now);
    }

    /// Returns the elapsed time since the last accepted frame if this frame
    /// should run a tick. The very first frame only primes the gate.
    pub fn accept(&mut self, now: f64) -> Option<f64> {
        let last = *self.last.get_or_insert(now);
        let dt = now - last;
        if dt + GATE_EPSILON_MS >= self.period {
            self.last = Some(now);
            Some(dt)
        } else {
            None
        }
    }
}

/// What a call to `GameLoop::frame` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No session running
    Inactive,
    /// Arrived too soon after the previous tick
    Skipped,
    /// One tick ran and was rendered
    Ticked,
    /// The tick ended the session
    Ended,
}

/// Outward-facing collaborators for one call
pub struct Hooks<'a> {
    pub renderer: &'a mut dyn RenderSink,
    pub ui: &'a mut dyn UiNotifier,
    pub audio: &'a mut dyn AudioSink,
}

/// Owns the session state and sequences it against the outside world
pub struct GameLoop<S> {
    state: GameState,
    gate: FrameGate,
    high_score: HighScore<S>,
}

impl<S: HighScoreStore> GameLoop<S> {
    /// Create an idle loop. The stored best score is read here, once.
    pub fn new(seed: u64, store: S) -> Self {
        Self {
            state: GameState::new(seed),
            gate: FrameGate::default(),
            high_score: HighScore::load(store),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    /// Draw the idle boat on the water before the first session
    pub fn render_preview(&self, renderer: &mut dyn RenderSink) {
        renderer.render(&self.state);
    }

    /// Start a session (from idle) or restart one (after game over).
    /// Ignored while a session is already running.
    pub fn start(&mut self, now: f64, hooks: &mut Hooks<'_>) {
        if self.state.is_active() {
            log::warn!("Start requested while a session is running");
            return;
        }
        self.state.start();
        self.gate.reset_at(now);
        log::info!("Session started (best {})", self.high_score.best());

        self.dispatch_events(hooks);
        let snapshot = self.state.snapshot(self.high_score.best());
        hooks.ui.session_started(&snapshot);
    }

    /// Handle one display frame at `timestamp` (ms)
    pub fn frame(&mut self, timestamp: f64, input: &dyn InputSource, hooks: &mut Hooks<'_>) -> FrameOutcome {
        if !self.state.is_active() {
            return FrameOutcome::Inactive;
        }
        let Some(dt) = self.gate.accept(timestamp) else {
            return FrameOutcome::Skipped;
        };

        let crashed = tick(&mut self.state, &input.held(), timestamp, dt);
        self.dispatch_events(hooks);
        hooks.renderer.render(&self.state);

        if crashed {
            self.finish(hooks);
            FrameOutcome::Ended
        } else {
            FrameOutcome::Ticked
        }
    }

    /// Feed frames until the session ends or the source runs dry.
    /// Returns the number of ticks run.
    pub fn run(
        &mut self,
        frames: &mut dyn FrameSource,
        input: &dyn InputSource,
        hooks: &mut Hooks<'_>,
    ) -> u64 {
        let mut ticks = 0;
        while let Some(timestamp) = frames.next_frame() {
            match self.frame(timestamp, input, hooks) {
                FrameOutcome::Ticked => ticks += 1,
                FrameOutcome::Skipped => {}
                FrameOutcome::Ended => {
                    ticks += 1;
                    break;
                }
                FrameOutcome::Inactive => break,
            }
        }
        ticks
    }

    fn finish(&mut self, hooks: &mut Hooks<'_>) {
        hooks.audio.play(AudioCue::SessionStopped);
        let score = self.state.stats.score;
        let new_best = self.high_score.submit(score);
        log::info!(
            "Game over: score {score}, {} nuggets, {} fingers",
            self.state.stats.nuggets,
            self.state.stats.fingers
        );
        let snapshot = self.state.snapshot(self.high_score.best());
        hooks.ui.session_ended(&snapshot, new_best);
    }

    fn dispatch_events(&mut self, hooks: &mut Hooks<'_>) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::SessionStarted => hooks.audio.play(AudioCue::SessionStarted),
                GameEvent::Collected { kind, .. } => hooks.audio.play(AudioCue::Collected(kind)),
                GameEvent::Crashed { .. } => hooks.audio.play(AudioCue::Crashed),
                GameEvent::BoostStarted => log::debug!("boost on"),
                GameEvent::BoostEnded => log::debug!("boost off"),
                GameEvent::DifficultyUp { speed_scale, multiplier } => {
                    log::debug!("river speed x{speed_scale:.1}, score x{multiplier:.1}")
                }
            }
        }
    }
}
