//! Game state and core simulation types
//!
//! One `GameState` owns everything a session mutates: the boat, both entity
//! lists, score counters, difficulty and the seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::entity::Entity;
use super::player::Player;
use super::templates::{CollectibleKind, ObstacleKind};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, no session has run yet
    Idle,
    /// Session in progress
    Active,
    /// Boat crashed; state frozen until restart
    Over,
}

/// Per-session counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u64,
    pub nuggets: u32,
    pub fingers: u32,
}

/// Session summary handed to the UI on start and on game over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub score: u64,
    pub multiplier: f32,
    pub nuggets: u32,
    pub fingers: u32,
    /// Game time survived (ms)
    pub elapsed_ms: f64,
    pub high_score: u64,
}

impl SessionSnapshot {
    /// Multiplier as shown on the HUD, e.g. `x1.2`
    pub fn multiplier_label(&self) -> String {
        format!("x{:.1}", self.multiplier)
    }
}

/// Things that happened during a tick, drained by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    Collected { kind: CollectibleKind, points: u32 },
    BoostStarted,
    BoostEnded,
    DifficultyUp { speed_scale: f32, multiplier: f32 },
    Crashed { obstacle: ObstacleKind },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Entity>,
    /// Live collectibles, in spawn order
    pub collectibles: Vec<Entity>,
    pub stats: SessionStats,
    pub difficulty: Difficulty,
    /// Timestamp (ms) of the last obstacle spawn
    pub last_obstacle_spawn: f64,
    /// Timestamp (ms) of the last collectible spawn
    pub last_collectible_spawn: f64,
    /// Accepted ticks this session
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            stats: SessionStats::default(),
            difficulty: Difficulty::default(),
            last_obstacle_spawn: 0.0,
            last_collectible_spawn: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reset every session field and go active. Used for both the first start
    /// and restarts after game over. Spawn timers restart from zero, so the
    /// first tick of a session spawns an obstacle and a collectible.
    pub fn start(&mut self) {
        self.phase = GamePhase::Active;
        self.player.reset();
        self.obstacles.clear();
        self.collectibles.clear();
        self.stats = SessionStats::default();
        self.difficulty = Difficulty::default();
        self.last_obstacle_spawn = 0.0;
        self.last_collectible_spawn = 0.0;
        self.time_ticks = 0;
        self.events.clear();
        self.events.push(GameEvent::SessionStarted);
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn snapshot(&self, high_score: u64) -> SessionSnapshot {
        SessionSnapshot {
            score: self.stats.score,
            multiplier: self.difficulty.multiplier,
            nuggets: self.stats.nuggets,
            fingers: self.stats.fingers,
            elapsed_ms: self.difficulty.game_time,
            high_score,
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
