//! River Adventure - A scrolling river arcade game
//!
//! Core modules:
//! - `sim`: Simulation (player, entities, collisions, difficulty, per-tick pipeline)
//! - `game_loop`: Fixed-step frame gate and session orchestrator
//! - `platform`: Collaborator traits (render, UI, audio, input) and frame sources
//! - `renderer`: WebGPU rendering pipeline
//! - `highscores`: Best-score persistence

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game_loop;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{FrameGate, FrameOutcome, GameLoop, Hooks};
pub use highscores::{HighScore, HighScoreStore};
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Target simulation rate
    pub const FPS: f64 = 60.0;
    /// Minimum time between accepted ticks (ms)
    pub const FRAME_MS: f64 = 1000.0 / FPS;

    /// Play field (canvas) dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Player boat defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Distance from the bottom of the field to the boat's top edge at start
    pub const PLAYER_START_OFFSET: f32 = 100.0;
    pub const PLAYER_BASE_SPEED: f32 = 5.0;
    pub const PLAYER_MIN_SPEED: f32 = 2.0;
    pub const PLAYER_MAX_SPEED: f32 = 10.0;
    /// Row speed change per tick of forward/backward input
    pub const PLAYER_SPEED_INCREMENT: f32 = 0.2;

    /// Speed boost granted by the boost category collectible
    pub const BOOST_DURATION_MS: f64 = 3000.0;
    pub const BOOST_MULTIPLIER: f32 = 1.5;

    /// Spawn cadence (ms)
    pub const OBSTACLE_SPAWN_MS: f64 = 1500.0;
    pub const COLLECTIBLE_SPAWN_MS: f64 = 2000.0;

    /// Difficulty escalation
    pub const DIFFICULTY_INTERVAL_MS: f64 = 10_000.0;
    pub const SPEED_SCALE_STEP: f32 = 0.1;
    pub const MULTIPLIER_STEP: f32 = 0.2;

    /// Time score: one point per this many ms at multiplier 1.0
    pub const SCORE_TIME_DIVISOR_MS: f64 = 100.0;
}
