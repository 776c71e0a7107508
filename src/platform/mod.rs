//! Platform abstraction layer
//!
//! The game loop talks to the outside world only through these traits:
//! - Rendering (`RenderSink`)
//! - Screen/HUD notifications (`UiNotifier`)
//! - Sound (`AudioSink`)
//! - Held input (`InputSource`)
//! - Frame timestamps (`time::FrameSource`)

pub mod input;
pub mod time;

pub use input::Keyboard;
pub use time::{FixedFrames, FrameSource};

use crate::sim::{CollectibleKind, GameState, SessionSnapshot, TickInput};

/// Fire-and-forget sound notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Session started; background music on
    SessionStarted,
    Collected(CollectibleKind),
    Crashed,
    /// Session over; background music off
    SessionStopped,
}

/// Draws the current state. Called once per accepted tick.
pub trait RenderSink {
    fn render(&mut self, state: &GameState);
}

/// Receives lifecycle transitions for screen toggling and final stats
pub trait UiNotifier {
    fn session_started(&mut self, snapshot: &SessionSnapshot);
    fn session_ended(&mut self, snapshot: &SessionSnapshot, new_best: bool);
}

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Polled once per tick for the held action set
pub trait InputSource {
    fn held(&self) -> TickInput;
}

impl InputSource for TickInput {
    fn held(&self) -> TickInput {
        *self
    }
}

/// Collaborator for running without a display: draws nothing, logs the rest
#[derive(Debug, Default)]
pub struct Headless;

impl RenderSink for Headless {
    fn render(&mut self, _state: &GameState) {}
}

impl UiNotifier for Headless {
    fn session_started(&mut self, snapshot: &SessionSnapshot) {
        log::info!("Session started (best {})", snapshot.high_score);
    }

    fn session_ended(&mut self, snapshot: &SessionSnapshot, new_best: bool) {
        log::info!(
            "Session over: score {} ({} nuggets, {} fingers, {}){}",
            snapshot.score,
            snapshot.nuggets,
            snapshot.fingers,
            snapshot.multiplier_label(),
            if new_best { " - new best!" } else { "" }
        );
    }
}

impl AudioSink for Headless {
    fn play(&mut self, cue: AudioCue) {
        log::trace!("audio cue {cue:?}");
    }
}
