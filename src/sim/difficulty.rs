//! Difficulty escalation
//!
//! Every `DIFFICULTY_INTERVAL_MS` of game time the river speeds up and points
//! are worth more. Entities already on screen are re-rolled from their own
//! template range at the new scale, so they visibly lurch forward mid-flight.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::factory::sample_speed;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Global factor applied to every sampled entity speed (>= 1)
    pub speed_scale: f32,
    /// Score multiplier (>= 1)
    pub multiplier: f32,
    /// Game time accumulated while the session is active (ms)
    pub game_time: f64,
    /// Game time at which the last step was applied (ms)
    pub last_increase: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            speed_scale: 1.0,
            multiplier: 1.0,
            game_time: 0.0,
            last_increase: 0.0,
        }
    }
}

impl Difficulty {
    /// Accumulate `dt` ms of game time and apply one step per interval boundary
    /// crossed since the last step. Live entities are re-sampled after each
    /// step. Returns the number of steps applied.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        rng: &mut R,
        obstacles: &mut [Entity],
        collectibles: &mut [Entity],
    ) -> u32 {
        self.game_time += dt;

        let mut steps = 0;
        while self.game_time - self.last_increase >= DIFFICULTY_INTERVAL_MS {
            self.last_increase += DIFFICULTY_INTERVAL_MS;
            self.speed_scale += SPEED_SCALE_STEP;
            self.multiplier += MULTIPLIER_STEP;
            steps += 1;

            for entity in obstacles.iter_mut().chain(collectibles.iter_mut()) {
                entity.speed = sample_speed(rng, entity.template(), self.speed_scale);
            }

            log::debug!(
                "difficulty up: speed x{:.1}, score x{:.1} at {:.0}ms",
                self.speed_scale,
                self.multiplier,
                self.game_time
            );
        }
        steps
    }
}
