//! Per-tick simulation pipeline
//!
//! Runs once per accepted frame, in a fixed order: boost expiry, difficulty,
//! player, spawns, motion, collisions, collection, time score.

use serde::{Deserialize, Serialize};

use super::collision::{check_collection, check_collisions};
use super::factory::{spawn_collectible, spawn_obstacle};
use super::motion::advance;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Logical player actions, independent of physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Forward,
    Backward,
}

/// Held actions for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
}

impl TickInput {
    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Forward => self.forward,
            Action::Backward => self.backward,
        }
    }

    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::Forward => self.forward = held,
            Action::Backward => self.backward = held,
        }
    }
}

/// Points earned for surviving `dt` ms at the given multiplier
pub fn time_score(dt: f64, multiplier: f32) -> u64 {
    (dt / SCORE_TIME_DIVISOR_MS * f64::from(multiplier)).floor().max(0.0) as u64
}

/// Advance an active session by one accepted tick.
///
/// `now` is the frame timestamp and `dt` the time since the previous accepted
/// tick, both in ms. Does nothing unless the session is active. Returns true
/// if the boat crashed this tick.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64, dt: f64) -> bool {
    if state.phase != GamePhase::Active {
        return false;
    }
    state.time_ticks += 1;

    if state.player.expire_boost(now) {
        state.events.push(GameEvent::BoostEnded);
    }

    let steps = state.difficulty.tick(
        dt,
        &mut state.rng,
        &mut state.obstacles,
        &mut state.collectibles,
    );
    if steps > 0 {
        state.events.push(GameEvent::DifficultyUp {
            speed_scale: state.difficulty.speed_scale,
            multiplier: state.difficulty.multiplier,
        });
    }

    state.player.update(input);

    let scale = state.difficulty.speed_scale;
    if now - state.last_obstacle_spawn > OBSTACLE_SPAWN_MS {
        let id = state.next_entity_id();
        let obstacle = spawn_obstacle(&mut state.rng, id, scale);
        state.obstacles.push(obstacle);
        state.last_obstacle_spawn = now;
    }
    if now - state.last_collectible_spawn > COLLECTIBLE_SPAWN_MS {
        let id = state.next_entity_id();
        let collectible = spawn_collectible(&mut state.rng, id, scale);
        state.collectibles.push(collectible);
        state.last_collectible_spawn = now;
    }

    let ratio = state.player.speed_ratio();
    advance(&mut state.obstacles, ratio);
    advance(&mut state.collectibles, ratio);

    if let Some(hit) = check_collisions(&state.player.bounds, &state.obstacles) {
        log::debug!("crashed into {} #{}", hit.obstacle.template().name, hit.entity_id);
        state.phase = GamePhase::Over;
        state.events.push(GameEvent::Crashed {
            obstacle: hit.obstacle,
        });
        return true;
    }

    let was_boosted = state.player.boost.active;
    let collection = check_collection(&mut state.player, &mut state.collectibles, now);
    state.stats.score += collection.score_delta;
    state.stats.nuggets += collection.nuggets;
    state.stats.fingers += collection.fingers;
    for kind in &collection.collected {
        state.events.push(GameEvent::Collected {
            kind: *kind,
            points: kind.template().points,
        });
    }
    if collection.boost_triggered && !was_boosted {
        state.events.push(GameEvent::BoostStarted);
    }

    state.stats.score += time_score(dt, state.difficulty.multiplier);

    false
}
