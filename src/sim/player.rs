//! The player's rowboat
//!
//! Rowing forward speeds the boat (and therefore the river) up, backing water
//! slows it down. A collected finger grants a short multiplicative boost.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::tick::{Action, TickInput};
use crate::consts::*;

/// Temporary speed boost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    pub active: bool,
    /// Timestamp (ms) at which the boost ends
    pub end_time: f64,
    pub duration: f64,
    pub multiplier: f32,
}

impl Default for Boost {
    fn default() -> Self {
        Self {
            active: false,
            end_time: 0.0,
            duration: BOOST_DURATION_MS,
            multiplier: BOOST_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Aabb,
    pub base_speed: f32,
    /// Current row speed, kept within `[min_speed, max_speed]`
    pub current_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub boost: Boost,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            bounds: Aabb {
                pos: Self::start_position(),
                size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            },
            base_speed: PLAYER_BASE_SPEED,
            current_speed: PLAYER_BASE_SPEED,
            min_speed: PLAYER_MIN_SPEED,
            max_speed: PLAYER_MAX_SPEED,
            speed_increment: PLAYER_SPEED_INCREMENT,
            boost: Boost::default(),
        }
    }
}

impl Player {
    /// Centered horizontally, near the bottom of the field
    pub fn start_position() -> Vec2 {
        Vec2::new(
            FIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            FIELD_HEIGHT - PLAYER_START_OFFSET,
        )
    }

    /// Back to the start of a session: centered, base speed, no boost
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Row speed including the boost multiplier
    pub fn effective_speed(&self) -> f32 {
        if self.boost.active {
            self.current_speed * self.boost.multiplier
        } else {
            self.current_speed
        }
    }

    /// Scroll rate factor for the world: effective speed over base speed
    pub fn speed_ratio(&self) -> f32 {
        self.effective_speed() / self.base_speed
    }

    /// Start the boost, or push its end out if it is already running
    pub fn activate_boost(&mut self, now: f64) {
        self.boost.active = true;
        self.boost.end_time = now + self.boost.duration;
    }

    /// Turn the boost off once `now` reaches its end time. Returns true on the
    /// tick it expires.
    pub fn expire_boost(&mut self, now: f64) -> bool {
        if self.boost.active && now >= self.boost.end_time {
            self.boost.active = false;
            return true;
        }
        false
    }

    /// Apply one tick of held input, then clamp into the field
    pub fn update(&mut self, input: &TickInput) {
        let max_x = FIELD_WIDTH - self.bounds.size.x;
        let max_y = FIELD_HEIGHT - self.bounds.size.y;
        let step = self.current_speed;
        let pos = &mut self.bounds.pos;

        if input.is_held(Action::Left) && pos.x > 0.0 {
            pos.x -= step;
        }
        if input.is_held(Action::Right) && pos.x < max_x {
            pos.x += step;
        }

        if input.is_held(Action::Forward) && pos.y > 0.0 {
            pos.y -= step;
            self.current_speed = (self.current_speed + self.speed_increment).min(self.max_speed);
        }
        // Uses the updated row speed when both directions are held
        if input.is_held(Action::Backward) && pos.y < max_y {
            pos.y += self.current_speed;
            self.current_speed = (self.current_speed - self.speed_increment).max(self.min_speed);
        }

        self.clamp_to_field();
    }

    fn clamp_to_field(&mut self) {
        let max = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT) - self.bounds.size;
        self.bounds.pos = self.bounds.pos.clamp(Vec2::ZERO, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn held(actions: &[Action]) -> TickInput {
        let mut input = TickInput::default();
        for action in actions {
            input.set(*action, true);
        }
        input
    }

    #[test]
    fn test_default_position() {
        let player = Player::default();
        assert_eq!(player.bounds.pos, Vec2::new(180.0, 400.0));
        assert_eq!(player.current_speed, PLAYER_BASE_SPEED);
        assert!(!player.boost.active);
    }

    #[test]
    fn test_horizontal_movement_uses_current_speed() {
        let mut player = Player::default();
        player.update(&held(&[Action::Left]));
        assert_eq!(player.bounds.pos.x, 175.0);
        player.update(&held(&[Action::Right]));
        assert_eq!(player.bounds.pos.x, 180.0);
        assert_eq!(player.current_speed, PLAYER_BASE_SPEED);
    }

    #[test]
    fn test_forward_accelerates_up_to_max() {
        let mut player = Player::default();
        player.update(&held(&[Action::Forward]));
        assert_eq!(player.bounds.pos.y, 395.0);
        assert!((player.current_speed - 5.2).abs() < 1e-5);

        for _ in 0..100 {
            player.update(&held(&[Action::Forward]));
        }
        assert_eq!(player.current_speed, PLAYER_MAX_SPEED);
        assert_eq!(player.bounds.pos.y, 0.0);
    }

    #[test]
    fn test_backward_decelerates_down_to_min() {
        let mut player = Player::default();
        player.bounds.pos.y = 0.0;
        for _ in 0..40 {
            player.update(&held(&[Action::Backward]));
        }
        assert_eq!(player.current_speed, PLAYER_MIN_SPEED);
        assert!(player.bounds.pos.y <= FIELD_HEIGHT - PLAYER_HEIGHT);
    }

    #[test]
    fn test_no_acceleration_when_pinned_at_top() {
        let mut player = Player::default();
        player.bounds.pos.y = 0.0;
        player.update(&held(&[Action::Forward]));
        assert_eq!(player.current_speed, PLAYER_BASE_SPEED);
    }

    #[test]
    fn test_clamps_without_input() {
        let mut player = Player::default();
        player.bounds.pos = Vec2::new(-12.0, 900.0);
        player.update(&TickInput::default());
        assert_eq!(player.bounds.pos, Vec2::new(0.0, FIELD_HEIGHT - PLAYER_HEIGHT));
    }

    #[test]
    fn test_boost_lifecycle() {
        let mut player = Player::default();
        player.activate_boost(1000.0);
        assert!(player.boost.active);
        assert_eq!(player.boost.end_time, 4000.0);
        assert!((player.effective_speed() - 7.5).abs() < 1e-5);
        assert!((player.speed_ratio() - 1.5).abs() < 1e-5);

        // Re-collecting overwrites the end time
        player.activate_boost(2500.0);
        assert_eq!(player.boost.end_time, 5500.0);

        assert!(!player.expire_boost(5499.0));
        assert!(player.boost.active);
        assert!(player.expire_boost(5500.0));
        assert!(!player.boost.active);
        assert_eq!(player.effective_speed(), player.current_speed);
    }

    proptest! {
        #[test]
        fn prop_boost_active_implies_before_end(
            starts in proptest::collection::vec(0.0f64..20_000.0, 1..8),
            check_at in 0.0f64..30_000.0,
        ) {
            let mut player = Player::default();
            let mut sorted = starts.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for start in sorted {
                player.activate_boost(start);
            }
            player.expire_boost(check_at);
            if player.boost.active {
                prop_assert!(check_at < player.boost.end_time);
            }
        }

        #[test]
        fn prop_player_always_inside_field(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 1..200),
        ) {
            let mut player = Player::default();
            for (l, r, f, b) in moves {
                let mut input = TickInput::default();
                input.set(Action::Left, l);
                input.set(Action::Right, r);
                input.set(Action::Forward, f);
                input.set(Action::Backward, b);
                player.update(&input);
                prop_assert!(player.bounds.pos.x >= 0.0);
                prop_assert!(player.bounds.right() <= FIELD_WIDTH);
                prop_assert!(player.bounds.pos.y >= 0.0);
                prop_assert!(player.bounds.bottom() <= FIELD_HEIGHT);
                prop_assert!(player.current_speed >= player.min_speed);
                prop_assert!(player.current_speed <= player.max_speed);
            }
        }
    }
}
