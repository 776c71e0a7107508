//! River simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Driven only by timestamps and held input handed in by the caller
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod factory;
pub mod motion;
pub mod player;
pub mod state;
pub mod templates;
pub mod tick;

pub use collision::{Aabb, Collision, CollectionResult, check_collection, check_collisions};
pub use difficulty::Difficulty;
pub use entity::{Entity, EntityKind};
pub use factory::{spawn_collectible, spawn_obstacle};
pub use motion::advance;
pub use player::{Boost, Player};
pub use state::{GameEvent, GamePhase, GameState, SessionSnapshot, SessionStats};
pub use templates::{Category, CollectibleKind, Color, EntityTemplate, ObstacleKind};
pub use tick::{Action, TickInput, tick, time_score};
