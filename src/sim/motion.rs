//! Entity motion
//!
//! The world scrolls toward the boat; the harder the player rows, the faster
//! everything comes at them.

use super::entity::Entity;
use crate::consts::FIELD_HEIGHT;

/// Move every entity downstream by `speed * speed_ratio`, then drop the ones
/// past the bottom of the field and any collectible already picked up.
///
/// `speed_ratio` is the player's effective speed over their base speed.
pub fn advance(entities: &mut Vec<Entity>, speed_ratio: f32) {
    for entity in entities.iter_mut() {
        entity.bounds.pos.y += entity.speed * speed_ratio;
    }
    entities.retain(|e| e.bounds.pos.y <= FIELD_HEIGHT && !e.is_collected());
}
