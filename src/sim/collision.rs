//! Collision and collection detection
//!
//! Everything on the river is an axis-aligned box. Obstacle overlap ends the
//! run; collectible overlap is consumed for points (and maybe a boost).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::player::Player;
use super::templates::{CollectibleKind, ObstacleKind};

/// Axis-aligned bounding box (top-left origin, y grows downstream)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test; boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// A fatal overlap between the boat and an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub entity_id: u32,
    pub obstacle: ObstacleKind,
}

/// Find the first obstacle overlapping the player, in list order.
///
/// Any hit is fatal, so which one is reported only matters for logging.
pub fn check_collisions(player: &Aabb, obstacles: &[Entity]) -> Option<Collision> {
    obstacles.iter().find_map(|o| match o.kind {
        EntityKind::Obstacle(obstacle) if player.overlaps(&o.bounds) => Some(Collision {
            entity_id: o.id,
            obstacle,
        }),
        _ => None,
    })
}

/// Outcome of one collection pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionResult {
    pub score_delta: u64,
    pub nuggets: u32,
    pub fingers: u32,
    pub boost_triggered: bool,
    /// Kinds picked up this pass, in list order
    pub collected: Vec<CollectibleKind>,
}

impl CollectionResult {
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }
}

/// Mark every overlapping collectible as collected and tally the rewards.
///
/// Already-collected entities are skipped. Boost-granting kinds activate (or
/// extend) the player's boost relative to `now`.
pub fn check_collection(player: &mut Player, collectibles: &mut [Entity], now: f64) -> CollectionResult {
    let mut result = CollectionResult::default();
    let player_box = player.bounds;

    for entity in collectibles.iter_mut() {
        let points = entity.points;
        let EntityKind::Collectible { kind, collected } = &mut entity.kind else {
            continue;
        };
        if *collected || !player_box.overlaps(&entity.bounds) {
            continue;
        }

        *collected = true;
        result.score_delta += u64::from(points);
        result.collected.push(*kind);
        match kind {
            CollectibleKind::Nugget => result.nuggets += 1,
            CollectibleKind::Finger => result.fingers += 1,
        }
        if kind.grants_boost() {
            player.activate_boost(now);
            result.boost_triggered = true;
        }
    }

    result
}
