//! River entities (obstacles and collectibles)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::templates::{CollectibleKind, Color, EntityTemplate, ObstacleKind};

/// What an entity is, with per-variant state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    Collectible { kind: CollectibleKind, collected: bool },
}

impl EntityKind {
    pub fn template(&self) -> &'static EntityTemplate {
        match self {
            EntityKind::Obstacle(kind) => kind.template(),
            EntityKind::Collectible { kind, .. } => kind.template(),
        }
    }
}

/// A spawned obstacle or collectible drifting down the river
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub bounds: Aabb,
    /// Scroll speed (pixels per tick at speed ratio 1.0). Rewritten in place
    /// when difficulty escalates.
    pub speed: f32,
    pub color: Color,
    pub points: u32,
}

impl Entity {
    /// Build an obstacle at `pos` using the template's `color_index`-th color
    pub fn obstacle(id: u32, kind: ObstacleKind, pos: Vec2, speed: f32, color_index: usize) -> Self {
        let template = kind.template();
        Self {
            id,
            kind: EntityKind::Obstacle(kind),
            bounds: Aabb::new(pos.x, pos.y, template.width, template.height),
            speed,
            color: template.colors[color_index % template.colors.len()],
            points: template.points,
        }
    }

    pub fn collectible(id: u32, kind: CollectibleKind, pos: Vec2, speed: f32) -> Self {
        let template = kind.template();
        Self {
            id,
            kind: EntityKind::Collectible {
                kind,
                collected: false,
            },
            bounds: Aabb::new(pos.x, pos.y, template.width, template.height),
            speed,
            color: template.colors[0],
            points: template.points,
        }
    }

    pub fn template(&self) -> &'static EntityTemplate {
        self.kind.template()
    }

    /// True once a collectible has been picked up (never for obstacles)
    pub fn is_collected(&self) -> bool {
        matches!(self.kind, EntityKind::Collectible { collected: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::templates::Category;

    #[test]
    fn test_obstacle_takes_template_dimensions() {
        let e = Entity::obstacle(7, ObstacleKind::Log, Vec2::new(10.0, -30.0), 3.0, 4);
        assert_eq!(e.bounds.size, Vec2::new(80.0, 30.0));
        assert_eq!(e.points, 1);
        // Color index wraps into the template's palette
        assert_eq!(e.color, ObstacleKind::Log.template().colors[1]);
        assert_eq!(e.template().category, Category::Obstacle);
        assert!(!e.is_collected());
    }

    #[test]
    fn test_collectible_starts_uncollected() {
        let e = Entity::collectible(1, CollectibleKind::Finger, Vec2::ZERO, 2.0);
        assert_eq!(e.bounds.size, Vec2::new(30.0, 15.0));
        assert_eq!(e.template().category, Category::Collectible);
        assert!(!e.is_collected());
        assert_eq!(e.template().name, "finger");
    }
}
