//! Entity templates
//!
//! Immutable descriptors for every obstacle and collectible type. The tables
//! are fixed at compile time; spawned entities only keep their kind and look
//! the template back up when they need it.

use serde::{Deserialize, Serialize};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Convert a `0xRRGGBB` literal to an opaque color
pub const fn rgb(hex: u32) -> Color {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
        1.0,
    ]
}

/// Which list an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Obstacle,
    Collectible,
}

/// Prototype for a class of river entities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityTemplate {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    /// Base scroll speed range `[min, max]` before the global speed scale
    pub speed_range: (f32, f32),
    /// Candidate colors; one is picked per spawned entity
    pub colors: &'static [Color],
    pub points: u32,
    pub category: Category,
}

/// Obstacle types - touching any of them sinks the boat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Log,
    Barrel,
    Rock,
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Nugget,
    /// Grants a temporary speed boost
    Finger,
}

const LOG: EntityTemplate = EntityTemplate {
    name: "log",
    width: 80.0,
    height: 30.0,
    speed_range: (2.5, 4.0),
    colors: &[rgb(0x8B4513), rgb(0xA0522D), rgb(0xCD853F)],
    points: 1,
    category: Category::Obstacle,
};

const BARREL: EntityTemplate = EntityTemplate {
    name: "barrel",
    width: 40.0,
    height: 40.0,
    speed_range: (3.0, 4.5),
    colors: &[rgb(0xB22222), rgb(0x8B0000), rgb(0xCD5C5C)],
    points: 2,
    category: Category::Obstacle,
};

const ROCK: EntityTemplate = EntityTemplate {
    name: "rock",
    width: 50.0,
    height: 50.0,
    speed_range: (1.5, 3.0),
    colors: &[rgb(0x696969), rgb(0x808080), rgb(0xA9A9A9)],
    points: 3,
    category: Category::Obstacle,
};

const NUGGET: EntityTemplate = EntityTemplate {
    name: "nugget",
    width: 20.0,
    height: 20.0,
    speed_range: (2.0, 3.5),
    colors: &[rgb(0xFFCC44)],
    points: 10,
    category: Category::Collectible,
};

const FINGER: EntityTemplate = EntityTemplate {
    name: "finger",
    width: 30.0,
    height: 15.0,
    speed_range: (2.0, 3.0),
    colors: &[rgb(0xFFAA00)],
    points: 25,
    category: Category::Collectible,
};

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Log, ObstacleKind::Barrel, ObstacleKind::Rock];

    pub fn template(self) -> &'static EntityTemplate {
        match self {
            ObstacleKind::Log => &LOG,
            ObstacleKind::Barrel => &BARREL,
            ObstacleKind::Rock => &ROCK,
        }
    }
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 2] = [CollectibleKind::Nugget, CollectibleKind::Finger];

    pub fn template(self) -> &'static EntityTemplate {
        match self {
            CollectibleKind::Nugget => &NUGGET,
            CollectibleKind::Finger => &FINGER,
        }
    }

    /// Whether collecting this kind activates the speed boost
    pub fn grants_boost(self) -> bool {
        matches!(self, CollectibleKind::Finger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(rgb(0xFF0000), [1.0, 0.0, 0.0, 1.0]);
        let c = rgb(0x8B4513);
        assert!((c[0] - 139.0 / 255.0).abs() < 1e-6);
        assert!((c[1] - 69.0 / 255.0).abs() < 1e-6);
        assert!((c[2] - 19.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_templates_are_well_formed() {
        for kind in ObstacleKind::ALL {
            let t = kind.template();
            assert_eq!(t.category, Category::Obstacle);
            assert!(t.speed_range.0 <= t.speed_range.1, "{}", t.name);
            assert!(!t.colors.is_empty());
        }
        for kind in CollectibleKind::ALL {
            let t = kind.template();
            assert_eq!(t.category, Category::Collectible);
            assert!(t.speed_range.0 <= t.speed_range.1, "{}", t.name);
            assert_eq!(t.colors.len(), 1);
        }
    }

    #[test]
    fn test_only_finger_grants_boost() {
        assert!(CollectibleKind::Finger.grants_boost());
        assert!(!CollectibleKind::Nugget.grants_boost());
        assert_eq!(CollectibleKind::Finger.template().points, 25);
    }
}
