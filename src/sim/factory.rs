//! Entity spawning
//!
//! Picks a template uniformly, rolls speed/color/column, and places the new
//! entity just above the visible field so it scrolls in.

use glam::Vec2;
use rand::Rng;

use super::entity::Entity;
use super::templates::{CollectibleKind, EntityTemplate, ObstacleKind};
use crate::consts::FIELD_WIDTH;

/// Roll a scroll speed from the template's range, scaled by the global factor
pub fn sample_speed<R: Rng + ?Sized>(rng: &mut R, template: &EntityTemplate, scale: f32) -> f32 {
    let (min, max) = template.speed_range;
    let base = min + rng.random::<f32>() * (max - min);
    base * scale
}

/// Starting position: random column, top edge one body-height above the field
fn spawn_position<R: Rng + ?Sized>(rng: &mut R, template: &EntityTemplate) -> Vec2 {
    let x = rng.random::<f32>() * (FIELD_WIDTH - template.width);
    Vec2::new(x, -template.height)
}

pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R, id: u32, scale: f32) -> Entity {
    let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
    let template = kind.template();
    let color_index = rng.random_range(0..template.colors.len());
    let speed = sample_speed(rng, template, scale);
    let pos = spawn_position(rng, template);
    log::trace!("spawn {} #{id} at x={:.1} speed={speed:.2}", template.name, pos.x);
    Entity::obstacle(id, kind, pos, speed, color_index)
}

pub fn spawn_collectible<R: Rng + ?Sized>(rng: &mut R, id: u32, scale: f32) -> Entity {
    let kind = CollectibleKind::ALL[rng.random_range(0..CollectibleKind::ALL.len())];
    let template = kind.template();
    let speed = sample_speed(rng, template, scale);
    let pos = spawn_position(rng, template);
    log::trace!("spawn {} #{id} at x={:.1} speed={speed:.2}", template.name, pos.x);
    Entity::collectible(id, kind, pos, speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawned_obstacles_respect_template() {
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..200 {
            let e = spawn_obstacle(&mut rng, id, 1.3);
            let t = e.template();
            assert!(matches!(e.kind, EntityKind::Obstacle(_)));
            assert!(e.speed >= t.speed_range.0 * 1.3 - 1e-4);
            assert!(e.speed <= t.speed_range.1 * 1.3 + 1e-4);
            assert!(e.bounds.pos.x >= 0.0);
            assert!(e.bounds.right() <= FIELD_WIDTH);
            assert_eq!(e.bounds.pos.y, -t.height);
            assert!(t.colors.contains(&e.color));
        }
    }

    #[test]
    fn test_spawned_collectibles_respect_template() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen_nugget = false;
        let mut seen_finger = false;
        for id in 0..200 {
            let e = spawn_collectible(&mut rng, id, 1.0);
            let t = e.template();
            assert!(!e.is_collected());
            assert!(e.speed >= t.speed_range.0 && e.speed <= t.speed_range.1);
            assert_eq!(e.bounds.pos.y, -t.height);
            match e.kind {
                EntityKind::Collectible { kind: CollectibleKind::Nugget, .. } => seen_nugget = true,
                EntityKind::Collectible { kind: CollectibleKind::Finger, .. } => seen_finger = true,
                EntityKind::Obstacle(_) => panic!("factory produced an obstacle"),
            }
        }
        assert!(seen_nugget && seen_finger);
    }

    #[test]
    fn test_spawning_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(1234);
        let mut b = Pcg32::seed_from_u64(1234);
        for id in 0..20 {
            assert_eq!(spawn_obstacle(&mut a, id, 1.0), spawn_obstacle(&mut b, id, 1.0));
        }
    }
}
