//! Scene assembly
//!
//! Turns a `GameState` into one triangle list in field coordinates: water,
//! obstacles, collectibles, then the boat on top.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::settings::{QualityPreset, Settings};
use crate::sim::{Aabb, CollectibleKind, Entity, EntityKind, GameState, ObstacleKind, Player};

/// Height of a wave crest above its row line
pub const WAVE_HEIGHT: f32 = 5.0;
/// Horizontal period of the crests
pub const WAVE_WIDTH: f32 = 30.0;
/// Scroll per rendered frame at base speed and difficulty 1.0
pub const WAVE_SPEED: f32 = 2.0;
/// How far below the row line each crest is filled
const WAVE_DEPTH: f32 = 10.0;
const WAVE_SEGMENTS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveRow {
    pub y: f32,
    /// Per-row phase so the rows don't line up
    pub offset: f32,
}

/// Animated water background
#[derive(Debug, Clone)]
pub struct Water {
    rows: Vec<WaveRow>,
    scroll: f32,
    rng: Pcg32,
}

impl Water {
    pub fn new(seed: u64, row_count: u32) -> Self {
        let mut water = Self {
            rows: Vec::new(),
            scroll: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        water.reseed(row_count);
        water
    }

    /// Lay out `row_count` evenly spaced rows with fresh random phases
    pub fn reseed(&mut self, row_count: u32) {
        let row_height = FIELD_HEIGHT / row_count.max(1) as f32;
        self.rows = (0..row_count)
            .map(|row| WaveRow {
                y: row as f32 * row_height,
                offset: self.rng.random::<f32>() * WAVE_WIDTH,
            })
            .collect();
    }

    pub fn rows(&self) -> &[WaveRow] {
        &self.rows
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Scroll rate tracking how fast the boat is rowing and how far
    /// difficulty has escalated
    pub fn scroll_rate(player: &Player, speed_scale: f32) -> f32 {
        WAVE_SPEED * player.speed_ratio() * speed_scale
    }

    pub fn advance(&mut self, rate: f32) {
        self.scroll += rate;
        if self.scroll > WAVE_WIDTH {
            self.scroll = 0.0;
        }
    }

    fn draw(&self, out: &mut Vec<Vertex>) {
        shapes::gradient_rect(
            out,
            Vec2::ZERO,
            Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            colors::WATER_TOP,
            colors::WATER_BOTTOM,
        );
        for row in &self.rows {
            let mut x = -WAVE_WIDTH;
            while x < FIELD_WIDTH + WAVE_WIDTH {
                shapes::wave_crest(
                    out,
                    x + row.offset + self.scroll,
                    row.y,
                    WAVE_WIDTH,
                    WAVE_HEIGHT,
                    WAVE_DEPTH,
                    colors::WAVE_CREST,
                    WAVE_SEGMENTS,
                );
                x += WAVE_WIDTH;
            }
        }
    }
}

/// Builds the per-frame vertex list
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    water: Water,
    quality: QualityPreset,
    animate_water: bool,
    boost_effects: bool,
    vertices: Vec<Vertex>,
}

impl SceneBuilder {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            water: Water::new(seed, settings.quality.wave_rows()),
            quality: settings.quality,
            animate_water: settings.animate_water(),
            boost_effects: settings.effective_boost_effects(),
            vertices: Vec::with_capacity(4096),
        }
    }

    pub fn water(&self) -> &Water {
        &self.water
    }

    /// New session: fresh wave phases
    pub fn restart(&mut self) {
        self.water.reseed(self.quality.wave_rows());
    }

    /// Assemble the frame for `state`. Each call is one displayed frame and
    /// moves the water along once.
    pub fn build(&mut self, state: &GameState) -> &[Vertex] {
        if self.animate_water {
            self.water
                .advance(Water::scroll_rate(&state.player, state.difficulty.speed_scale));
        }

        let segments = self.quality.circle_segments();
        let mut out = std::mem::take(&mut self.vertices);
        out.clear();

        self.water.draw(&mut out);
        for obstacle in &state.obstacles {
            draw_entity(&mut out, obstacle, segments);
        }
        for collectible in state.collectibles.iter().filter(|c| !c.is_collected()) {
            draw_entity(&mut out, collectible, segments);
        }
        draw_boat(&mut out, &state.player, self.boost_effects, segments);

        self.vertices = out;
        &self.vertices
    }
}

/// Point at fractional coordinates `(fx, fy)` inside `b`
fn at(b: &Aabb, fx: f32, fy: f32) -> Vec2 {
    b.pos + b.size * Vec2::new(fx, fy)
}

fn draw_entity(out: &mut Vec<Vertex>, entity: &Entity, segments: u32) {
    let b = &entity.bounds;
    match entity.kind {
        EntityKind::Obstacle(ObstacleKind::Log) => {
            shapes::rect(out, b.pos, b.size, entity.color);
            for i in 1..4 {
                let fy = i as f32 / 4.0;
                shapes::line(out, at(b, 0.0, fy), at(b, 1.0, fy), 2.0, colors::LOG_GRAIN);
            }
        }
        EntityKind::Obstacle(ObstacleKind::Barrel) => {
            shapes::rect(out, b.pos, b.size, entity.color);
            for fy in [0.33, 0.66] {
                shapes::line(out, at(b, 0.0, fy), at(b, 1.0, fy), 2.0, colors::BARREL_HOOP);
            }
        }
        EntityKind::Obstacle(ObstacleKind::Rock) => {
            let outline = [
                at(b, 0.5, 0.0),
                at(b, 1.0, 0.4),
                at(b, 0.8, 1.0),
                at(b, 0.2, 1.0),
                at(b, 0.0, 0.3),
            ];
            shapes::polygon(out, &outline, entity.color);
            shapes::line(out, at(b, 0.3, 0.3), at(b, 0.7, 0.5), 1.0, colors::ROCK_CRACK);
            shapes::line(out, at(b, 0.6, 0.2), at(b, 0.3, 0.6), 1.0, colors::ROCK_CRACK);
        }
        EntityKind::Collectible { kind: CollectibleKind::Nugget, .. } => {
            shapes::rounded_rect(out, b.pos, b.size, b.size.y / 4.0, entity.color, segments);
            for (fx, fy) in [(0.3, 0.3), (0.7, 0.6)] {
                shapes::circle(out, at(b, fx, fy), 2.0, colors::GOLD_FLECK, segments / 2);
            }
        }
        EntityKind::Collectible { kind: CollectibleKind::Finger, .. } => {
            shapes::rounded_rect(out, b.pos, b.size, b.size.y / 4.0, entity.color, segments);
            for fx in [0.2, 0.5, 0.8] {
                shapes::circle(out, at(b, fx, 0.5), 1.5, colors::GOLD_FLECK, segments / 2);
            }
            // Glow marks the boost pickup
            shapes::ellipse(out, b.center(), b.size * 1.5, colors::PICKUP_GLOW, segments);
        }
    }
}

fn draw_boat(out: &mut Vec<Vertex>, player: &Player, boost_effects: bool, segments: u32) {
    let b = &player.bounds;
    let (w, h) = (b.size.x, b.size.y);

    shapes::polygon(
        out,
        &[at(b, 0.0, 0.8), at(b, 1.0, 0.8), at(b, 0.8, 1.0), at(b, 0.2, 1.0)],
        colors::BOAT_HULL,
    );
    shapes::polygon(
        out,
        &[at(b, 0.1, 0.8), at(b, 0.9, 0.8), at(b, 0.75, 0.95), at(b, 0.25, 0.95)],
        colors::BOAT_INTERIOR,
    );

    // Oars
    let oar = Vec2::new(5.0, h * 0.3);
    shapes::rect(out, at(b, 0.0, 0.6) - Vec2::new(5.0, 0.0), oar, colors::OAR);
    shapes::rect(out, at(b, 1.0, 0.6), oar, colors::OAR);

    // Rower
    shapes::rect(out, at(b, 0.3, 0.4), Vec2::new(w * 0.4, h * 0.3), colors::ROWER_SHIRT);
    shapes::circle(out, at(b, 0.5, 0.3), w * 0.15, colors::ROWER_SKIN, segments);

    if player.boost.active {
        shapes::ellipse(out, b.center(), b.size * 1.2, colors::BOOST_GLOW, segments);
        if boost_effects {
            for i in 0..3 {
                let dy = i as f32 * 10.0;
                let left = at(b, 0.2, 1.0) + Vec2::new(0.0, dy);
                let right = at(b, 0.8, 1.0) + Vec2::new(0.0, dy);
                shapes::line(out, left, left + Vec2::new(-w * 0.7, 15.0), 2.0, colors::MOTION_LINE);
                shapes::line(out, right, right + Vec2::new(w * 0.7, 15.0), 2.0, colors::MOTION_LINE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ObstacleKind;

    fn has_color(vertices: &[Vertex], color: [f32; 4]) -> bool {
        vertices.iter().any(|v| v.color == color)
    }

    #[test]
    fn test_wave_rows_follow_quality() {
        for preset in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            let water = Water::new(1, preset.wave_rows());
            assert_eq!(water.rows().len() as u32, preset.wave_rows());
            assert_eq!(water.rows()[0].y, 0.0);
            assert!(water.rows().iter().all(|r| (0.0..WAVE_WIDTH).contains(&r.offset)));
        }
    }

    #[test]
    fn test_scroll_rate_tracks_speed() {
        let mut player = Player::default();
        assert_eq!(Water::scroll_rate(&player, 1.0), WAVE_SPEED);
        player.current_speed = player.base_speed * 2.0;
        assert_eq!(Water::scroll_rate(&player, 1.5), WAVE_SPEED * 3.0);
    }

    #[test]
    fn test_scroll_wraps() {
        let mut water = Water::new(1, 4);
        for _ in 0..15 {
            water.advance(WAVE_SPEED);
        }
        assert_eq!(water.scroll(), 30.0);
        water.advance(WAVE_SPEED);
        assert_eq!(water.scroll(), 0.0);
    }

    #[test]
    fn test_reduced_motion_freezes_water() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let mut scene = SceneBuilder::new(5, &settings);
        let state = GameState::new(5);
        scene.build(&state);
        scene.build(&state);
        assert_eq!(scene.water().scroll(), 0.0);

        let mut moving = SceneBuilder::new(5, &Settings::default());
        moving.build(&state);
        assert_eq!(moving.water().scroll(), WAVE_SPEED);
    }

    #[test]
    fn test_scene_draws_every_entity_kind() {
        let mut state = GameState::new(9);
        state.start();
        for (i, kind) in ObstacleKind::ALL.iter().enumerate() {
            state
                .obstacles
                .push(Entity::obstacle(i as u32, *kind, Vec2::new(50.0 * i as f32, 50.0), 2.0, 0));
        }
        state
            .collectibles
            .push(Entity::collectible(10, CollectibleKind::Finger, Vec2::new(200.0, 200.0), 2.0));

        let mut scene = SceneBuilder::new(9, &Settings::default());
        let vertices = scene.build(&state).to_vec();
        assert_eq!(vertices.len() % 3, 0);
        assert!(has_color(&vertices, colors::LOG_GRAIN));
        assert!(has_color(&vertices, colors::BARREL_HOOP));
        assert!(has_color(&vertices, colors::ROCK_CRACK));
        assert!(has_color(&vertices, colors::PICKUP_GLOW));
        assert!(has_color(&vertices, colors::BOAT_HULL));
        assert!(!has_color(&vertices, colors::BOOST_GLOW));
    }

    #[test]
    fn test_collected_items_are_hidden() {
        let mut state = GameState::new(9);
        state.collectibles.push(Entity::collectible(
            1,
            CollectibleKind::Nugget,
            Vec2::new(10.0, 10.0),
            2.0,
        ));
        let mut scene = SceneBuilder::new(9, &Settings::default());
        assert!(has_color(scene.build(&state), colors::GOLD_FLECK));

        if let EntityKind::Collectible { collected, .. } = &mut state.collectibles[0].kind {
            *collected = true;
        }
        assert!(!has_color(scene.build(&state), colors::GOLD_FLECK));
    }

    #[test]
    fn test_boost_effects() {
        let mut state = GameState::new(3);
        state.player.activate_boost(0.0);

        let mut scene = SceneBuilder::new(3, &Settings::default());
        let vertices = scene.build(&state).to_vec();
        assert!(has_color(&vertices, colors::BOOST_GLOW));
        assert!(has_color(&vertices, colors::MOTION_LINE));

        let settings = Settings {
            boost_effects: false,
            ..Default::default()
        };
        let mut plain = SceneBuilder::new(3, &settings);
        let vertices = plain.build(&state).to_vec();
        assert!(has_color(&vertices, colors::BOOST_GLOW));
        assert!(!has_color(&vertices, colors::MOTION_LINE));
    }
}
