//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scenery and boat details. Entity body colors live in the
/// spawn templates.
pub mod colors {
    use crate::sim::templates::rgb;

    pub const WATER_TOP: [f32; 4] = rgb(0x1A7DB5);
    pub const WATER_BOTTOM: [f32; 4] = rgb(0x115577);
    pub const WAVE_CREST: [f32; 4] = [1.0, 1.0, 1.0, 0.2];

    pub const BOAT_HULL: [f32; 4] = rgb(0x8B4513);
    pub const BOAT_INTERIOR: [f32; 4] = rgb(0xDEB887);
    pub const OAR: [f32; 4] = rgb(0xA0522D);
    pub const ROWER_SHIRT: [f32; 4] = rgb(0xFF6347);
    pub const ROWER_SKIN: [f32; 4] = rgb(0xFFA07A);
    pub const BOOST_GLOW: [f32; 4] = [1.0, 0.843, 0.0, 0.3];
    pub const MOTION_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.6];

    pub const LOG_GRAIN: [f32; 4] = rgb(0x5D4037);
    pub const BARREL_HOOP: [f32; 4] = rgb(0x000000);
    pub const ROCK_CRACK: [f32; 4] = rgb(0x555555);
    pub const GOLD_FLECK: [f32; 4] = rgb(0xFFDD66);
    pub const PICKUP_GLOW: [f32; 4] = [1.0, 0.843, 0.0, 0.2];
}
