//! WebGPU rendering module
//!
//! The scene is rebuilt as a flat triangle list every frame (`scene`) and
//! drawn with a single vertex-colored pipeline (`pipeline`).

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, RiverRenderer, field_to_ndc};
pub use scene::{SceneBuilder, Water};
pub use vertex::Vertex;
