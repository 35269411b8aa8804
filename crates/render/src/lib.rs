//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate the camera or the scene.
//! - A frame's view is built once, after all input for that frame is applied.
//!
//! The GPU backend lives in `quatcam-render-wgpu`. The debug text renderer
//! here exercises the same interface without a device.

mod renderer;
mod scene;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use scene::{CUBE_POSITIONS, CubeScene};

pub fn crate_info() -> &'static str {
    "quatcam-render v0.1.0"
}
