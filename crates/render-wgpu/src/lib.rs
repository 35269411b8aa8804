//! wgpu render backend for the camera demo.
//!
//! Draws the cube scene as one instanced draw call. Each face samples two
//! textures and blends them with a fixed mix factor.
//!
//! # Invariants
//! - Renderer never mutates the camera or the scene.
//! - View and projection come from a [`quatcam_render::RenderView`] built
//!   after the frame's input has been applied.

mod gpu;
mod shaders;

pub use gpu::{DEFAULT_MIX_FACTOR, WgpuRenderer};
