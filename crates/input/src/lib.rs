//! Input Context: window-system events collected per frame and applied to the camera.
//!
//! # Invariants
//! - The camera is passed in explicitly; nothing here holds global state.
//! - Every queued event is applied before the frame's matrices are read.
//! - Look events keep their arrival order and are applied one by one.

pub mod action;
pub mod state;

pub use action::{Action, Key};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "quatcam-input v0.1.0"
}
