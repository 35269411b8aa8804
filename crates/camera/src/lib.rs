//! Camera Core: quaternion first-person camera driven by raw pointer, key and scroll input.
//!
//! # Invariants
//! - Orientation is a unit quaternion, renormalized after every update.
//! - `front`, `up` and `right` are derived from the orientation, never stored.
//! - Yaw turns about the fixed world up axis, pitch about the local right axis.
//! - Pitch stays within ±89° unless the caller disables the constraint.
//! - Field of view stays within [1°, 45°].

mod basis;
mod oriented;
mod settings;

pub use basis::{Basis, WORLD_UP, look_rotation};
pub use oriented::{
    CameraSnapshot, MAX_FIELD_OF_VIEW, MAX_PITCH_DEGREES, MIN_FIELD_OF_VIEW, MoveDirection,
    OrientedCamera,
};
pub use settings::{CameraSettings, SettingsError};

pub fn crate_info() -> &'static str {
    "quatcam-camera v0.1.0"
}
