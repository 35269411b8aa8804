use crate::basis::{Basis, WORLD_UP, look_rotation};
use crate::settings::{CameraSettings, SettingsError};
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Largest elevation the camera may look above or below the horizon.
pub const MAX_PITCH_DEGREES: f32 = 89.0;
pub const MIN_FIELD_OF_VIEW: f32 = 1.0;
pub const MAX_FIELD_OF_VIEW: f32 = 45.0;

/// Below this length the horizontal part of `front` carries no heading.
const MIN_HEADING_LENGTH: f32 = 1e-3;

/// Movement directions understood by [`OrientedCamera::apply_move_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera whose orientation is a unit quaternion.
///
/// Yaw is applied about the world up axis and pitch about the camera's own
/// right axis, so roll never accumulates. After each look update the pitch is
/// held within ±[`MAX_PITCH_DEGREES`] by rebuilding the orientation from a
/// fresh orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedCamera {
    position: Vec3,
    orientation: Quat,
    sensitivity: f32,
    movement_speed: f32,
    field_of_view: f32,
    near: f32,
    far: f32,
}

impl Default for OrientedCamera {
    fn default() -> Self {
        Self::from_valid_settings(&CameraSettings::default())
    }
}

impl OrientedCamera {
    /// Build a camera from validated settings, looking down −Z.
    pub fn from_settings(settings: &CameraSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::from_valid_settings(settings))
    }

    fn from_valid_settings(settings: &CameraSettings) -> Self {
        Self {
            position: settings.position,
            orientation: Quat::IDENTITY,
            sensitivity: settings.sensitivity,
            movement_speed: settings.movement_speed,
            field_of_view: settings
                .field_of_view
                .clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW),
            near: settings.near,
            far: settings.far,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Vertical field of view in degrees.
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn front(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn basis(&self) -> Basis {
        Basis::from_orientation(self.orientation)
    }

    /// Elevation of the view direction above the horizon, in degrees.
    pub fn pitch_degrees(&self) -> f32 {
        pitch_of(self.front())
    }

    /// Compass heading in degrees: 0 looks down −Z, positive turns right.
    pub fn heading_degrees(&self) -> f32 {
        let heading = self.horizontal_heading();
        heading.x.atan2(-heading.z).to_degrees()
    }

    /// Turn the camera by a raw pointer displacement.
    ///
    /// Both deltas are scaled by the sensitivity and read as degrees. A
    /// positive `dx` turns right, a positive `dy` (screen-down) looks down.
    /// With `constrain_pitch` the rotation stops at vertical and the result
    /// is clamped to ±[`MAX_PITCH_DEGREES`].
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }

        let yaw_degrees = -dx * self.sensitivity;
        let mut pitch_degrees = -dy * self.sensitivity;
        if !yaw_degrees.is_finite() || !pitch_degrees.is_finite() {
            return;
        }

        let yaw = Quat::from_axis_angle(WORLD_UP, yaw_degrees.to_radians());
        let yawed = (yaw * self.orientation).normalize();

        if let Some(right) = (yawed * Vec3::X).try_normalize() {
            if constrain_pitch {
                // Rotating past vertical would wrap the elevation back into
                // range with the camera upside down, so stop the step there.
                let current = pitch_of(yawed * Vec3::NEG_Z);
                pitch_degrees = pitch_degrees.clamp(-90.0 - current, 90.0 - current);
            }
            let pitch = Quat::from_axis_angle(right, pitch_degrees.to_radians());
            self.orientation = (pitch * yawed).normalize();
        } else {
            self.orientation = yawed;
        }

        if constrain_pitch {
            self.clamp_pitch();
        }
    }

    /// Hold the view direction within ±[`MAX_PITCH_DEGREES`] of the horizon.
    ///
    /// Past the limit the front vector is rebuilt at exactly the limit with
    /// its heading preserved, and the orientation is re-derived from the
    /// resulting orthonormal basis.
    pub fn clamp_pitch(&mut self) {
        // Compared on the sine, since asin near the limit loses too much
        // precision to catch a small excess.
        let elevation = self.front().y;
        let limit = MAX_PITCH_DEGREES.to_radians();
        if elevation.abs() <= limit.sin() {
            return;
        }

        let pitch = self.pitch_degrees();
        let limited = limit.copysign(elevation);
        let heading = self.horizontal_heading();
        let front = (heading * limited.cos() + WORLD_UP * limited.sin()).normalize_or(heading);

        let right = front.cross(WORLD_UP).normalize_or(Vec3::X);
        let up = right.cross(front).normalize_or(WORLD_UP);
        self.orientation = look_rotation(front, up);

        tracing::debug!(
            from = pitch,
            to = self.pitch_degrees(),
            "pitch clamped"
        );
    }

    /// Translate along the camera frame for `elapsed_seconds` of movement.
    ///
    /// Holding several directions means several calls per frame; the
    /// combined displacement is not normalized, so diagonals move faster.
    pub fn apply_move_delta(&mut self, direction: MoveDirection, elapsed_seconds: f32) {
        if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
            return;
        }

        let distance = self.movement_speed * elapsed_seconds;
        let offset = match direction {
            MoveDirection::Forward => self.front(),
            MoveDirection::Backward => -self.front(),
            MoveDirection::Left => -self.right(),
            MoveDirection::Right => self.right(),
        };
        self.position += offset * distance;
    }

    /// Narrow (positive scroll) or widen (negative scroll) the field of view.
    pub fn apply_zoom_delta(&mut self, scroll_amount: f32) {
        if !scroll_amount.is_finite() {
            return;
        }
        self.field_of_view =
            (self.field_of_view - scroll_amount).clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.up())
    }

    /// Perspective projection with a 0..1 depth range.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        Mat4::perspective_rh(self.field_of_view.to_radians(), aspect, self.near, self.far)
    }

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            position: self.position.to_array(),
            orientation: self.orientation.to_array(),
            pitch_degrees: self.pitch_degrees(),
            heading_degrees: self.heading_degrees(),
            field_of_view: self.field_of_view,
        }
    }

    /// Unit horizontal direction the camera faces.
    ///
    /// Taken from `front` projected onto the ground plane, or from `right`
    /// when the camera looks straight up or down.
    fn horizontal_heading(&self) -> Vec3 {
        let front = self.front();
        let flat = Vec3::new(front.x, 0.0, front.z);
        if flat.length() > MIN_HEADING_LENGTH {
            return flat.normalize();
        }
        let right = self.right();
        WORLD_UP
            .cross(Vec3::new(right.x, 0.0, right.z))
            .normalize_or(Vec3::NEG_Z)
    }
}

/// Read-only view of the camera state, for reports and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSnapshot {
    pub position: [f32; 3],
    pub orientation: [f32; 4],
    pub pitch_degrees: f32,
    pub heading_degrees: f32,
    pub field_of_view: f32,
}

fn pitch_of(front: Vec3) -> f32 {
    front.y.clamp(-1.0, 1.0).asin().to_degrees()
}
