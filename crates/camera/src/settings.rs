use crate::oriented::{MAX_FIELD_OF_VIEW, MIN_FIELD_OF_VIEW};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Construction parameters for an [`OrientedCamera`](crate::OrientedCamera).
///
/// These are read once at startup. Nothing writes them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Degrees of rotation per unit of raw pointer displacement.
    pub sensitivity: f32,
    /// World units travelled per second of held movement key.
    pub movement_speed: f32,
    /// Initial vertical field of view in degrees.
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            sensitivity: 0.1,
            movement_speed: 2.5,
            field_of_view: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Errors from camera settings validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("field of view {0} is outside [1, 45] degrees")]
    FieldOfView(f32),
    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
}

impl CameraSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let scalars = [
            ("position.x", self.position.x),
            ("position.y", self.position.y),
            ("position.z", self.position.z),
            ("sensitivity", self.sensitivity),
            ("movement_speed", self.movement_speed),
            ("field_of_view", self.field_of_view),
            ("near", self.near),
            ("far", self.far),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { field, value });
            }
        }

        if self.sensitivity <= 0.0 {
            return Err(SettingsError::NotPositive {
                field: "sensitivity",
                value: self.sensitivity,
            });
        }
        if self.movement_speed <= 0.0 {
            return Err(SettingsError::NotPositive {
                field: "movement_speed",
                value: self.movement_speed,
            });
        }
        if !(MIN_FIELD_OF_VIEW..=MAX_FIELD_OF_VIEW).contains(&self.field_of_view) {
            return Err(SettingsError::FieldOfView(self.field_of_view));
        }
        if self.near <= 0.0 || self.near >= self.far {
            return Err(SettingsError::ClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = CameraSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(settings.near, 0.1);
        assert_eq!(settings.far, 100.0);
    }

    #[test]
    fn rejects_non_finite() {
        let settings = CameraSettings {
            position: Vec3::new(0.0, f32::NAN, 0.0),
            ..CameraSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotFinite { field: "position.y", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let settings = CameraSettings {
            movement_speed: 0.0,
            ..CameraSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotPositive { field: "movement_speed", .. })
        ));
    }

    #[test]
    fn rejects_field_of_view_out_of_range() {
        let settings = CameraSettings {
            field_of_view: 60.0,
            ..CameraSettings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::FieldOfView(60.0)));
        let message = settings.validate().unwrap_err().to_string();
        assert!(message.contains("[1, 45]"));
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let settings = CameraSettings {
            near: 10.0,
            far: 1.0,
            ..CameraSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ClipPlanes { .. })
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: CameraSettings =
            serde_json::from_str(r#"{ "sensitivity": 0.2, "position": [1.0, 2.0, 3.0] }"#).unwrap();
        assert_eq!(settings.sensitivity, 0.2);
        assert_eq!(settings.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(settings.movement_speed, 2.5);
    }
}
