use quatcam_camera::{CameraSettings, SettingsError};
use quatcam_render_wgpu::DEFAULT_MIX_FACTOR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading the desktop configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("camera settings: {0}")]
    Camera(#[from] SettingsError),
    #[error("mix factor {0} is outside [0, 1]")]
    MixFactor(f32),
    #[error("window size {width}x{height} has a zero dimension")]
    WindowSize { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Quaternion Camera Demo".into(),
        }
    }
}

/// Image files for the two blended textures. Unset paths use built-in images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub primary: Option<PathBuf>,
    pub secondary: Option<PathBuf>,
}

/// Desktop configuration, read once at startup.
///
/// Every section is optional in the file; missing values take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraSettings,
    pub textures: TextureConfig,
    pub mix_factor: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraSettings::default(),
            textures: TextureConfig::default(),
            mix_factor: DEFAULT_MIX_FACTOR,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::WindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if !(0.0..=1.0).contains(&self.mix_factor) {
            return Err(ConfigError::MixFactor(self.mix_factor));
        }
        self.camera.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "Quaternion Camera Demo");
        assert_eq!(config.mix_factor, 0.2);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "\
window:
  title: Test
camera:
  field_of_view: 30.0
  position: [1.0, 2.0, 3.0]
textures:
  primary: container.jpg
";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.window.title, "Test");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.camera.field_of_view, 30.0);
        assert_eq!(config.camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.camera.movement_speed, 2.5);
        assert_eq!(config.textures.primary, Some(PathBuf::from("container.jpg")));
        assert_eq!(config.textures.secondary, None);
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = AppConfig::default();
        config.window.width = 1024;
        config.camera.sensitivity = 0.05;
        config.textures.secondary = Some(PathBuf::from("face.png"));
        let yaml = config.to_yaml().unwrap();
        assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            AppConfig::from_yaml("mix_factor: 1.5"),
            Err(ConfigError::MixFactor(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml("window: { width: 0 }"),
            Err(ConfigError::WindowSize { .. })
        ));
        assert!(matches!(
            AppConfig::from_yaml("camera: { field_of_view: 90.0 }"),
            Err(ConfigError::Camera(SettingsError::FieldOfView(_)))
        ));
        assert!(matches!(
            AppConfig::from_yaml("window: [1, 2]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quatcam.yaml");
        std::fs::write(&path, "window:\n  width: 640\n  height: 480\n").unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!((config.window.width, config.window.height), (640, 480));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }
}
