//! # Scene Configuration
//!
//! Serializable configuration for a [`Scene`](crate::scene::Scene): stage and
//! device viewport sizes, initial camera, environment, input and picking
//! behaviour, and action pool sizing. Files may be TOML or RON, selected by
//! extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::picking::PickMode;
use crate::render::Environment;

/// On-disk encodings, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Serde-backed settings that can live in a `.toml` or `.ron` file
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Read and decode `path`; missing fields fall back to `Default`
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::of(path)?;
        let text = std::fs::read_to_string(path)?;
        let config = match format {
            Format::Toml => toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?,
            Format::Ron => ron::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?,
        };
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Encode and write to `path`, replacing any existing file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Failures loading, saving or validating a configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid for its format
    #[error("cannot parse config: {0}")]
    Parse(String),

    /// The value could not be encoded
    #[error("cannot encode config: {0}")]
    Serialize(String),

    /// Extension is neither `.toml` nor `.ron`
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but cannot drive a scene
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// # Camera Configuration
///
/// Initial perspective camera placement. The field of view is in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_degrees: 67.0,
            near: 0.1,
            far: 300.0,
        }
    }
}

/// # Scene Configuration
///
/// Top-level configuration a scene is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Stage width in stage units
    pub stage_width: f32,
    /// Stage height in stage units
    pub stage_height: f32,
    /// Whether the stage keeps its aspect ratio inside the device viewport
    pub keep_aspect_ratio: bool,
    /// Device viewport width in pixels
    pub device_width: f32,
    /// Device viewport height in pixels
    pub device_height: f32,
    /// Whether pointer events are forwarded to the picker
    pub hit_testing: bool,
    /// Intersection strategy used when resolving pointer events
    pub pick_mode: PickMode,
    /// Upper bound for a single frame delta, in seconds (0 disables clamping)
    pub max_frame_delta: f32,
    /// Maximum number of recycled actions kept per action kind
    pub action_pool_capacity: usize,
    /// Initial camera
    pub camera: CameraConfig,
    /// Lighting environment handed to the renderer
    pub environment: Environment,
}

impl SceneConfig {
    /// Create a configuration for a stage of the given size, device size equal
    /// to the stage size
    pub fn new(stage_width: f32, stage_height: f32) -> Self {
        Self {
            stage_width,
            stage_height,
            device_width: stage_width,
            device_height: stage_height,
            ..Default::default()
        }
    }

    /// Set the device viewport size
    pub fn with_device_size(mut self, width: f32, height: f32) -> Self {
        self.device_width = width;
        self.device_height = height;
        self
    }

    /// Keep or stretch the stage aspect ratio
    pub fn with_keep_aspect_ratio(mut self, keep: bool) -> Self {
        self.keep_aspect_ratio = keep;
        self
    }

    /// Set the pick strategy
    pub fn with_pick_mode(mut self, mode: PickMode) -> Self {
        self.pick_mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stage_width <= 0.0 || self.stage_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stage size must be positive, got {}x{}",
                self.stage_width, self.stage_height
            )));
        }
        if self.device_width <= 0.0 || self.device_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "device size must be positive, got {}x{}",
                self.device_width, self.device_height
            )));
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                self.camera.near, self.camera.far
            )));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            stage_width: 852.0,
            stage_height: 480.0,
            keep_aspect_ratio: false,
            device_width: 852.0,
            device_height: 480.0,
            hit_testing: true,
            pick_mode: PickMode::BoundingSphere,
            max_frame_delta: 1.0 / 30.0,
            action_pool_capacity: 100,
            camera: CameraConfig::default(),
            environment: Environment::default(),
        }
    }
}

impl Config for SceneConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_clip_planes_rejected() {
        let mut config = SceneConfig::default();
        config.camera.far = 0.05;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let path = std::env::temp_dir().join("scene3d_config_test.toml");

        let config = SceneConfig::new(640.0, 480.0)
            .with_device_size(1280.0, 720.0)
            .with_keep_aspect_ratio(true)
            .with_pick_mode(PickMode::Triangles);
        config.save_to_file(&path).unwrap();

        let loaded = SceneConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.stage_width, 640.0);
        assert_eq!(loaded.device_height, 720.0);
        assert!(loaded.keep_aspect_ratio);
        assert_eq!(loaded.pick_mode, PickMode::Triangles);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: SceneConfig = ron::from_str("(stage_width: 100.0, hit_testing: false)").unwrap();
        assert_eq!(config.stage_width, 100.0);
        assert!(!config.hit_testing);
        assert_eq!(config.action_pool_capacity, 100);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SceneConfig::load_from_file("scene.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
