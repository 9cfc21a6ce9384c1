//! Runtime camera configuration.
//!
//! Every field defaults to the matching compile-time constant from
//! `pixel_camera_types`, so an empty TOML document is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_SPEED, DEFAULT_ZOOM, MAX_SPEED, MAX_ZOOM, MIN_DISPLAY_HEIGHT, MIN_DISPLAY_WIDTH,
    MIN_SPEED, MIN_ZOOM, SPEED_STEP, ZOOM_STEP,
};

/// Camera limits and step sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Smallest display width, in display pixels (default: 1280)
    pub min_display_width: u32,
    /// Smallest display height, in display pixels (default: 720)
    pub min_display_height: u32,
    /// Lower zoom clamp (default: 0.75)
    pub min_zoom: f32,
    /// Upper zoom clamp (default: 2.0)
    pub max_zoom: f32,
    /// Zoom at startup (default: 1.0)
    pub default_zoom: f32,
    /// Zoom change per zoom action (default: 0.1)
    pub zoom_step: f32,
    /// Lower speed clamp, world units per step (default: 1.0)
    pub min_speed: f32,
    /// Upper speed clamp, world units per step (default: 20.0)
    pub max_speed: f32,
    /// Speed at startup (default: 7.5)
    pub default_speed: f32,
    /// Speed change per speed action (default: 1.0)
    pub speed_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_display_width: MIN_DISPLAY_WIDTH,
            min_display_height: MIN_DISPLAY_HEIGHT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            default_zoom: DEFAULT_ZOOM,
            zoom_step: ZOOM_STEP,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            default_speed: DEFAULT_SPEED,
            speed_step: SPEED_STEP,
        }
    }
}

impl CameraConfig {
    /// Preset for a terminal display measured in half-block pixels.
    ///
    /// An 80x24 terminal is 80x48 pixels, far below 1280x720, so the
    /// minimum display is shrunk and the speed scaled down to match.
    pub fn terminal() -> Self {
        Self {
            min_display_width: 80,
            min_display_height: 48,
            default_speed: 1.5,
            min_speed: 0.25,
            max_speed: 8.0,
            speed_step: 0.25,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: CameraConfig = toml::from_str(s)?;
        config.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Normalize and check the config.
    ///
    /// Inverted ranges are swapped and defaults are clamped into range.
    /// Non-finite or non-positive values are rejected.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        require_positive_u32("min_display_width", self.min_display_width)?;
        require_positive_u32("min_display_height", self.min_display_height)?;
        require_positive("min_zoom", self.min_zoom)?;
        require_positive("max_zoom", self.max_zoom)?;
        require_positive("default_zoom", self.default_zoom)?;
        require_positive("zoom_step", self.zoom_step)?;
        require_positive("min_speed", self.min_speed)?;
        require_positive("max_speed", self.max_speed)?;
        require_positive("default_speed", self.default_speed)?;
        require_positive("speed_step", self.speed_step)?;

        if self.min_zoom > self.max_zoom {
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        if self.min_speed > self.max_speed {
            std::mem::swap(&mut self.min_speed, &mut self.max_speed);
        }
        self.default_zoom = self.default_zoom.clamp(self.min_zoom, self.max_zoom);
        self.default_speed = self.default_speed.clamp(self.min_speed, self.max_speed);
        Ok(self)
    }

    /// Clamp a zoom value into the configured range.
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    pub fn min_display_size(&self) -> (u32, u32) {
        (self.min_display_width, self.min_display_height)
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value: value.to_string(),
        })
    }
}

fn require_positive_u32(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CameraConfig::from_toml_str("").unwrap();
        assert_eq!(config, CameraConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = CameraConfig::from_toml_str("max_zoom = 3.0\nmin_display_width = 640\n").unwrap();
        assert_eq!(config.max_zoom, 3.0);
        assert_eq!(config.min_display_width, 640);
        assert_eq!(config.min_zoom, MIN_ZOOM);
        assert_eq!(config.min_display_height, MIN_DISPLAY_HEIGHT);
    }

    #[test]
    fn inverted_ranges_are_swapped() {
        let config = CameraConfig::from_toml_str("min_zoom = 2.0\nmax_zoom = 0.5\n").unwrap();
        assert_eq!(config.min_zoom, 0.5);
        assert_eq!(config.max_zoom, 2.0);
    }

    #[test]
    fn default_zoom_is_pulled_into_range() {
        let config = CameraConfig::from_toml_str("default_zoom = 9.0\n").unwrap();
        assert_eq!(config.default_zoom, MAX_ZOOM);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let err = CameraConfig::from_toml_str("zoom_step = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "zoom_step", .. }));

        let err = CameraConfig::from_toml_str("min_display_height = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "min_display_height",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = CameraConfig::from_toml_str("max_zoom = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_speed = 3.0").unwrap();
        let config = CameraConfig::load(file.path()).unwrap();
        assert_eq!(config.default_speed, 3.0);

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = CameraConfig::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn terminal_preset_is_valid() {
        let preset = CameraConfig::terminal();
        assert_eq!(preset.clone().validate().unwrap(), preset);
        assert_eq!(preset.min_display_size(), (80, 48));
    }
}
