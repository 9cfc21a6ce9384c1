//! Core types module - shared constants and actions
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the camera core, the terminal front-end and the input layer alike.
//!
//! # Display and Zoom Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DISPLAY_WIDTH` | 1280 | Smallest display width the scaler accepts |
//! | `MIN_DISPLAY_HEIGHT` | 720 | Smallest display height the scaler accepts |
//! | `MIN_ZOOM` | 0.75 | Lower zoom clamp |
//! | `MAX_ZOOM` | 2.0 | Upper zoom clamp |
//! | `DEFAULT_ZOOM` | 1.0 | Zoom at startup |
//! | `ZOOM_STEP` | 0.1 | Zoom change per key press |
//!
//! # Camera Speed
//!
//! Speed is expressed in world units per simulation step:
//!
//! - `MIN_SPEED`: 1.0
//! - `MAX_SPEED`: 20.0
//! - `DEFAULT_SPEED`: 7.5
//! - `SPEED_STEP`: 1.0
//!
//! # Timing
//!
//! - `TICK_MS`: 16ms fixed timestep (~60 updates per second)
//!
//! # Examples
//!
//! ```
//! use pixel_camera_types::{CameraAction, MAX_ZOOM, MIN_ZOOM};
//!
//! let action = CameraAction::from_str("zoomIn").unwrap();
//! assert_eq!(action, CameraAction::ZoomIn);
//! assert_eq!(action.as_str(), "zoomIn");
//!
//! assert!(MIN_ZOOM < MAX_ZOOM);
//! ```

/// Minimum display width in pixels.
pub const MIN_DISPLAY_WIDTH: u32 = 1280;

/// Minimum display height in pixels.
pub const MIN_DISPLAY_HEIGHT: u32 = 720;

/// Lower bound for the zoom level.
pub const MIN_ZOOM: f32 = 0.75;

/// Upper bound for the zoom level.
pub const MAX_ZOOM: f32 = 2.0;

/// Zoom level at startup.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom change applied by a single zoom action.
pub const ZOOM_STEP: f32 = 0.1;

/// Lower bound for the camera speed (world units per step).
pub const MIN_SPEED: f32 = 1.0;

/// Upper bound for the camera speed (world units per step).
pub const MAX_SPEED: f32 = 20.0;

/// Camera speed at startup.
pub const DEFAULT_SPEED: f32 = 7.5;

/// Speed change applied by a single speed action.
pub const SPEED_STEP: f32 = 1.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_inside_their_ranges() {
        assert_eq!(MIN_DISPLAY_WIDTH, 1280);
        assert_eq!(MIN_DISPLAY_HEIGHT, 720);
        assert_eq!(MIN_ZOOM, 0.75);
        assert_eq!(MAX_ZOOM, 2.0);
        assert_eq!(MIN_SPEED, 1.0);
        assert_eq!(MAX_SPEED, 20.0);

        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&DEFAULT_ZOOM));
        assert!((MIN_SPEED..=MAX_SPEED).contains(&DEFAULT_SPEED));
    }
}

/// Discrete camera actions
///
/// These are edge-triggered: one key press produces one action. Continuous
/// movement is carried separately as a [`MoveInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    /// Increase zoom by one step
    ZoomIn,
    /// Decrease zoom by one step
    ZoomOut,
    /// Increase camera speed by one step
    SpeedUp,
    /// Decrease camera speed by one step
    SpeedDown,
    /// Flip between windowed and fullscreen display
    ToggleFullscreen,
}

impl CameraAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_camera_types::CameraAction;
    ///
    /// assert_eq!(CameraAction::from_str("ZOOMOUT"), Some(CameraAction::ZoomOut));
    /// assert_eq!(CameraAction::from_str("speedUp"), Some(CameraAction::SpeedUp));
    /// assert_eq!(CameraAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zoomin" => Some(CameraAction::ZoomIn),
            "zoomout" => Some(CameraAction::ZoomOut),
            "speedup" => Some(CameraAction::SpeedUp),
            "speeddown" => Some(CameraAction::SpeedDown),
            "togglefullscreen" => Some(CameraAction::ToggleFullscreen),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraAction::ZoomIn => "zoomIn",
            CameraAction::ZoomOut => "zoomOut",
            CameraAction::SpeedUp => "speedUp",
            CameraAction::SpeedDown => "speedDown",
            CameraAction::ToggleFullscreen => "toggleFullscreen",
        }
    }
}

/// Directional movement input for one simulation step.
///
/// Each axis is one of -1, 0 or 1. `x` grows to the right and `y` grows
/// downwards, matching world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MoveInput {
    pub x: i8,
    pub y: i8,
}

impl MoveInput {
    pub const NONE: MoveInput = MoveInput { x: 0, y: 0 };

    /// Build an input, clamping each axis into `-1..=1`.
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.signum(),
            y: y.signum(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}
