//! Camera core - pure, deterministic, and testable
//!
//! This crate holds the camera's coordinate transform and the logic that
//! keeps the offscreen render resolution in sync with zoom and display size.
//! It has **no dependencies** on a window, terminal or GPU; those are reached
//! through the traits in [`surface`], which makes the core:
//!
//! - **Deterministic**: the same inputs always produce the same viewport
//! - **Testable**: fake surfaces and buffer factories stand in for a window
//! - **Portable**: the terminal front-end is just one possible host
//!
//! # Module Structure
//!
//! - [`viewport`]: world-space rectangle and world-to-local transform
//! - [`scaler`]: zoom clamping, resize handling and buffer recomputation
//! - [`movement`]: per-step camera motion and speed clamping
//! - [`context`]: explicit state object handed to update/render
//! - [`config`]: runtime limits loaded from TOML
//! - [`surface`]: display/buffer/presenter seams
//!
//! # Pixel Crispness
//!
//! Sprites are drawn into the offscreen buffer with nearest-neighbor writes
//! at *floored world positions*, while the buffer itself is composited onto
//! the display with a smooth filter at the (possibly fractional) zoom. The
//! buffer is always `ceil(display / zoom)` rounded up to even, so the
//! upscale covers the display without sampling outside the buffer.
//!
//! # Example
//!
//! ```
//! use pixel_camera_core::CameraContext;
//! use pixel_camera_core::surface::{BufferFactory, DisplayResized, DisplaySurface, OffscreenBuffer};
//! use pixel_camera_core::types::MoveInput;
//!
//! struct Window { size: (u32, u32) }
//!
//! impl DisplaySurface for Window {
//!     fn display_size(&self) -> (u32, u32) { self.size }
//!     fn request_display_size(&mut self, w: u32, h: u32, _fullscreen: bool) -> Option<DisplayResized> {
//!         self.size = (w, h);
//!         None
//!     }
//!     fn is_fullscreen(&self) -> bool { false }
//! }
//!
//! struct Target(u32, u32);
//! impl OffscreenBuffer for Target {
//!     fn width(&self) -> u32 { self.0 }
//!     fn height(&self) -> u32 { self.1 }
//! }
//!
//! struct Factory;
//! impl BufferFactory for Factory {
//!     type Buffer = Target;
//!     type Error = std::convert::Infallible;
//!     fn allocate(&mut self, w: u32, h: u32) -> Result<Target, Self::Error> { Ok(Target(w, h)) }
//! }
//!
//! let mut window = Window { size: (0, 0) };
//! let mut camera = CameraContext::new(Default::default(), Factory, &mut window).unwrap();
//! assert_eq!(camera.buffer_size(), (1280, 720));
//!
//! camera.set_zoom(1.5, &window).unwrap();
//! assert_eq!(camera.buffer_size(), (854, 480));
//!
//! camera.update(MoveInput::new(1, 0));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod movement;
pub mod scaler;
pub mod snapshot;
pub mod surface;
pub mod viewport;

pub use pixel_camera_types as types;

// Re-export commonly used types for convenience
pub use config::CameraConfig;
pub use context::CameraContext;
pub use error::{ConfigError, ScalerError};
pub use movement::{movement_step, CameraSpeed};
pub use scaler::{buffer_size_for, ResizeOutcome, ResizeState, ScreenScaler};
pub use snapshot::CameraSnapshot;
pub use surface::{BufferFactory, DisplayResized, DisplaySurface, OffscreenBuffer, Presenter};
pub use viewport::Viewport;
