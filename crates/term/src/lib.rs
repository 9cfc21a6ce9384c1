//! Terminal front-end for the camera.
//!
//! The terminal plays both external roles the camera core expects:
//!
//! - **Display surface**: [`TerminalDisplay`], measured in half-block pixels
//!   (one cell = 1x2 pixels)
//! - **Presentation layer**: [`FrameComposer`] upscales the offscreen
//!   [`PixelBuffer`] with a bilinear filter and packs it into cells;
//!   [`TerminalRenderer`] flushes the cells with diffing
//!
//! World drawing ([`WorldView`]) writes into the offscreen buffer with
//! nearest-neighbor pixels only.

pub mod display;
pub mod fb;
pub mod hud;
pub mod pixels;
pub mod render_throttle;
pub mod renderer;
pub mod scale;
pub mod world_view;

pub use pixel_camera_core as core;
pub use pixel_camera_types as types;

pub use display::{cells_to_pixels, pixels_to_cells, TerminalDisplay};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use hud::HudView;
pub use pixels::{PixelAllocError, PixelBuffer, PixelBufferFactory};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scale::{compose_half_blocks, upscale_into, Filter, FrameComposer};
pub use world_view::WorldView;
