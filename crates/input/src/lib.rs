//! Terminal input for the camera.
//!
//! This crate is independent of any renderer. It maps `crossterm` key codes
//! into movement directions and [`crate::types::CameraAction`]s, and tracks
//! held keys for terminals with and without key-release events.

pub mod handler;
pub mod map;

pub use pixel_camera_types as types;

pub use handler::{InputHandler, MAX_PENDING_ACTIONS};
pub use map::{action_for_key, direction_for_key, should_quit, Direction};
