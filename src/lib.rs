//! Pixel camera (workspace facade crate).
//!
//! This package exposes `pixel_camera::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use pixel_camera_core as core;
pub use pixel_camera_input as input;
pub use pixel_camera_term as term;
pub use pixel_camera_types as types;
