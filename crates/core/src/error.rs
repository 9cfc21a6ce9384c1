//! Error types for the camera core.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal scaler failures.
///
/// Out-of-range zoom/speed values are clamped and re-entrant resizes are
/// suppressed, so neither shows up here.
#[derive(Error, Debug)]
pub enum ScalerError {
    #[error("failed to allocate {width}x{height} offscreen buffer")]
    BufferAllocation {
        width: u32,
        height: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Configuration loading/validation failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {value}")]
    Invalid { field: &'static str, value: String },
}
