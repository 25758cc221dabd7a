//! Error types for configuration and I/O.
//!
//! Per-frame geometry never fails: a missing intersection or a centerline
//! without segments is an ordinary empty result. Errors are reserved for
//! rejecting parameters that would silently produce nonsense and for the
//! file handling used by the demo tooling.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid image-to-world transform: {0}")]
    InvalidTransform(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Rejects NaN, infinities and negative values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(Error::invalid(name, value, "must not be negative"));
    }
    Ok(())
}
