//! Crate-level error types.

use thiserror::Error;

/// Errors produced by the datasphere crate.
///
/// Per-frame numeric edge cases (degenerate rotations, inverted zoom,
/// out-of-range distances) never surface here; they are absorbed by the
/// camera controls. Only setup-time problems are reported.
#[derive(Debug, Error)]
pub enum SphereError {
    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// TOML options parsing/serialization failure.
    #[error("options parse error: {0}")]
    OptionsParse(String),
    /// Card dataset could not be decoded.
    #[error("dataset error: {0}")]
    Dataset(String),
    /// A layout name did not match any known arrangement.
    #[error("unknown layout: {0}")]
    UnknownLayout(String),
    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SphereError {
    /// Shorthand for [`SphereError::InvalidConfiguration`].
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
