//! # Core Error Types
//!
//! The field itself never fails. Errors only come from loading a tuning file.

use thiserror::Error;

/// Errors that can occur while building a field configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Tuning file could not be read.
    #[error("cannot read config {path}: {reason}")]
    ConfigRead {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// Tuning file is not valid TOML for `FieldConfig`.
    #[error("cannot parse config: {0}")]
    ConfigParse(String),

    /// A value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
