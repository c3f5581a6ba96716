//! # Site Error Types

use thiserror::Error;

/// Errors raised while loading content or touching preference storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// Content document is not valid TOML for the content schema.
    #[error("cannot parse content: {0}")]
    ContentParse(String),

    /// Content parsed but breaks a table rule.
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// Preference storage refused a read or write.
    #[error("storage error for key {key}: {reason}")]
    Storage {
        /// Preference key.
        key: String,
        /// What the backend reported.
        reason: String,
    },
}

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;
