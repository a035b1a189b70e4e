//! Error Types

use thiserror::Error;

use crate::kind::FormCopy;

/// Result type alias for form operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Form submission errors
#[derive(Error, Debug)]
pub enum FormError {
    /// A required field was empty
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// The target URL could not be normalized
    #[error("Invalid URL: {0:?}")]
    InvalidUrl(String),

    /// A submission is already in flight for this form
    #[error("Submission already in progress")]
    Busy,

    /// Network failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// The webhook answered with a non-2xx status
    #[error("Webhook returned status {0}")]
    Status(u16),

    /// Endpoint configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormError {
    /// Detected locally, before any network call
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidUrl(_))
    }

    /// Check if the user can simply resubmit
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_) | Self::Json(_))
    }

    /// Fixed user-facing message for this error on a given form.
    ///
    /// Remote failures are not distinguished: every transport or status error
    /// maps to the same message.
    pub const fn user_message(&self, copy: &FormCopy) -> &'static str {
        if self.is_validation() {
            copy.invalid_message
        } else {
            copy.failure_message
        }
    }
}
