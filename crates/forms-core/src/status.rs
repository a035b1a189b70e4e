//! Submission Status

/// Where a form is in its submit cycle.
///
/// `Success` carries the form's reply so the presenter can act on it
/// (e.g. a `joinUrl` to navigate to).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus<R> {
    Idle,
    Submitting,
    Success(R),
    Error(String),
}

impl<R> Default for SubmissionStatus<R> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<R> SubmissionStatus<R> {
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Status label for logs
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}
