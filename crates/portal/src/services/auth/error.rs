//! Authentication error types.

use thiserror::Error;

use crate::backend::BackendError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Input failed a required-field or format check. No call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backend refused the request. Carries the text to show the user.
    #[error("rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached or answered garbage.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

impl AuthError {
    /// Text to show inline on the form.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) | Self::Rejected(message) => message.clone(),
            Self::Backend(_) => fallback.to_string(),
        }
    }

    /// Turn a backend failure into `Rejected` when the backend answered with
    /// an error status, keeping transport failures as `Backend`.
    pub(super) fn from_backend(err: BackendError, fallback: &str) -> Self {
        match err {
            BackendError::Api { .. } => Self::Rejected(err.user_message(fallback)),
            other => Self::Backend(other),
        }
    }
}
