//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use sankalp_core::Role;

use crate::backend::BackendError;

/// Application-level error type for the portal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Course backend call failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl AppError {
    /// Status code sent to the client.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message sent to the client. Internal details are never exposed.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Session(_) => "Internal server error",
            Self::Backend(_) => "The course service is unavailable. Please try again.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every variant is a server-side failure
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        (self.status(), self.public_message()).into_response()
    }
}

/// Set the Sentry user context for the signed-in user.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(email: &str, role: Role) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_string()),
            ..Default::default()
        }));
        scope.set_tag("role", role);
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("registration", "Submitted transaction", Some(&[("course_id", "2")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_status_codes() {
        let backend = AppError::Backend(BackendError::MissingField("token"));
        assert_eq!(backend.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_backend_details_are_hidden() {
        let err = AppError::Backend(BackendError::Api {
            status: 500,
            message: Some("relation \"pending\" does not exist".to_string()),
        });
        assert!(err.to_string().contains("relation"));
        assert!(!err.public_message().contains("relation"));
    }
}
