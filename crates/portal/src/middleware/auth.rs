//! Authentication extractors and session helpers.
//!
//! The signed-in user is stored server-side under
//! [`session_keys::CURRENT_USER`]. Handlers ask for it through
//! [`RequireUser`], [`RequireAdmin`] or [`OptionalUser`].

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header::ACCEPT, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{Flash, SessionUser, session_keys};

/// Where signed-out visitors are sent.
pub const LOGIN_PATH: &str = "/getstarted";

/// Extractor that requires a signed-in user of any role.
///
/// # Example
///
/// ```rust,ignore
/// async fn profile(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.first_name())
/// }
/// ```
pub struct RequireUser(pub SessionUser);

/// Extractor that requires the admin session.
pub struct RequireAdmin(pub SessionUser);

/// Error returned when a handler's identity requirement is not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// Redirect to the login page (for page requests).
    RedirectToLogin,
    /// 401 for script requests without a session.
    Unauthorized,
    /// 403 for a student calling an admin endpoint from script.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => StatusCode::FORBIDDEN.into_response(),
        }
    }
}

/// Whether the caller wants JSON back (the dashboard script sets `Accept`).
#[must_use]
pub fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

async fn session_user(parts: &Parts) -> Option<SessionUser> {
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<SessionUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match session_user(parts).await {
            Some(user) => Ok(Self(user)),
            None if accepts_json(&parts.headers) => Err(AuthRejection::Unauthorized),
            None => Err(AuthRejection::RedirectToLogin),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let json = accepts_json(&parts.headers);
        match session_user(parts).await {
            Some(user) if user.is_admin() => Ok(Self(user)),
            Some(_) if json => Err(AuthRejection::Forbidden),
            None if json => Err(AuthRejection::Unauthorized),
            _ => Err(AuthRejection::RedirectToLogin),
        }
    }
}

/// Extractor that optionally gets the current user.
pub struct OptionalUser(pub Option<SessionUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_user(parts).await))
    }
}

/// Store the signed-in user, issuing a fresh session id.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &SessionUser,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Replace the stored user after a profile update, keeping the session id.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn update_current_user(
    session: &Session,
    user: &SessionUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Sign out: drop the user and destroy the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be updated.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

/// Queue a message for the next page render.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_flash(
    session: &Session,
    flash: &Flash,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::FLASH, flash).await
}

/// Take the queued message, if any. Read errors are treated as no message.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    session
        .remove::<Flash>(session_keys::FLASH)
        .await
        .ok()
        .flatten()
}
