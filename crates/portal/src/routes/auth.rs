//! Authentication route handlers.
//!
//! Login, registration and logout for the `/getstarted` page. Every handler
//! redirects back to `/getstarted`; outcomes travel as a flash message.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{instrument, warn};

use crate::error::{AppError, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::{clear_current_user, set_current_user, set_flash};
use crate::models::Flash;
use crate::services::auth::{LOGIN_FAILED, REGISTRATION_FAILED, REGISTRATION_SUCCEEDED, Registration};
use crate::state::AppState;

const GET_STARTED: &str = "/getstarted";
const REGISTER_FORM: &str = "/getstarted?mode=register";

/// Login form data.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Handle login form submission.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state.auth().login(&form.email, &form.password).await {
        Ok(user) => {
            set_current_user(&session, &user).await?;
            set_sentry_user(&user.email, user.role);
            let role = user.role.to_string();
            add_breadcrumb("auth", "Signed in", Some(&[("role", role.as_str())]));
        }
        Err(e) => {
            warn!(error = %e, "Login failed");
            set_flash(&session, &Flash::error(e.user_message(LOGIN_FAILED))).await?;
        }
    }
    Ok(Redirect::to(GET_STARTED).into_response())
}

/// Handle registration form submission. The new student is not signed in.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<Registration>,
) -> Result<Response, AppError> {
    match state.auth().register(&form).await {
        Ok(()) => {
            add_breadcrumb("auth", "Registered", None);
            set_flash(&session, &Flash::success(REGISTRATION_SUCCEEDED)).await?;
            Ok(Redirect::to(GET_STARTED).into_response())
        }
        Err(e) => {
            warn!(error = %e, "Registration failed");
            set_flash(&session, &Flash::error(e.user_message(REGISTRATION_FAILED))).await?;
            Ok(Redirect::to(REGISTER_FORM).into_response())
        }
    }
}

/// Sign out. Always succeeds from the visitor's point of view.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        warn!(error = %e, "Failed to destroy session on logout");
    }
    clear_sentry_user();
    Redirect::to(GET_STARTED).into_response()
}
