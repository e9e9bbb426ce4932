//! Profile settings for signed-in users.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::{instrument, warn};

use crate::background::Section;
use crate::error::{AppError, set_sentry_user};
use crate::filters;
use crate::middleware::{RequireUser, set_flash, update_current_user};
use crate::models::{Flash, SessionUser};
use crate::seo::HeadTags;
use crate::services::auth::{PROFILE_UPDATE_FAILED, PROFILE_UPDATED, ProfileUpdate};
use crate::state::AppState;

use super::page::{PageChrome, PageContext};

const PROFILE_PATH: &str = "/getstarted/profile";

/// Profile settings template.
#[derive(Template, WebTemplate)]
#[template(path = "getstarted/profile.html")]
pub struct ProfileTemplate {
    pub chrome: PageChrome,
    pub user: SessionUser,
}

/// Display the profile form, prefilled from the session.
#[instrument(skip_all)]
pub async fn show(RequireUser(user): RequireUser, ctx: PageContext) -> impl IntoResponse {
    ProfileTemplate {
        chrome: ctx.chrome(HeadTags::private("Profile Settings")),
        user,
    }
}

/// Save profile changes and refresh the session user.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(state, session, user, form), fields(email = %user.email))]
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    session: Session,
    Form(form): Form<ProfileUpdate>,
) -> Result<Response, AppError> {
    match state.auth().update_profile(&user, &form).await {
        Ok(updated) => {
            update_current_user(&session, &updated).await?;
            set_sentry_user(&updated.email, updated.role);
            set_flash(&session, &Flash::success(PROFILE_UPDATED)).await?;
        }
        Err(e) => {
            warn!(error = %e, "Profile update failed");
            set_flash(&session, &Flash::error(e.user_message(PROFILE_UPDATE_FAILED))).await?;
        }
    }
    Ok(Redirect::to(PROFILE_PATH).into_response())
}
