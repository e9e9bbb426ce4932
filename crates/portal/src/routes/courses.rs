//! Course detail, transaction submission and video playback.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{debug, error, instrument, warn};

use sankalp_core::{CourseId, ModuleId, RegistrationStatus};

use crate::backend::types::Course;
use crate::background::Section;
use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::middleware::{RequireUser, set_flash};
use crate::models::{Flash, SessionUser};
use crate::registration::{self, ModuleOutline, NO_MATERIALS, SUBMISSION_FAILED, module_outline};
use crate::seo::HeadTags;
use crate::state::AppState;

use super::page::{PageChrome, PageContext};

const DASHBOARD: &str = "/getstarted";
const COURSE_NOT_FOUND: &str = "That course is no longer available.";
const VIDEO_UNAVAILABLE: &str = "Unable to start this video right now. Please try again.";
const MODULES_UNAVAILABLE: &str = "We couldn't load the course modules. Please refresh to try again.";
const MATERIALS_UNAVAILABLE: &str = "Course materials couldn't be loaded right now.";

/// Course detail template. Exactly one of the three views renders.
#[derive(Template, WebTemplate)]
#[template(path = "getstarted/course.html")]
pub struct CourseTemplate {
    pub chrome: PageChrome,
    pub course: Course,
    pub status: RegistrationStatus,
    pub outline: Vec<ModuleOutline>,
    pub outline_error: Option<&'static str>,
    pub materials_loaded: bool,
    pub payment_qr: Option<String>,
    pub transaction_id: String,
    pub form_error: Option<&'static str>,
    pub no_materials: &'static str,
}

impl CourseTemplate {
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == RegistrationStatus::Approved
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RegistrationStatus::Pending
    }
}

/// Transaction form data.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub transaction_id: String,
}

/// Answer to a playback request.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VideoResponse {
    Url { url: String },
    Error { error: &'static str },
}

/// Why a course could not be shown.
enum CourseLookup {
    Found(Course),
    Unknown,
    Unavailable,
}

async fn lookup_course(state: &AppState, id: CourseId) -> CourseLookup {
    match state.backend().course(id).await {
        Ok(Some(course)) => CourseLookup::Found(course),
        Ok(None) => CourseLookup::Unknown,
        Err(e) => {
            error!(error = %e, course_id = %id, "Failed to load course catalog");
            CourseLookup::Unavailable
        }
    }
}

/// Modules in day order with their materials.
///
/// A module failure leaves the outline empty. A materials failure keeps the
/// modules and marks the materials as not loaded. Both show an inline notice.
async fn load_outline(
    state: &AppState,
    course_id: CourseId,
) -> (Vec<ModuleOutline>, Option<&'static str>, bool) {
    let modules = match state.backend().course_modules(course_id).await {
        Ok(modules) => modules,
        Err(e) => {
            error!(error = %e, %course_id, "Failed to load course modules");
            return (Vec::new(), Some(MODULES_UNAVAILABLE), false);
        }
    };

    match state.backend().module_materials(course_id).await {
        Ok(materials) => (module_outline(&modules, &materials), None, true),
        Err(e) => {
            error!(error = %e, %course_id, "Failed to load module materials");
            (module_outline(&modules, &[]), Some(MATERIALS_UNAVAILABLE), false)
        }
    }
}

async fn course_page(
    state: &AppState,
    chrome: PageChrome,
    course: Course,
    status: RegistrationStatus,
) -> CourseTemplate {
    let (outline, outline_error, materials_loaded) = if status == RegistrationStatus::Approved {
        load_outline(state, course.id).await
    } else {
        (Vec::new(), None, true)
    };

    CourseTemplate {
        chrome,
        course,
        status,
        outline,
        outline_error,
        materials_loaded,
        payment_qr: state.config().payment_qr_url.clone(),
        transaction_id: String::new(),
        form_error: None,
        no_materials: NO_MATERIALS,
    }
}

/// Display a course with the view matching the student's registration status.
///
/// An unknown course goes back to the dashboard with a flash message. An
/// unreachable catalog goes back to the dashboard, which reports it inline.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(state, user, session, ctx), fields(email = %user.email))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    RequireUser(user): RequireUser,
    session: Session,
    ctx: PageContext,
) -> Result<Response, AppError> {
    let course = match lookup_course(&state, CourseId::new(id)).await {
        CourseLookup::Found(course) => course,
        CourseLookup::Unknown => {
            set_flash(&session, &Flash::error(COURSE_NOT_FOUND)).await?;
            return Ok(Redirect::to(DASHBOARD).into_response());
        }
        CourseLookup::Unavailable => return Ok(Redirect::to(DASHBOARD).into_response()),
    };

    let status = registration::resolve_status(state.backend(), &user.email, course.id).await;
    debug!(%status, course_id = %course.id, "Resolved registration status");
    let chrome = ctx.chrome(HeadTags::private(&course.title));
    Ok(course_page(&state, chrome, course, status).await.into_response())
}

/// Submit a payment transaction ID for review.
///
/// Success renders the "under review" view. Failure keeps the form with the
/// entered value and a fixed message. If the catalog cannot be read, nothing
/// is submitted and the student is sent back to the course with the same
/// message as a flash.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip(state, user, session, ctx, form), fields(email = %user.email))]
pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    RequireUser(user): RequireUser,
    session: Session,
    ctx: PageContext,
    Form(form): Form<TransactionForm>,
) -> Result<Response, AppError> {
    let course = match lookup_course(&state, CourseId::new(id)).await {
        CourseLookup::Found(course) => course,
        CourseLookup::Unknown => {
            set_flash(&session, &Flash::error(COURSE_NOT_FOUND)).await?;
            return Ok(Redirect::to(DASHBOARD).into_response());
        }
        CourseLookup::Unavailable => {
            set_flash(&session, &Flash::error(SUBMISSION_FAILED)).await?;
            return Ok(Redirect::to(&format!("/getstarted/courses/{id}")).into_response());
        }
    };
    let chrome = ctx.chrome(HeadTags::private(&course.title));

    match submit(&state, &user, &course, &form.transaction_id).await {
        Ok(status) => Ok(course_page(&state, chrome, course, status).await.into_response()),
        Err(message) => {
            let mut page = course_page(&state, chrome, course, RegistrationStatus::NotRegistered).await;
            page.transaction_id = form.transaction_id.trim().to_string();
            page.form_error = Some(message);
            Ok(page.into_response())
        }
    }
}

async fn submit(
    state: &AppState,
    user: &SessionUser,
    course: &Course,
    transaction_id: &str,
) -> Result<RegistrationStatus, &'static str> {
    match registration::submit_transaction(state.backend(), user, course, transaction_id).await {
        Ok(status) => {
            let course_id = course.id.to_string();
            add_breadcrumb(
                "registration",
                "Submitted transaction",
                Some(&[("course_id", course_id.as_str())]),
            );
            Ok(status)
        }
        Err(e) => {
            warn!(error = %e, "Transaction submission failed");
            Err(e.user_message())
        }
    }
}

/// Issue a playback URL for a module.
///
/// Answers `{ "url": ... }` on success. On failure the error is logged and
/// `{ "error": ... }` is returned without a URL, so nothing is opened.
#[instrument(skip(state, user), fields(email = %user.email))]
pub async fn video(
    State(state): State<AppState>,
    Path(module_id): Path<i32>,
    RequireUser(user): RequireUser,
) -> Response {
    let module_id = ModuleId::new(module_id);
    match state.backend().video_token(&user.email, module_id).await {
        Ok(token) => Json(VideoResponse::Url {
            url: state.backend().playback_url(module_id, &token),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, %module_id, "Failed to issue video token");
            (
                StatusCode::BAD_GATEWAY,
                Json(VideoResponse::Error {
                    error: VIDEO_UNAVAILABLE,
                }),
            )
                .into_response()
        }
    }
}
