//! Admin actions: approving registrations and uploading courses.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{info, instrument, warn};

use crate::approvals::{self, ApprovalBoard, ApprovalError};
use crate::background::Section;
use crate::courses::{CREATE_FAILED, CourseDraft, created_message};
use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::middleware::{RequireAdmin, accepts_json, set_flash};
use crate::models::Flash;
use crate::seo::HeadTags;
use crate::state::AppState;

use super::page::{PageChrome, PageContext};

const DASHBOARD: &str = "/getstarted";

/// Approval form data.
#[derive(Debug, Default, Deserialize)]
pub struct ApproveForm {
    #[serde(default)]
    pub email: String,
}

/// JSON answer to an approval request from the dashboard script.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApproveResponse {
    Approved { email: String, status: &'static str },
    Failed { error: String },
}

const fn failure_status(err: &ApprovalError) -> StatusCode {
    match err {
        ApprovalError::UnknownEmail(_) => StatusCode::NOT_FOUND,
        ApprovalError::AlreadyApproved(_) | ApprovalError::InProgress(_) => StatusCode::CONFLICT,
        ApprovalError::Backend(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Approve every awaiting registration for an email.
///
/// The board is loaded fresh, the rows are marked as approving, and the
/// outcome is committed or rolled back. Script callers get JSON; form posts
/// get a flash message and a redirect to the dashboard.
///
/// # Errors
///
/// Returns `AppError::Backend` if the registration list cannot be loaded.
#[instrument(skip(state, headers, session, form), fields(email = %form.email))]
pub async fn approve(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    headers: HeaderMap,
    session: Session,
    Form(form): Form<ApproveForm>,
) -> Result<Response, AppError> {
    let json = accepts_json(&headers);
    let email = form.email.trim();

    let mut board = ApprovalBoard::new(state.backend().pending_registrations().await?);
    let outcome = approvals::approve(state.backend(), &mut board, email).await;

    match (outcome, json) {
        (Ok(()), true) => Ok(Json(ApproveResponse::Approved {
            email: email.to_string(),
            status: "approved",
        })
        .into_response()),
        (Ok(()), false) => {
            add_breadcrumb("approvals", "Approved registration", None);
            set_flash(&session, &Flash::success(format!("Approved {email}"))).await?;
            Ok(Redirect::to(DASHBOARD).into_response())
        }
        (Err(e), true) => {
            warn!(error = %e, "Approval refused");
            Ok((
                failure_status(&e),
                Json(ApproveResponse::Failed {
                    error: e.user_message(),
                }),
            )
                .into_response())
        }
        (Err(e), false) => {
            warn!(error = %e, "Approval refused");
            set_flash(&session, &Flash::error(e.user_message())).await?;
            Ok(Redirect::to(DASHBOARD).into_response())
        }
    }
}

/// Course upload template.
#[derive(Template, WebTemplate)]
#[template(path = "getstarted/course_upload.html")]
pub struct CourseUploadTemplate {
    pub chrome: PageChrome,
    pub draft: CourseDraft,
    pub error: Option<String>,
}

/// Display the empty course upload form.
#[instrument(skip_all)]
pub async fn new_course(RequireAdmin(_admin): RequireAdmin, ctx: PageContext) -> impl IntoResponse {
    CourseUploadTemplate {
        chrome: ctx.chrome(HeadTags::private("Upload Course")),
        draft: CourseDraft::default(),
        error: None,
    }
}

/// Create a course from the upload form.
///
/// Invalid input or a backend refusal re-renders the form with the entered
/// values. Success returns to the dashboard with the new course id.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip_all, fields(title = %draft.title))]
pub async fn create_course(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    session: Session,
    ctx: PageContext,
    Form(draft): Form<CourseDraft>,
) -> Result<Response, AppError> {
    let rerender = |ctx: PageContext, draft: CourseDraft, error: String| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            CourseUploadTemplate {
                chrome: ctx.chrome(HeadTags::private("Upload Course")),
                draft,
                error: Some(error),
            },
        )
            .into_response()
    };

    let course = match draft.parse() {
        Ok(course) => course,
        Err(e) => return Ok(rerender(ctx, draft, e.to_string())),
    };

    match state.backend().create_course(&course).await {
        Ok(id) => {
            info!(course_id = %id, "Course created");
            set_flash(&session, &Flash::success(created_message(id))).await?;
            Ok(Redirect::to(DASHBOARD).into_response())
        }
        Err(e) => {
            warn!(error = %e, "Course creation failed");
            Ok(rerender(ctx, draft, e.user_message(CREATE_FAILED)))
        }
    }
}
