//! The `/getstarted` page and its landing aliases.
//!
//! Signed-out visitors get the login and registration forms. Students see the
//! course catalog; the admin sees the registration review board.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::approvals::{ALL_PROCESSED, ApprovalBoard, BoardStats};
use crate::backend::types::Course;
use crate::background::Section;
use crate::filters;
use crate::models::SessionUser;
use crate::seo::{HeadTags, RouteEntry};
use crate::state::AppState;

use super::page::{PageChrome, PageContext};

const COURSES_UNAVAILABLE: &str = "We couldn't load the course catalog. Please try again shortly.";
const REGISTRATIONS_UNAVAILABLE: &str = "Failed to load course registrations.";

/// Which form is shown to signed-out visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Query parameters accepted by the page. Unknown values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub mode: Option<String>,
}

impl PageQuery {
    #[must_use]
    pub fn auth_mode(&self) -> AuthMode {
        match self.mode.as_deref() {
            Some("register") => AuthMode::Register,
            _ => AuthMode::Login,
        }
    }
}

/// Login / registration template.
#[derive(Template, WebTemplate)]
#[template(path = "getstarted/auth.html")]
pub struct AuthTemplate {
    pub chrome: PageChrome,
    pub mode: AuthMode,
}

impl AuthTemplate {
    #[must_use]
    pub fn is_register(&self) -> bool {
        self.mode == AuthMode::Register
    }
}

/// Student dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "getstarted/student_dashboard.html")]
pub struct StudentDashboardTemplate {
    pub chrome: PageChrome,
    pub user: SessionUser,
    pub courses: Arc<Vec<Course>>,
    pub load_error: Option<&'static str>,
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "getstarted/admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub chrome: PageChrome,
    pub board: ApprovalBoard,
    pub stats: BoardStats,
    pub load_error: Option<&'static str>,
    pub all_processed: &'static str,
}

/// Render the page for `entry`, according to who is signed in.
#[instrument(skip(state, ctx, entry), fields(path = entry.path))]
pub async fn render(
    state: &AppState,
    ctx: PageContext,
    entry: &RouteEntry,
    query: PageQuery,
) -> Response {
    let config = state.config();
    let head = HeadTags::for_route(entry, &config.base_url, config.features.seo);

    match ctx.user.clone() {
        None => AuthTemplate {
            chrome: ctx.chrome(head),
            mode: query.auth_mode(),
        }
        .into_response(),
        Some(user) if user.is_admin() => admin_dashboard(state, ctx.chrome(head)).await,
        Some(user) => student_dashboard(state, ctx.chrome(head), user).await,
    }
}

async fn student_dashboard(state: &AppState, chrome: PageChrome, user: SessionUser) -> Response {
    let (courses, load_error) = match state.backend().courses().await {
        Ok(courses) => (courses, None),
        Err(e) => {
            warn!(error = %e, "Failed to load courses");
            (Arc::default(), Some(COURSES_UNAVAILABLE))
        }
    };

    StudentDashboardTemplate {
        chrome,
        user,
        courses,
        load_error,
    }
    .into_response()
}

async fn admin_dashboard(state: &AppState, chrome: PageChrome) -> Response {
    let (board, load_error) = match state.backend().pending_registrations().await {
        Ok(rows) => (ApprovalBoard::new(rows), None),
        Err(e) => {
            warn!(error = %e, "Failed to load registrations");
            (ApprovalBoard::default(), Some(REGISTRATIONS_UNAVAILABLE))
        }
    };

    AdminDashboardTemplate {
        chrome,
        stats: board.stats(),
        board,
        load_error,
        all_processed: ALL_PROCESSED,
    }
    .into_response()
}
