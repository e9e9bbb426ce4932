//! Path-table dispatch for the public pages.
//!
//! Every GET that no other route claims ends up here. The path is looked up
//! in the deployment's [`RouteTable`](crate::seo::RouteTable): marketing
//! paths render the home page, get-started paths render the portal, and
//! anything else renders the home page as a 404.

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::seo::Page;
use crate::state::AppState;

use super::getstarted::{self, PageQuery};
use super::home;
use super::page::PageContext;

/// Fallback handler rendering the page mapped to the request path.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    ctx: PageContext,
    Query(query): Query<PageQuery>,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }

    match state.routes().lookup(uri.path()) {
        Some(entry) if entry.page == Page::GetStarted => {
            getstarted::render(&state, ctx, entry, query).await
        }
        Some(entry) => home::render(&state, ctx, Some(entry)),
        None => {
            tracing::debug!(path = uri.path(), "Unmapped path");
            home::render(&state, ctx, None)
        }
    }
}
