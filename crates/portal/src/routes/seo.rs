//! `sitemap.xml` and `robots.txt`.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::seo::sitemap;
use crate::state::AppState;

/// Sitemap of the routes this deployment serves, stamped with today's date.
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let today = chrono::Utc::now().date_naive();
    let entries = sitemap::entries(state.routes(), &state.config().base_url, today);

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render(&entries),
    )
        .into_response()
}

pub async fn robots_txt(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(&state.config().base_url),
    )
        .into_response()
}
