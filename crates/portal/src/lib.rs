//! Sankalp 2.0 portal library.
//!
//! The marketing site, the `/getstarted` login and dashboards, and the course
//! registration flow, served as one axum application. Exposed as a library so
//! the router can be exercised end to end in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod approvals;
pub mod backend;
pub mod background;
pub mod config;
pub mod content;
pub mod courses;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod registration;
pub mod routes;
pub mod seo;
pub mod services;
pub mod state;

use axum::{
    Router,
    http::{HeaderValue, header::CACHE_CONTROL},
    middleware::from_fn,
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use state::AppState;

/// Directory holding `css/`, `js/` and `images/`.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the application router with every middleware layer applied.
///
/// Sentry layers are left to the binary so tests do not need a client.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=604800"),
        ))
        .service(ServeDir::new(STATIC_DIR));

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_files)
        .layer(session_layer)
        .layer(from_fn(middleware::csp_nonce_middleware))
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
