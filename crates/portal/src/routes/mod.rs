//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /  (and the landing aliases)        - Marketing page
//! GET  /getstarted (and aliases)           - Login/register, student or admin dashboard
//! POST /getstarted/login                   - Login action
//! POST /getstarted/register                - Register action
//! POST /getstarted/logout                  - Logout action
//! GET  /getstarted/profile                 - Profile settings
//! POST /getstarted/profile                 - Update profile
//! GET  /getstarted/courses/{id}            - Course detail
//! POST /getstarted/courses/{id}/register   - Submit transaction id
//! POST /getstarted/modules/{id}/video      - Playback URL (JSON)
//! POST /getstarted/admin/approve           - Approve by email (admin)
//! GET  /getstarted/admin/courses/new       - Course upload form (admin)
//! POST /getstarted/admin/courses           - Create course (admin)
//! POST /contact                            - Contact enquiry
//! GET  /sitemap.xml, /robots.txt, /site.webmanifest
//! GET  /health, /health/ready
//! ```
//!
//! Public page paths are not registered one by one. The fallback dispatches
//! them through the route table so disabled landing paths and unknown paths
//! both render the not-found view.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod courses;
pub mod getstarted;
pub mod health;
pub mod home;
pub mod manifest;
pub mod page;
pub mod pages;
pub mod profile;
pub mod seo;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{api_rate_limiter, form_rate_limiter};
use crate::state::AppState;

/// Form posts that accept credentials or free text.
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/getstarted/login", post(auth::login))
        .route("/getstarted/register", post(auth::register))
        .route("/contact", post(contact::submit))
        .layer(form_rate_limiter())
}

/// Signed-in pages and actions under `/getstarted`.
pub fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/getstarted/logout", post(auth::logout))
        .route(
            "/getstarted/profile",
            get(profile::show).post(profile::update),
        )
        .route("/getstarted/courses/{id}", get(courses::show))
        .route("/getstarted/courses/{id}/register", post(courses::register))
        .route("/getstarted/admin/approve", post(admin::approve))
        .route("/getstarted/admin/courses/new", get(admin::new_course))
        .route("/getstarted/admin/courses", post(admin::create_course))
}

/// Script endpoints called from the student dashboard.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/getstarted/modules/{id}/video", post(courses::video))
        .layer(api_rate_limiter())
}

/// Create all routes for the portal.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/robots.txt", get(seo::robots_txt))
        .route("/site.webmanifest", get(manifest::webmanifest))
        .merge(portal_routes())
        .merge(form_routes())
        .merge(api_routes())
        .fallback(pages::dispatch)
}
