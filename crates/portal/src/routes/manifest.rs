//! Web app manifest route handler.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::seo::schema::SITE_NAME;

/// Serve the web app manifest.
pub async fn webmanifest() -> Response {
    let manifest = serde_json::json!({
        "name": SITE_NAME,
        "short_name": "Sankalp",
        "start_url": "/",
        "icons": [
            {
                "src": "/static/images/icon-192.png",
                "sizes": "192x192",
                "type": "image/png"
            },
            {
                "src": "/static/images/icon-512.png",
                "sizes": "512x512",
                "type": "image/png"
            }
        ],
        "theme_color": "#7c3aed",
        "background_color": "#0b0a1a",
        "display": "standalone"
    });

    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        manifest.to_string(),
    )
        .into_response()
}
