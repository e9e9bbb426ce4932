//! Session middleware configuration.
//!
//! Sessions live in a bounded in-process `moka` cache. The portal keeps only
//! the signed-in user and a one-shot flash message there, and a restart
//! simply signs everyone out. Records are evicted when their expiry date
//! passes or when the cache is full.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::PortalConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "sankalp_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Most sessions held at once. The least recently used are evicted first.
pub const SESSION_CAPACITY: u64 = 50_000;

/// Bounded session store shared by every request.
#[must_use]
pub fn session_store() -> MokaStore {
    MokaStore::new(Some(SESSION_CAPACITY))
}

/// Create the session layer over the bounded store.
///
/// The cookie is marked `Secure` when the site is served over HTTPS.
#[must_use]
pub fn create_session_layer(config: &PortalConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(session_store())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_https())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
