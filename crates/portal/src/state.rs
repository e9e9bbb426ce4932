//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::{BackendClient, BackendError};
use crate::config::PortalConfig;
use crate::seo::RouteTable;
use crate::services::auth::AuthService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the backend client and the route table.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    backend: BackendClient,
    routes: RouteTable,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn new(config: PortalConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.backend)?;
        let routes = RouteTable::new(config.features.landing_pages);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                routes,
            }),
        })
    }

    /// Get a reference to the portal configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Get a reference to the course backend client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// The public routes served by this deployment.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }

    /// Login, registration and profile updates.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.backend(), &self.inner.config.admin)
    }
}
