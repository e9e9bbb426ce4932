//! Per-request page chrome shared by every rendered template.
//!
//! [`PageContext`] is extracted once per handler and turned into a
//! [`PageChrome`] with the page's head tags. `base.html` reads only the
//! chrome, so a template cannot forget the nonce, the flash message or the
//! signed-in user.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::background::{Background, Section};
use crate::content::{NavLink, SITE};
use crate::middleware::{CspNonce, take_flash};
use crate::models::{Flash, SessionUser, session_keys};
use crate::seo::HeadTags;
use crate::state::AppState;

/// Everything the base template needs besides the page body.
#[derive(Debug, Clone)]
pub struct PageChrome {
    pub head: HeadTags,
    pub nonce: String,
    pub user: Option<SessionUser>,
    pub flash: Option<Flash>,
    pub particles: bool,
    pub nav: &'static [NavLink],
    pub footer_quick_links: &'static [NavLink],
    pub footer_programs: &'static [NavLink],
}

impl PageChrome {
    /// Background for a section, honoring the particle switch.
    #[must_use]
    pub const fn background(&self, section: Section) -> Background {
        Background::new(section, self.particles)
    }

    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Request-scoped inputs to [`PageChrome`].
///
/// Extracting this consumes the pending flash message.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub nonce: CspNonce,
    pub user: Option<SessionUser>,
    pub flash: Option<Flash>,
    pub particles: bool,
}

impl PageContext {
    #[must_use]
    pub fn chrome(self, head: HeadTags) -> PageChrome {
        PageChrome {
            head,
            nonce: self.nonce.0,
            user: self.user,
            flash: self.flash,
            particles: self.particles,
            nav: SITE.nav,
            footer_quick_links: SITE.footer_quick_links,
            footer_programs: SITE.footer_programs,
        }
    }

    /// Replace the flash with one produced by this request.
    #[must_use]
    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let nonce = CspNonce::from_request_parts(parts, state).await?;

        let (user, flash) = match parts.extensions.get::<Session>() {
            Some(session) => (
                session
                    .get::<SessionUser>(session_keys::CURRENT_USER)
                    .await
                    .ok()
                    .flatten(),
                take_flash(session).await,
            ),
            None => (None, None),
        };

        Ok(Self {
            nonce,
            user,
            flash,
            particles: state.config().features.particles,
        })
    }
}
