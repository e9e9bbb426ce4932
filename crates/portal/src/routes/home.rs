//! Marketing page route handler.
//!
//! One page carries every section: hero, programs, about, services,
//! testimonials, FAQ, contact and the founder's message. Features and Why
//! Choose are rendered only when switched on.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::background::Section;
use crate::config::FeatureFlags;
use crate::content::{SITE, SiteContent};
use crate::filters;
use crate::seo::{HeadTags, RouteEntry};
use crate::state::AppState;

use super::page::{PageChrome, PageContext};

/// Marketing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub site: &'static SiteContent,
    pub features: FeatureFlags,
    /// Phrases for the hero typing effect, as a JSON array.
    pub typed_json: String,
}

impl HomeTemplate {
    /// First phrase, shown before the script takes over.
    #[must_use]
    pub fn typed_first(&self) -> &'static str {
        self.site.hero.typed.first().copied().unwrap_or_default()
    }
}

/// Render the marketing page for a mapped route, or as the not-found view.
///
/// Unmapped paths get the same page with a 404 status and `noindex`.
#[instrument(skip(state, ctx, entry), fields(path = entry.map(|e| e.path)))]
pub fn render(state: &AppState, ctx: PageContext, entry: Option<&RouteEntry>) -> Response {
    let config = state.config();
    let head = entry.map_or_else(HeadTags::not_found, |entry| {
        let head = HeadTags::for_route(entry, &config.base_url, config.features.seo);
        if entry.path == "/" {
            head.with_site_schemas(&config.base_url, SITE.faqs)
        } else {
            head
        }
    });

    let template = HomeTemplate {
        chrome: ctx.chrome(head),
        site: &SITE,
        features: config.features,
        typed_json: serde_json::to_string(SITE.hero.typed).unwrap_or_default(),
    };

    if entry.is_some() {
        template.into_response()
    } else {
        (StatusCode::NOT_FOUND, template).into_response()
    }
}
