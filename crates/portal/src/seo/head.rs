//! Head tags for one rendered page.

use serde_json::Value;

use super::schema::{self, SITE_NAME};
use super::{RouteEntry, RouteMeta, ROUTES};
use crate::content::Faq;

/// A `<meta>` tag keyed by `property` (Open Graph) or `name` (Twitter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: &'static str,
    pub content: String,
}

/// Everything the base template puts in `<head>` besides assets.
#[derive(Debug, Clone, Default)]
pub struct HeadTags {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub canonical: Option<String>,
    pub robots: Option<&'static str>,
    pub open_graph: Vec<MetaTag>,
    pub twitter: Vec<MetaTag>,
    /// Serialized JSON-LD blocks, already escaped for a script element.
    pub json_ld: Vec<String>,
}

impl HeadTags {
    /// Tags for a mapped route. With `seo` off only title and description are set.
    #[must_use]
    pub fn for_route(entry: &RouteEntry, base_url: &str, seo: bool) -> Self {
        let meta = &entry.meta;
        let mut head = Self::basic(meta);
        if !seo {
            return head;
        }

        let url = format!("{base_url}{}", entry.canonical());
        head.keywords = Some(meta.keywords.to_string());
        head.canonical = Some(url.clone());
        head.open_graph = vec![
            tag("og:title", meta.title),
            tag("og:description", meta.description),
            tag("og:url", &url),
            tag("og:type", "website"),
            tag("og:locale", "en_IN"),
            tag("og:site_name", SITE_NAME),
        ];
        head.twitter = vec![
            tag("twitter:title", meta.title),
            tag("twitter:description", meta.description),
            tag("twitter:card", "summary_large_image"),
            tag("twitter:site", "@spectov"),
        ];
        head.push_json_ld(&schema::route_schema(entry, base_url));
        head.push_json_ld(&schema::breadcrumbs(entry.path, base_url));
        head
    }

    /// Tags for an unmapped path: the home page's copy, kept out of the index.
    #[must_use]
    pub fn not_found() -> Self {
        let mut head = ROUTES.first().map(|home| Self::basic(&home.meta)).unwrap_or_default();
        head.title = format!("Page not found | {SITE_NAME}");
        head.robots = Some("noindex, follow");
        head
    }

    /// Tags for signed-in pages, which are never indexed.
    #[must_use]
    pub fn private(title: &str) -> Self {
        Self {
            title: format!("{title} | Sankalp Training Portal"),
            robots: Some("noindex, nofollow"),
            ..Self::default()
        }
    }

    /// Add the site-wide schemas shown on the home page.
    #[must_use]
    pub fn with_site_schemas(mut self, base_url: &str, faqs: &[Faq]) -> Self {
        if self.canonical.is_some() {
            self.push_json_ld(&schema::provider_organization(base_url));
            self.push_json_ld(&schema::training_network(base_url));
            self.push_json_ld(&schema::faq_page(faqs));
        }
        self
    }

    fn basic(meta: &RouteMeta) -> Self {
        Self {
            title: meta.title.to_string(),
            description: meta.description.to_string(),
            ..Self::default()
        }
    }

    fn push_json_ld(&mut self, value: &Value) {
        self.json_ld.push(schema::to_script_json(value));
    }
}

fn tag(key: &'static str, content: &str) -> MetaTag {
    MetaTag {
        key,
        content: content.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::content::SITE;
    use crate::seo::RouteTable;

    const BASE: &str = "https://sankalp.spectov.in";

    #[test]
    fn test_full_head_for_landing_route() {
        let table = RouteTable::new(true);
        let head = HeadTags::for_route(table.lookup("/global-placement-guarantee").unwrap(), BASE, true);

        assert_eq!(
            head.title,
            "Global Placement Guarantee | 100% Job Placement Assurance | MNC Career Security"
        );
        assert_eq!(
            head.canonical.as_deref(),
            Some("https://sankalp.spectov.in/global-placement-guarantee")
        );
        assert!(head.open_graph.contains(&MetaTag {
            key: "og:locale",
            content: "en_IN".to_string()
        }));
        assert_eq!(head.twitter.len(), 4);
        assert_eq!(head.json_ld.len(), 2);
        assert!(head.robots.is_none());
    }

    #[test]
    fn test_seo_disabled_keeps_only_title_and_description() {
        let table = RouteTable::new(true);
        let head = HeadTags::for_route(table.lookup("/").unwrap(), BASE, false)
            .with_site_schemas(BASE, SITE.faqs);
        assert!(head.title.starts_with("Sankalp Training Program 2.0"));
        assert!(head.keywords.is_none());
        assert!(head.canonical.is_none());
        assert!(head.json_ld.is_empty());
    }

    #[test]
    fn test_home_gets_site_schemas() {
        let table = RouteTable::new(true);
        let head = HeadTags::for_route(table.lookup("/").unwrap(), BASE, true)
            .with_site_schemas(BASE, SITE.faqs);
        assert_eq!(head.json_ld.len(), 5);
        assert!(head.json_ld.iter().any(|s| s.contains("\"FAQPage\"")));
    }

    #[test]
    fn test_not_found_is_noindex() {
        let head = HeadTags::not_found();
        assert_eq!(head.robots, Some("noindex, follow"));
        assert!(head.canonical.is_none());
    }
}
