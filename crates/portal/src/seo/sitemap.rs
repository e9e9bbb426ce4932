//! `sitemap.xml` and `robots.txt`.

use std::fmt::Write as _;

use chrono::NaiveDate;

use super::RouteTable;

const HREFLANGS: &[&str] = &["en", "en-IN", "x-default"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: &'static str,
    pub priority: &'static str,
    pub lastmod: NaiveDate,
}

/// One entry per served route, all stamped with `today`.
#[must_use]
pub fn entries(table: &RouteTable, base_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    table
        .iter()
        .map(|route| SitemapEntry {
            loc: format!("{base_url}{}", route.path),
            changefreq: if route.path == "/" { "daily" } else { "weekly" },
            priority: priority(route.path),
            lastmod: today,
        })
        .collect()
}

fn priority(path: &str) -> &'static str {
    if path == "/" {
        "1.0"
    } else if path.contains("global") {
        "0.9"
    } else {
        "0.8"
    }
}

/// Render the sitemap with `hreflang` alternates for each URL.
#[must_use]
pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        let loc = xml_escape(&entry.loc);
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{loc}</loc>");
        let _ = writeln!(xml, "    <lastmod>{}</lastmod>", entry.lastmod.format("%Y-%m-%d"));
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{}</priority>", entry.priority);
        for lang in HREFLANGS {
            let _ = writeln!(
                xml,
                "    <xhtml:link rel=\"alternate\" hreflang=\"{lang}\" href=\"{loc}\"/>"
            );
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// `robots.txt` allowing the public pages and pointing at the sitemap.
#[must_use]
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /getstarted/\n\
         Disallow: /health\n\
         \n\
         Sitemap: {base_url}/sitemap.xml\n"
    )
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const BASE: &str = "https://sankalp.spectov.in";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_priorities_and_frequencies() {
        let list = entries(&RouteTable::new(true), BASE, today());
        assert_eq!(list.len(), 10);

        let find = |path: &str| {
            list.iter()
                .find(|e| e.loc == format!("{BASE}{path}"))
                .unwrap()
        };
        assert_eq!(find("/").priority, "1.0");
        assert_eq!(find("/").changefreq, "daily");
        assert_eq!(find("/global-mnc-placements").priority, "0.9");
        assert_eq!(find("/global-mnc-placements").changefreq, "weekly");
        assert_eq!(find("/getstarted").priority, "0.8");
    }

    #[test]
    fn test_render_includes_alternates() {
        let xml = render(&entries(&RouteTable::new(false), BASE, today()));
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<lastmod>2025-03-14</lastmod>"));
        assert!(xml.contains(
            "hreflang=\"en-IN\" href=\"https://sankalp.spectov.in/getstarted\""
        ));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt(BASE);
        assert!(robots.contains("Sitemap: https://sankalp.spectov.in/sitemap.xml"));
        assert!(robots.contains("Disallow: /getstarted/\n"));
    }
}
