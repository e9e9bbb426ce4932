//! Commands that only read the built-in route table.

use std::io::{self, Write};

use chrono::Utc;

use sankalp_portal::seo::{RouteTable, sitemap};

/// Print the sitemap for `base_url`.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn sitemap(base_url: &str, landing_pages: bool) -> io::Result<()> {
    let table = RouteTable::new(landing_pages);
    let base_url = base_url.trim_end_matches('/');
    let entries = sitemap::entries(&table, base_url, Utc::now().date_naive());

    io::stdout().lock().write_all(sitemap::render(&entries).as_bytes())
}

/// Print one line per route: path, page and title.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn routes(landing_pages: bool) -> io::Result<()> {
    let table = RouteTable::new(landing_pages);
    let mut out = io::stdout().lock();

    for entry in table.iter() {
        writeln!(
            out,
            "{:<40} {:<12} {}",
            entry.path,
            format!("{:?}", entry.page),
            entry.meta.title
        )?;
    }
    writeln!(out, "{} routes", table.len())
}
