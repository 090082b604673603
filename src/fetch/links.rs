//! Outbound link extraction from HTML
//!
//! Pulls the crawlable links out of a fetched page: `<a href>` targets,
//! resolved against the page URL, filtered down to http/https.

use scraper::{Html, Selector};
use url::Url;

/// Extracts all crawlable links from an HTML document
///
/// Skipped hrefs: `javascript:`, `mailto:`, `tel:` and `data:` schemes,
/// fragment-only anchors, anchors with a `download` attribute, and anything
/// that does not resolve to an http/https URL against `base_url`.
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_link(href, base_url) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

/// Resolves an href to an absolute http/https URL, or rejects it
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Same-page anchors
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
