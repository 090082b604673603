//! In-memory fetcher for exercising the engine without a network
//!
//! A fixed map from URL to (content, outbound links). URLs missing from
//! the map yield [`FetchError::NotFound`], which is how tests stand in a
//! dead link. Per-URL call counts are recorded so tests can assert the
//! at-most-once fetch property directly.

use crate::fetch::{FetchedPage, Fetcher};
use crate::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct FixturePage {
    content: String,
    links: Vec<String>,
}

/// Fetcher backed by a fixed in-memory page map
#[derive(Debug, Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, FixturePage>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FixtureFetcher {
    /// Creates an empty fixture; every fetch fails with `NotFound`
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page with its content and outbound links
    pub fn with_page<S: AsRef<str>>(mut self, url: &str, content: &str, links: &[S]) -> Self {
        self.pages.insert(
            url.to_string(),
            FixturePage {
                content: content.to_string(),
                links: links.iter().map(|l| l.as_ref().to_string()).collect(),
            },
        );
        self
    }

    /// Returns how many times `url` has been fetched
    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    /// Returns the total number of fetch calls across all URLs
    pub fn total_fetches(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl Fetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        {
            let mut calls = self.calls.lock().unwrap();
            *calls.entry(url.to_string()).or_insert(0) += 1;
        }

        match self.pages.get(url) {
            Some(page) => Ok(FetchedPage {
                content: page.content.clone(),
                links: page.links.clone(),
            }),
            None => Err(FetchError::NotFound {
                url: url.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_url_returns_page() {
        let fetcher =
            FixtureFetcher::new().with_page("https://a.test/", "hello", &["https://b.test/"]);

        let page = fetcher.fetch("https://a.test/").await.unwrap();
        assert_eq!(page.content, "hello");
        assert_eq!(page.links, vec!["https://b.test/"]);
    }

    #[tokio::test]
    async fn test_unknown_url_is_not_found() {
        let fetcher = FixtureFetcher::new();

        let err = fetcher.fetch("https://missing.test/").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_counts_accumulate() {
        let fetcher = FixtureFetcher::new().with_page("https://a.test/", "hello", &[] as &[&str]);

        assert_eq!(fetcher.fetch_count("https://a.test/"), 0);
        let _ = fetcher.fetch("https://a.test/").await;
        let _ = fetcher.fetch("https://a.test/").await;
        let _ = fetcher.fetch("https://missing.test/").await;

        assert_eq!(fetcher.fetch_count("https://a.test/"), 2);
        assert_eq!(fetcher.fetch_count("https://missing.test/"), 1);
        assert_eq!(fetcher.total_fetches(), 3);
    }
}
