//! Reporter that collects crawl events in memory
//!
//! Used by tests to assert exactly which pages a crawl fetched and which
//! branches failed.

use crate::report::Reporter;
use crate::FetchError;
use std::sync::Mutex;

/// One recorded crawl event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A page was fetched; carries the URL and the page content
    PageFetched { url: String, content: String },

    /// A fetch failed; carries the URL and the rendered error
    FetchFailed { url: String, error: String },
}

/// Reporter that appends every event to an internal list
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<CrawlEvent>>,
}

impl MemoryReporter {
    /// Creates an empty collecting reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events
    pub fn events(&self) -> Vec<CrawlEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the URLs of all successfully fetched pages, in event order
    pub fn fetched_urls(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                CrawlEvent::PageFetched { url, .. } => Some(url.clone()),
                CrawlEvent::FetchFailed { .. } => None,
            })
            .collect()
    }

    /// Returns the URLs of all failed fetches, in event order
    pub fn failed_urls(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                CrawlEvent::FetchFailed { url, .. } => Some(url.clone()),
                CrawlEvent::PageFetched { .. } => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn page_fetched(&self, url: &str, content: &str) {
        self.events.lock().unwrap().push(CrawlEvent::PageFetched {
            url: url.to_string(),
            content: content.to_string(),
        });
    }

    fn fetch_failed(&self, url: &str, error: &FetchError) {
        self.events.lock().unwrap().push(CrawlEvent::FetchFailed {
            url: url.to_string(),
            error: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_page_and_failure() {
        let reporter = MemoryReporter::new();
        reporter.page_fetched("https://a.test/", "hello");
        reporter.fetch_failed(
            "https://b.test/",
            &FetchError::NotFound {
                url: "https://b.test/".to_string(),
            },
        );

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(reporter.fetched_urls(), vec!["https://a.test/"]);
        assert_eq!(reporter.failed_urls(), vec!["https://b.test/"]);
    }

    #[test]
    fn test_page_event_carries_content() {
        let reporter = MemoryReporter::new();
        reporter.page_fetched("https://a.test/", "the content");

        assert_eq!(
            reporter.events(),
            vec![CrawlEvent::PageFetched {
                url: "https://a.test/".to_string(),
                content: "the content".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_reporter() {
        let reporter = MemoryReporter::new();
        assert!(reporter.events().is_empty());
        assert!(reporter.fetched_urls().is_empty());
        assert!(reporter.failed_urls().is_empty());
    }
}
