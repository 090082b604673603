//! Reporter that emits crawl events as tracing logs

use crate::report::Reporter;
use crate::FetchError;

/// Reporter backed by the `tracing` subscriber
///
/// Pages log at info with the content size rather than the content itself.
#[derive(Debug, Default)]
pub struct LogReporter;

impl LogReporter {
    /// Creates a log reporter
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn page_fetched(&self, url: &str, content: &str) {
        tracing::info!("fetched {} ({} bytes)", url, content.len());
    }

    fn fetch_failed(&self, url: &str, error: &FetchError) {
        tracing::warn!("fetch failed for {}: {}", url, error);
    }
}
