//! Webwalk: a concurrent, depth-bounded web crawler
//!
//! This crate explores the directed graph of linked pages from a root URL,
//! visiting each distinct page at most once, up to a maximum traversal depth.
//! Fetching is pluggable: the engine only consumes the [`fetch::Fetcher`]
//! capability and reports results through a [`report::Reporter`] sink.

pub mod config;
pub mod engine;
pub mod fetch;
pub mod report;
pub mod visited;

use thiserror::Error;

/// Errors a [`fetch::Fetcher`] can surface for a single page
///
/// A fetch failure is local to the branch that attempted it. The engine
/// reports it through the observability sink and stops that branch; it is
/// never escalated to siblings or to the overall crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("fetch failed for {url}: {reason}")]
    Failed { url: String, reason: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use engine::{crawl, CompletionTracker, Crawler};
pub use fetch::{FetchedPage, Fetcher, FixtureFetcher, HttpFetcher};
pub use report::{CrawlEvent, LogReporter, MemoryReporter, Reporter};
pub use visited::VisitedSet;
