//! Fetch capability consumed by the traversal engine
//!
//! The engine treats fetching as a black box: given a URL it gets back the
//! page content and the outbound links found on it, or a [`FetchError`].
//! Two implementations live here:
//! - [`HttpFetcher`]: real HTTP transport with HTML link extraction
//! - [`FixtureFetcher`]: an in-memory page map used to exercise the engine

mod fixture;
mod http;
mod links;

pub use fixture::FixtureFetcher;
pub use http::{build_http_client, HttpFetcher};
pub use links::extract_links;

use crate::FetchError;
use async_trait::async_trait;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The page content, opaque to the engine
    pub content: String,

    /// Outbound links discovered on the page, in document order
    pub links: Vec<String>,
}

/// Capability for retrieving a page and its outbound links
///
/// Implementations must be callable concurrently from any number of
/// traversal branches. The engine performs no retries and no caching of
/// its own; the visited set is the only thing preventing repeat fetches.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    /// Fetches one URL, returning its content and outbound links
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
