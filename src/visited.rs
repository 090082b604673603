//! Visited-set tracking for crawl deduplication
//!
//! Every concurrently explored branch of a crawl shares one [`VisitedSet`].
//! The set only grows: once a URL has been claimed it stays claimed for the
//! lifetime of the crawl, which is what guarantees each page is fetched at
//! most once no matter how many branches race to discover it.

use std::collections::HashSet;
use std::sync::Mutex;

/// Concurrency-safe set of URLs already claimed for visiting
///
/// The only mutation path is [`VisitedSet::claim`], a single atomic
/// check-and-insert. Checking membership and inserting as two separate
/// steps would let two racing branches both fetch the same page, so no
/// separate `contains`/`insert` operations are exposed.
#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty visited set for a fresh crawl
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a URL for processing
    ///
    /// Returns `true` if the URL was not yet claimed, in which case the
    /// caller now owns the obligation to process it. Returns `false` if
    /// some branch (this one or a concurrent one) already claimed it.
    /// Exactly one of any number of concurrent claimants for the same URL
    /// sees `true`.
    pub fn claim(&self, url: &str) -> bool {
        let mut set = self.inner.lock().unwrap();
        set.insert(url.to_string())
    }

    /// Returns the number of URLs claimed so far
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Returns true if no URL has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
