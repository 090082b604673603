//! Traversal engine for concurrent, depth-bounded crawling
//!
//! This module contains the crawl core:
//! - One spawned task per traversal branch, unbounded fan-out
//! - Deduplication through the shared [`crate::visited::VisitedSet`]
//! - A completion tracker the caller blocks on until every branch finishes
//! - Per-branch failure isolation: a failed fetch never aborts the crawl

mod completion;
mod traversal;

pub use completion::CompletionTracker;
pub use traversal::{crawl, Crawler};
