//! Concurrent graph traversal
//!
//! Each branch of the crawl is one spawned task exploring a single
//! (URL, remaining depth) pair. A branch claims its URL, fetches it, reports
//! the result, and spawns one child branch per discovered link with the
//! depth budget decremented. Branches terminate silently on depth exhaustion
//! or a lost claim, and report-then-terminate on fetch failure; no failure
//! propagates past its own branch.

use crate::engine::completion::CompletionTracker;
use crate::fetch::Fetcher;
use crate::report::Reporter;
use crate::visited::VisitedSet;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Shared state for one top-level crawl invocation
struct CrawlContext<F, R> {
    fetcher: Arc<F>,
    reporter: Arc<R>,
    visited: VisitedSet,
    tracker: CompletionTracker,
    fetch_slots: Option<Arc<Semaphore>>,
}

/// Crawl driver tying a fetcher and a reporter together
///
/// The crawler itself is stateless between runs: every [`Crawler::run`]
/// call gets a fresh visited set and completion tracker, so the same
/// instance can crawl several roots one after another.
pub struct Crawler<F, R> {
    fetcher: Arc<F>,
    reporter: Arc<R>,
    fetch_limit: Option<usize>,
}

impl<F, R> Crawler<F, R>
where
    F: Fetcher,
    R: Reporter,
{
    /// Creates a crawler over the given fetcher and reporter
    pub fn new(fetcher: Arc<F>, reporter: Arc<R>) -> Self {
        Self {
            fetcher,
            reporter,
            fetch_limit: None,
        }
    }

    /// Caps the number of concurrently executing fetches
    ///
    /// This bounds fetch I/O only. Branch spawning stays unbounded and the
    /// traversal semantics are unchanged; discovered links simply queue on
    /// the semaphore before their fetch starts.
    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = Some(limit);
        self
    }

    /// Crawls from `root`, returning once every branch has terminated
    ///
    /// `max_depth` is the traversal budget: the root is fetched at budget
    /// `max_depth`, its links at `max_depth - 1`, and a branch with a zero
    /// budget performs no fetch. With `max_depth == 0` this fetches nothing.
    pub async fn run(&self, root: &str, max_depth: u32) {
        let ctx = Arc::new(CrawlContext {
            fetcher: Arc::clone(&self.fetcher),
            reporter: Arc::clone(&self.reporter),
            visited: VisitedSet::new(),
            tracker: CompletionTracker::new(),
            fetch_slots: self.fetch_limit.map(|n| Arc::new(Semaphore::new(n))),
        });

        tracing::debug!("starting crawl at {} with depth budget {}", root, max_depth);

        spawn_branch(root.to_string(), max_depth, Arc::clone(&ctx));
        ctx.tracker.wait().await;

        tracing::debug!(
            "crawl from {} finished, {} urls claimed",
            root,
            ctx.visited.len()
        );
    }
}

/// Registers a branch with the completion tracker and spawns its task
///
/// The register happens on the spawning task, before the child task exists.
/// A parent that is about to finish therefore always bumps the counter for
/// its children first, so the tracker cannot cross zero while a spawned
/// branch has yet to run.
fn spawn_branch<F, R>(url: String, depth: u32, ctx: Arc<CrawlContext<F, R>>)
where
    F: Fetcher,
    R: Reporter,
{
    ctx.tracker.register();
    tokio::spawn(async move {
        visit(&url, depth, &ctx).await;
        ctx.tracker.complete();
    });
}

/// Runs one branch to its terminal state
async fn visit<F, R>(url: &str, depth: u32, ctx: &Arc<CrawlContext<F, R>>)
where
    F: Fetcher,
    R: Reporter,
{
    if depth == 0 {
        tracing::trace!("depth budget exhausted before {}", url);
        return;
    }

    if !ctx.visited.claim(url) {
        tracing::trace!("{} already claimed by another branch", url);
        return;
    }

    let outcome = {
        let _permit = match &ctx.fetch_slots {
            Some(slots) => Arc::clone(slots).acquire_owned().await.ok(),
            None => None,
        };
        ctx.fetcher.fetch(url).await
    };

    match outcome {
        Ok(page) => {
            ctx.reporter.page_fetched(url, &page.content);
            for link in page.links {
                spawn_branch(link, depth - 1, Arc::clone(ctx));
            }
        }
        Err(error) => {
            ctx.reporter.fetch_failed(url, &error);
        }
    }
}

/// Crawls from `root` with the given fetcher and reporter
///
/// Blocking entry point for a single traversal: returns only once the root
/// branch and every transitively spawned sub-branch have reached a terminal
/// state. Fetch failures are reported to the sink, never returned.
pub async fn crawl<F, R>(root: &str, max_depth: u32, fetcher: Arc<F>, reporter: Arc<R>)
where
    F: Fetcher,
    R: Reporter,
{
    Crawler::new(fetcher, reporter).run(root, max_depth).await
}
