//! Completion tracking for in-flight traversal branches
//!
//! The engine spawns one task per branch with unbounded fan-out, so nothing
//! structural ties a parent to its children. Global completion is tracked
//! with a shared counter instead: incremented once per branch before that
//! branch's task is spawned, decremented when the branch reaches a terminal
//! state. The crawl is complete when the counter crosses zero.

use tokio::sync::watch;

/// Counts traversal branches that have been spawned but not yet finished
///
/// Built on a [`watch`] channel so waiters observe every counter change
/// without polling. Registration must happen before the corresponding task
/// is spawned: a branch that registers its children before decrementing
/// itself can never let the counter touch zero while work is still queued.
#[derive(Debug)]
pub struct CompletionTracker {
    active: watch::Sender<usize>,
    watcher: watch::Receiver<usize>,
}

impl CompletionTracker {
    /// Creates a tracker with no branches in flight
    pub fn new() -> Self {
        let (active, watcher) = watch::channel(0);
        Self { active, watcher }
    }

    /// Registers a branch that is about to be spawned
    pub fn register(&self) {
        self.active.send_modify(|count| *count += 1);
    }

    /// Marks a registered branch as having reached a terminal state
    pub fn complete(&self) {
        self.active.send_modify(|count| {
            debug_assert!(*count > 0, "complete() without matching register()");
            *count -= 1;
        });
    }

    /// Returns the number of branches currently in flight
    pub fn in_flight(&self) -> usize {
        *self.watcher.borrow()
    }

    /// Blocks until every registered branch has completed
    ///
    /// Returns immediately if nothing is in flight, so the caller must
    /// register the root branch before waiting.
    pub async fn wait(&self) {
        let mut watcher = self.watcher.clone();
        loop {
            if *watcher.borrow_and_update() == 0 {
                return;
            }
            if watcher.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Default for CompletionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_returns_immediately_when_idle() {
        let tracker = CompletionTracker::new();
        tracker.wait().await;
    }

    #[test]
    fn test_register_and_complete_balance() {
        let tracker = CompletionTracker::new();
        tracker.register();
        tracker.register();
        assert_eq!(tracker.in_flight(), 2);

        tracker.complete();
        assert_eq!(tracker.in_flight(), 1);

        tracker.complete();
        assert_eq!(tracker.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_wait_blocks_until_zero() {
        let tracker = Arc::new(CompletionTracker::new());
        tracker.register();

        let waiter = {
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move {
                tracker.wait().await;
            })
        };

        // The waiter cannot finish while a branch is registered.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        tracker.complete();
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn test_register_before_complete_prevents_early_zero() {
        let tracker = Arc::new(CompletionTracker::new());
        tracker.register();

        // A finishing branch hands off to a child by registering it first;
        // the counter stays above zero across the handoff.
        tracker.register();
        tracker.complete();
        assert_eq!(tracker.in_flight(), 1);

        tracker.complete();
        tracker.wait().await;
    }

    #[tokio::test]
    async fn test_wait_observes_concurrent_completions() {
        let tracker = Arc::new(CompletionTracker::new());
        for _ in 0..8 {
            tracker.register();
        }

        for _ in 0..8 {
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                tracker.complete();
            });
        }

        tracker.wait().await;
        assert_eq!(tracker.in_flight(), 0);
    }
}
