//! Concurrent fan-out with order-preserving reassembly.

use std::fmt::Display;
use std::future::Future;

use futures::stream::{self, StreamExt};
use tracing::warn;

use super::failure::BatchFailure;
use crate::{Error, Result};

/// Default cap on concurrently in-flight fetches within one batch.
const DEFAULT_MAX_CONCURRENT: usize = 64;

/// Resolves many identifiers through one fetch primitive concurrently.
///
/// Stateless between calls; each [`resolve_all`](Self::resolve_all) owns fresh
/// accumulators. Cancellation is structural: dropping the returned future
/// drops every in-flight fetch with it.
#[derive(Debug, Clone)]
pub struct BatchResolver {
    max_concurrent: usize,
}

impl BatchResolver {
    pub fn new() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n.max(1);
        self
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Fetch every identifier in `ids` and return the successes in input
    /// order.
    ///
    /// Each occurrence, duplicates included, gets its own independent fetch.
    /// The call returns only after every dispatched fetch has completed; there
    /// is no early exit on first failure. Failed identifiers are omitted from
    /// the output: if at least one fetch succeeded the failures are only
    /// logged, and only a batch with zero successes resolves to
    /// [`Error::Batch`] carrying all of them.
    pub async fn resolve_all<'a, K, T, F, Fut>(&self, ids: &'a [K], fetch: F) -> Result<Vec<T>>
    where
        K: Display,
        F: Fn(&'a K) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // One slot per input position. Each fetch writes only its own slot,
        // and the buffered join below is the barrier that makes the whole
        // table readable afterwards.
        let mut slots: Vec<Option<T>> = Vec::with_capacity(ids.len());
        slots.resize_with(ids.len(), || None);
        let mut failures = BatchFailure::new();

        let mut outcomes = stream::iter(ids.iter().enumerate())
            .map(|(position, id)| {
                let fut = fetch(id);
                async move { (position, id, fut.await) }
            })
            .buffer_unordered(self.max_concurrent);

        while let Some((position, id, outcome)) = outcomes.next().await {
            match outcome {
                Ok(resource) => slots[position] = Some(resource),
                Err(reason) => failures.record(id, reason),
            }
        }

        let resolved: Vec<T> = slots.into_iter().flatten().collect();

        if resolved.is_empty() && !failures.is_empty() {
            return Err(Error::Batch(failures));
        }
        if !failures.is_empty() {
            warn!(
                failed = failures.len(),
                requested = ids.len(),
                "batch resolved partially: {}",
                failures
            );
        }

        Ok(resolved)
    }
}

impl Default for BatchResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn resolves_in_input_order() {
        let resolver = BatchResolver::new();
        let ids = vec![3u64, 1, 4, 1, 5, 9, 2, 6];

        let resolved = resolver
            .resolve_all(&ids, |id| {
                let id = *id;
                async move { Ok(id * 10) }
            })
            .await
            .unwrap();

        assert_eq!(resolved, vec![30, 10, 40, 10, 50, 90, 20, 60]);
    }

    #[tokio::test]
    async fn output_order_is_input_order_not_completion_order() {
        let resolver = BatchResolver::new();
        // Larger ids finish last; output must still follow the input.
        let ids = vec![30u64, 20, 10];

        let resolved = resolver
            .resolve_all(&ids, |id| {
                let id = *id;
                async move {
                    tokio::time::sleep(Duration::from_millis(id)).await;
                    Ok(id)
                }
            })
            .await
            .unwrap();

        assert_eq!(resolved, vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn duplicates_are_fetched_and_emitted_per_occurrence() {
        let resolver = BatchResolver::new();
        let calls = AtomicUsize::new(0);
        let ids = vec![5u64, 5, 7];

        let resolved = resolver
            .resolve_all(&ids, |id| {
                let id = *id;
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(format!("item{}", id)) }
            })
            .await
            .unwrap();

        assert_eq!(resolved, ["item5", "item5", "item7"]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn partial_failure_returns_survivors_without_error() {
        let resolver = BatchResolver::new();
        let ids = vec![1u64, 2, 3];

        let resolved = resolver
            .resolve_all(&ids, |id| {
                let id = *id;
                async move {
                    if id == 2 {
                        Err(Error::UnexpectedStatus { status: 500 })
                    } else {
                        Ok(id)
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(resolved, vec![1, 3]);
    }

    #[tokio::test]
    async fn total_failure_names_every_identifier() {
        let resolver = BatchResolver::new();
        let ids = vec![1u64, 2];

        let err = resolver
            .resolve_all(&ids, |_id| async move {
                Err::<u64, Error>(Error::UnexpectedStatus { status: 503 })
            })
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("id 1"), "{message}");
        assert!(message.contains("id 2"), "{message}");
        match err {
            Error::Batch(failure) => assert_eq!(failure.len(), 2),
            other => panic!("expected Error::Batch, got {other}"),
        }
    }

    #[tokio::test]
    async fn empty_input_dispatches_nothing() {
        let resolver = BatchResolver::new();
        let calls = AtomicUsize::new(0);
        let ids: Vec<u64> = Vec::new();

        let resolved = resolver
            .resolve_all(&ids, |id| {
                let id = *id;
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(id) }
            })
            .await
            .unwrap();

        assert!(resolved.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn in_flight_fetches_respect_the_cap() {
        let resolver = BatchResolver::new().with_max_concurrent(2);
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let ids: Vec<u64> = (0..16).collect();

        resolver
            .resolve_all(&ids, |id| {
                let id = *id;
                let active = Arc::clone(&active);
                let peak = Arc::clone(&peak);
                async move {
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(1)).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                    Ok(id)
                }
            })
            .await
            .unwrap();

        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn dropping_the_call_cancels_outstanding_fetches() {
        let resolver = BatchResolver::new();
        let ids = vec![1u64, 2];

        let outcome = tokio::time::timeout(
            Duration::from_millis(20),
            resolver.resolve_all(&ids, |id| {
                let id = *id;
                async move {
                    if id == 2 {
                        future::pending::<()>().await;
                    }
                    Ok(id)
                }
            }),
        )
        .await;

        assert!(outcome.is_err(), "batch should still be blocked on id 2");
    }
}
