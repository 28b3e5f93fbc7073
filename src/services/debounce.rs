//! Caller-side debouncing for as-you-type search.
//!
//! Each submitted query replaces the pending one. A query is only evaluated
//! after the quiet window elapses without a newer submission, and a result
//! that finishes after a newer query was submitted is dropped (last query
//! wins). The search core itself stays synchronous and debounce-free.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::SearchResult;
use crate::services::SearchService;

/// Result of the most recent evaluated query.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    pub generation: u64,
    pub query: String,
    pub output: T,
}

pub type BoxedSearch<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub struct Debouncer<T, F> {
    delay: Duration,
    evaluate: Arc<F>,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: Arc<watch::Sender<Option<Debounced<T>>>>,
}

impl<T, F, Fut> Debouncer<T, F>
where
    T: Send + Sync + 'static,
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    pub fn new(delay: Duration, evaluate: F) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            delay,
            evaluate: Arc::new(evaluate),
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            tx: Arc::new(tx),
        }
    }

    /// Schedules `query`, superseding anything pending or in flight.
    ///
    /// Must be called from within a Tokio runtime. Returns the generation
    /// assigned to this query.
    pub fn submit(&self, query: impl Into<String>) -> u64 {
        let query = query.into();

        // Generation bump, spawn and handle swap happen under one lock so
        // concurrent submitters are ordered the same way in all three.
        let mut pending = self.lock_pending();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let delay = self.delay;
        let evaluate = Arc::clone(&self.evaluate);
        let current = Arc::clone(&self.generation);
        let tx = Arc::clone(&self.tx);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }

            let output = evaluate(query.clone()).await;

            if current.load(Ordering::SeqCst) != generation {
                debug!(generation, query = %query, "Discarding superseded search result");
                return;
            }

            tx.send_replace(Some(Debounced {
                generation,
                query,
                output,
            }));
        });

        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
        generation
    }

    /// Drops whatever is pending or in flight without scheduling anything.
    pub fn cancel(&self) {
        let mut pending = self.lock_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Debounced<T>>> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn latest(&self) -> Option<Debounced<T>>
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T, F> Drop for Debouncer<T, F> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

/// Debouncer that runs global search against `service`.
pub fn global_search_debouncer(
    service: Arc<dyn SearchService>,
    delay: Duration,
) -> Debouncer<Vec<SearchResult>, impl Fn(String) -> BoxedSearch<Vec<SearchResult>> + Send + Sync>
{
    Debouncer::new(delay, move |query: String| {
        let service = Arc::clone(&service);
        Box::pin(async move { service.search_global(&query).await }) as BoxedSearch<_>
    })
}
