//! Listing fetch lifecycle
//!
//! Keeps a `FetchState<Vec<Listing>>` synchronized with the observed query
//! string. Every observed change starts exactly one fetch cycle. Cycles are
//! tagged with a generation number at issuance; a cycle that settles after a
//! newer one was issued must not overwrite the newer state, so under racing
//! responses the latest query always wins regardless of arrival order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::client::ListingSource;
use crate::models::Listing;
use crate::search::codec;

/// Tri-state wrapper around an async result. Exactly one state holds at any
/// instant.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// A fetch is in flight
    Loading,
    /// The most recent fetch for the most recent query succeeded; the payload
    /// may be empty, which is a valid "no results"
    Ready(T),
    /// The most recent fetch failed; the message is user-displayable
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }
}

/// Fetch controller for the listings view.
///
/// There are no automatic retries; the only recovery path is observing a new
/// query, which starts a fresh cycle.
pub struct ListingFeed {
    source: Arc<dyn ListingSource>,
    state: watch::Sender<FetchState<Vec<Listing>>>,
    generation: AtomicU64,
}

impl ListingFeed {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        let (state, _) = watch::channel(FetchState::Loading);
        Self {
            source,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state
    pub fn current(&self) -> FetchState<Vec<Listing>> {
        self.state.borrow().clone()
    }

    /// Watch state transitions as they happen
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Vec<Listing>>> {
        self.state.subscribe()
    }

    /// Run one fetch cycle for the given query string.
    ///
    /// Transitions to `Loading` immediately, then to `Ready` or `Failed` when
    /// the fetch settles. Returns the state visible once this cycle settles,
    /// which is a newer cycle's result if this one was superseded in flight.
    pub async fn observe(&self, query: &str) -> FetchState<Vec<Listing>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = codec::decode(query);

        self.state.send_replace(FetchState::Loading);

        let settled = match self.source.search(&filter).await {
            Ok(listings) => FetchState::Ready(listings),
            Err(err) => {
                tracing::warn!(error = %err, query, "listing fetch failed");
                FetchState::Failed(err.user_message().to_string())
            }
        };

        // Stale-response suppression: a newer cycle was issued while this one
        // was in flight, so this result must not become visible.
        if self.generation.load(Ordering::SeqCst) == generation {
            self.state.send_replace(settled);
        }

        self.current()
    }
}
