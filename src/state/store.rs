//! Thread-safe state container.
//!
//! The store holds one [`AppState`] behind a write lock and applies
//! reducers to it sequentially, so every reduction observes a consistent
//! prior state regardless of which thread dispatched. It is an explicit,
//! constructed object (cheaply `Clone` via `Arc`), never a process-wide
//! singleton, so tests can run isolated instances.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::state::action::Action;
use crate::state::app_state::AppState;
use crate::state::error::StoreError;
use crate::state::reducer::reduce;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

struct StoreInner {
    state: RwLock<AppState>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

/// Reducer-based state container with dispatch/subscribe semantics.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Validate and apply `action`, then notify subscribers with the new
    /// snapshot.
    ///
    /// Dismissing from a search key that has no bucket is a precondition
    /// violation: the dispatch is rejected with
    /// [`StoreError::MissingBucket`], state is left untouched, and no
    /// subscriber is notified.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        let snapshot = {
            let mut state = self.inner.state.write();
            if let Action::Dismiss { key, .. } = &action {
                if !state.results.contains_key(key) {
                    return Err(StoreError::MissingBucket { key: key.clone() });
                }
            }
            let previous = std::mem::take(&mut *state);
            *state = reduce(previous, &action);
            state.clone()
        };
        tracing::trace!(?action, "dispatched");

        // Subscribers run on the dispatching thread and must not
        // dispatch back into the store from the callback.
        for (_, subscriber) in self.inner.subscribers.lock().iter() {
            subscriber(&snapshot);
        }
        Ok(())
    }

    /// Register a callback invoked after every successful dispatch.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let id = self.inner.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .lock()
            .retain(|(existing, _)| *existing != id);
    }
}
