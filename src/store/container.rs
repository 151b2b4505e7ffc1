//! Minimal state container.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use scopeguard::defer;

use super::action::Action;
use super::error::StoreError;
use super::reducer::Reducer;
use super::state::StoreState;
use super::subscription::Subscription;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Inner<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    state: Mutex<S>,
    listeners: Mutex<Vec<(u64, Listener<S>)>>,
    next_listener_id: AtomicU64,
    /// Set for the whole reduce + notify pass.
    dispatching: AtomicBool,
    dispatch_count: AtomicU64,
}

/// Holds the current state and broadcasts every transition to subscribers.
///
/// `Store` is a shared handle: clones refer to the same state, so the
/// component tree, the test and the provider can all hold one.
///
/// # Re-entrancy
///
/// A dispatch issued while another dispatch is reducing or notifying
/// (typically from inside a listener) is rejected with
/// [`StoreError::ReentrantDispatch`] and leaves the state untouched.
/// Dispatches are not queued across threads either: a dispatch from another
/// thread that overlaps one in progress is rejected the same way.
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S: StoreState, A: Action> Store<S, A> {
    /// Create a store from a reducer and an optional seed.
    ///
    /// Without a seed the reducer's [`Reducer::initial_state`] is used. The
    /// seed is then reduced once with [`Action::init`], so a reducer that
    /// ignores its input establishes its own state right away.
    pub fn new<R>(reducer: R, initial_state: Option<S>) -> Self
    where
        R: Reducer<S, A>,
    {
        let seeded = initial_state.is_some();
        let seed = initial_state.unwrap_or_else(|| reducer.initial_state());
        let init = A::init();
        let state = reducer.reduce(seed, &init);
        tracing::debug!(seeded, state = ?state, "store created");

        Self {
            inner: Arc::new(Inner {
                reducer: Box::new(reducer),
                state: Mutex::new(state),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
                dispatching: AtomicBool::new(false),
                dispatch_count: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.inner.state.lock().clone()
    }

    /// Reduce `action` into the current state, then notify every listener in
    /// subscription order with the new state.
    ///
    /// Returns the post-dispatch state.
    pub fn dispatch(&self, action: A) -> Result<S, StoreError> {
        if self.inner.dispatching.swap(true, Ordering::AcqRel) {
            tracing::warn!(kind = action.kind(), "rejected re-entrant dispatch");
            return Err(StoreError::ReentrantDispatch {
                kind: action.kind().to_string(),
            });
        }
        defer! {
            self.inner.dispatching.store(false, Ordering::Release);
        }

        let next = {
            let mut state = self.inner.state.lock();
            // A panicking reducer leaves the previous state in place.
            let reduced = self.inner.reducer.reduce(state.clone(), &action);
            *state = reduced.clone();
            reduced
        };
        self.inner.dispatch_count.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(kind = action.kind(), state = ?next, "dispatched");

        // Listeners run without any lock held so they can read the store.
        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in &listeners {
            listener(&next);
        }

        Ok(next)
    }

    /// Register `listener` to run after every dispatch.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed. A listener removed during a
    /// notification pass still receives that pass.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        tracing::trace!(listener = id, "listener subscribed");

        let weak: Weak<Inner<S, A>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.lock().retain(|(existing, _)| *existing != id);
                tracing::trace!(listener = id, "listener unsubscribed");
            }
        })
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Number of dispatches accepted since creation (the init pass excluded).
    pub fn dispatch_count(&self) -> u64 {
        self.inner.dispatch_count.load(Ordering::Relaxed)
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: StoreState, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.lock())
            .field("listeners", &self.inner.listeners.lock().len())
            .finish()
    }
}
