//! Components and the provider that binds them to a store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::{Action, Store, StoreState, Subscription};
use crate::ui::node::Node;

/// A UI unit that renders an element tree from a store.
///
/// The store is passed explicitly on every render; components never reach
/// for ambient state.
pub trait Component<S, A>: Send + Sync + 'static {
    fn render(&self, store: &Store<S, A>) -> Node;
}

/// Element tree shared between a provider and whoever inspects it.
pub(crate) type SharedTree = Arc<Mutex<Node>>;

/// Mounts a component against a store and keeps its element tree current.
///
/// The provider subscribes to the store on mount and rebuilds the tree
/// synchronously inside every store notification. Dropping the provider
/// unsubscribes it.
pub struct Provider<S, A> {
    store: Store<S, A>,
    tree: SharedTree,
    renders: Arc<AtomicU64>,
    refresh: Arc<dyn Fn() + Send + Sync>,
    _subscription: Subscription,
}

impl<S: StoreState, A: Action> Provider<S, A> {
    pub fn mount<C>(store: Store<S, A>, ui: C) -> Self
    where
        C: Component<S, A>,
    {
        Self::mount_with(store, ui, |_| {})
    }

    /// Mount and call `on_render` with the fresh tree after every render,
    /// including the initial one.
    pub fn mount_with<C, F>(store: Store<S, A>, ui: C, on_render: F) -> Self
    where
        C: Component<S, A>,
        F: Fn(&Node) + Send + Sync + 'static,
    {
        let tree: SharedTree = Arc::new(Mutex::new(ui.render(&store)));
        let renders = Arc::new(AtomicU64::new(1));
        on_render(&tree.lock());

        let refresh: Arc<dyn Fn() + Send + Sync> = {
            let store = store.clone();
            let tree = Arc::clone(&tree);
            let renders = Arc::clone(&renders);
            Arc::new(move || {
                let node = ui.render(&store);
                let mut current = tree.lock();
                *current = node;
                renders.fetch_add(1, Ordering::Relaxed);
                on_render(&current);
            })
        };

        let listener = Arc::clone(&refresh);
        let subscription = store.subscribe(move |_: &S| listener());
        tracing::debug!("provider mounted");

        Self {
            store,
            tree,
            renders,
            refresh,
            _subscription: subscription,
        }
    }

    pub fn store(&self) -> &Store<S, A> {
        &self.store
    }

    /// Snapshot of the current element tree.
    pub fn tree(&self) -> Node {
        self.tree.lock().clone()
    }

    pub(crate) fn shared_tree(&self) -> SharedTree {
        Arc::clone(&self.tree)
    }

    /// Re-render without a store change.
    pub fn rerender(&self) {
        (self.refresh)();
    }

    /// Number of renders so far, the initial mount included.
    pub fn render_count(&self) -> u64 {
        self.renders.load(Ordering::Relaxed)
    }
}

impl<S, A> Drop for Provider<S, A> {
    fn drop(&mut self) {
        tracing::debug!("provider unmounted");
    }
}
