//! The counter display and its store connection.

use std::sync::Arc;

use crate::counter::{CounterAction, CounterState};
use crate::store::{Store, StoreError, StoreState};
use crate::ui::component::Component;
use crate::ui::node::Node;

/// Test identifier of the element showing the count.
pub const COUNT_TEST_ID: &str = "count-value";
pub const INCREMENT_LABEL: &str = "+";
pub const DECREMENT_LABEL: &str = "-";
pub const TITLE: &str = "Counter";

/// What the counter display needs from whoever supplies its state.
pub trait CounterPort: Send + Sync {
    fn count(&self) -> i64;
    fn dispatch(&self, action: CounterAction) -> Result<(), StoreError>;
}

/// Presentational counter: a heading, the two triggers and the count.
#[derive(Debug, Default, Clone, Copy)]
pub struct Counter;

impl Counter {
    pub fn render(&self, port: Arc<dyn CounterPort>) -> Node {
        let decrement = {
            let port = Arc::clone(&port);
            move || port.dispatch(CounterAction::Decrement)
        };
        let increment = {
            let port = Arc::clone(&port);
            move || port.dispatch(CounterAction::Increment)
        };

        Node::container(vec![
            Node::heading(TITLE),
            Node::row(vec![
                Node::button(DECREMENT_LABEL, decrement),
                Node::text(port.count().to_string()).with_test_id(COUNT_TEST_ID),
                Node::button(INCREMENT_LABEL, increment),
            ]),
        ])
    }
}

/// Port backed by a store, with the count captured at render time.
struct StorePort<S> {
    store: Store<S, CounterAction>,
    count: i64,
}

impl<S: StoreState> CounterPort for StorePort<S> {
    fn count(&self) -> i64 {
        self.count
    }

    fn dispatch(&self, action: CounterAction) -> Result<(), StoreError> {
        self.store.dispatch(action).map(|_| ())
    }
}

/// [`Counter`] wired to a store through a state selector.
pub struct ConnectedCounter<F> {
    map_state: F,
}

/// Connect the counter display to any store whose actions are
/// [`CounterAction`]s, reading the count through `map_state`.
pub fn connect<S, F>(map_state: F) -> ConnectedCounter<F>
where
    F: Fn(&S) -> i64,
{
    ConnectedCounter { map_state }
}

fn select_count(state: &CounterState) -> i64 {
    state.count
}

impl ConnectedCounter<fn(&CounterState) -> i64> {
    pub fn new() -> Self {
        Self {
            map_state: select_count,
        }
    }
}

impl Default for ConnectedCounter<fn(&CounterState) -> i64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, F> Component<S, CounterAction> for ConnectedCounter<F>
where
    S: StoreState,
    F: Fn(&S) -> i64 + Send + Sync + 'static,
{
    fn render(&self, store: &Store<S, CounterAction>) -> Node {
        let port = StorePort {
            store: store.clone(),
            count: (self.map_state)(&store.state()),
        };
        Counter.render(Arc::new(port))
    }
}
