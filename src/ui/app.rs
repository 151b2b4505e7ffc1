use crate::counter::{CounterAction, CounterState, CounterStore};
use crate::ui::component::{Component, Provider};
use crate::ui::node::{Node, Selector};

/// Interactive application state: the mounted counter plus lifecycle flags.
pub struct App {
    should_quit: bool,
    provider: Provider<CounterState, CounterAction>,
    last_error: Option<String>,
}

impl App {
    pub fn new<C>(store: CounterStore, ui: C) -> Self
    where
        C: Component<CounterState, CounterAction>,
    {
        Self {
            should_quit: false,
            provider: Provider::mount(store, ui),
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tree(&self) -> Node {
        self.provider.tree()
    }

    pub fn store(&self) -> &CounterStore {
        self.provider.store()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Activate the trigger labelled `label`, as a click would.
    ///
    /// Returns `false` when no single clickable element carries that label.
    pub fn activate(&mut self, label: &str) -> bool {
        let handler = {
            let tree = self.provider.tree();
            let found = tree.find_all(&Selector::text(label));
            match found.as_slice() {
                [node] => node.click_handler(),
                _ => None,
            }
        };
        let Some(handler) = handler else {
            tracing::debug!(label, "no trigger to activate");
            return false;
        };

        match handler() {
            Ok(()) => self.last_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "activation failed");
                self.last_error = Some(err.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterReducer;
    use crate::store::{Action, StoreError};
    use crate::ui::counter::ConnectedCounter;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn make_app(count: i64) -> App {
        let store = CounterStore::new(CounterReducer, Some(CounterState::new(count)));
        App::new(store, ConnectedCounter::new())
    }

    #[test]
    fn activate_dispatches_through_trigger() {
        let mut app = make_app(0);
        assert!(app.activate("+"));
        assert!(app.activate("+"));
        assert!(app.activate("-"));
        assert_eq!(app.store().state(), CounterState::new(1));
        assert!(app.last_error().is_none());
    }

    #[test]
    fn activate_unknown_label_is_ignored() {
        let mut app = make_app(4);
        assert!(!app.activate("*"));
        assert!(!app.activate("Counter"));
        assert_eq!(app.store().state(), CounterState::new(4));
    }

    /// A "+" trigger that fails with a rejected dispatch while `fail` is set.
    struct Guarded {
        fail: Arc<AtomicBool>,
    }

    impl Component<CounterState, CounterAction> for Guarded {
        fn render(&self, store: &CounterStore) -> Node {
            let store = store.clone();
            let fail = Arc::clone(&self.fail);
            Node::button("+", move || {
                if fail.load(Ordering::SeqCst) {
                    return Err(StoreError::ReentrantDispatch {
                        kind: CounterAction::Increment.kind().to_string(),
                    });
                }
                store.dispatch(CounterAction::Increment).map(|_| ())
            })
        }
    }

    #[test]
    fn failed_activation_is_recorded_until_next_success() {
        let fail = Arc::new(AtomicBool::new(true));
        let mut app = App::new(
            CounterStore::new(CounterReducer, None),
            Guarded {
                fail: Arc::clone(&fail),
            },
        );

        assert!(app.activate("+"));
        let error = app.last_error().expect("error recorded");
        assert!(error.contains("INCREMENT"), "{error}");
        assert_eq!(app.store().state(), CounterState::new(0));

        fail.store(false, Ordering::SeqCst);
        assert!(app.activate("+"));
        assert!(app.last_error().is_none());
        assert_eq!(app.store().state(), CounterState::new(1));
    }

    #[test]
    fn quit_flag() {
        let mut app = make_app(0);
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
    }
}
