//! Render harness for components connected to a store.
//!
//! ```ignore
//! let view = render_with_store(ConnectedCounter::new(), RenderOptions::default());
//! fire_event::click(&view.get_by_text("+")?)?;
//! assert_eq!(view.get_by_test_id("count-value")?.text_content()?, "1");
//! ```
//!
//! A render resolves a store (the one supplied, or a fresh one built from
//! the harness's default reducer and the optional seed), mounts the
//! component under a [`Provider`] bound to it, and draws every render into
//! an in-memory buffer. The returned [`RenderResult`] derefs to the
//! [`Screen`] queries and also exposes the store.

mod error;
pub mod fire_event;
mod screen;

pub use error::QueryError;
pub use screen::{Element, Screen};

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::config::UiConfig;
use crate::counter::{CounterAction, CounterReducer, CounterState};
use crate::store::{Action, Reducer, Store, StoreState};
use crate::ui::component::{Component, Provider};
use crate::ui::render::tree_widget;

/// Optional configuration for a single render.
pub struct RenderOptions<S, A> {
    /// Seed for a newly created store. Ignored when `store` is set.
    pub initial_state: Option<S>,
    /// Store to use verbatim instead of creating one.
    pub store: Option<Store<S, A>>,
}

impl<S, A> RenderOptions<S, A> {
    pub fn new() -> Self {
        Self {
            initial_state: None,
            store: None,
        }
    }

    #[must_use]
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    #[must_use]
    pub fn store(mut self, store: Store<S, A>) -> Self {
        self.store = Some(store);
        self
    }
}

impl<S, A> Default for RenderOptions<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds stores from a default reducer and mounts components against them.
#[derive(Debug, Clone)]
pub struct Harness<R> {
    default_reducer: R,
    width: u16,
    height: u16,
}

impl<R> Harness<R> {
    pub fn new(default_reducer: R) -> Self {
        Self::with_config(default_reducer, &UiConfig::default())
    }

    pub fn with_config(default_reducer: R, config: &UiConfig) -> Self {
        Self {
            default_reducer,
            width: config.viewport_width,
            height: config.viewport_height,
        }
    }

    /// Size of the buffer renders are drawn into.
    #[must_use]
    pub fn viewport(mut self, width: u16, height: u16) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Mount `ui` under a provider bound to the store resolved from `options`.
    pub fn render<S, A, C>(&self, ui: C, options: RenderOptions<S, A>) -> RenderResult<S, A>
    where
        S: StoreState,
        A: Action,
        R: Reducer<S, A> + Clone,
        C: Component<S, A>,
    {
        let store = match options {
            RenderOptions {
                store: Some(store),
                initial_state,
            } => {
                if initial_state.is_some() {
                    tracing::debug!("initial_state ignored: a store was supplied");
                }
                store
            }
            RenderOptions {
                store: None,
                initial_state,
            } => Store::new(self.default_reducer.clone(), initial_state),
        };

        let area = Rect::new(0, 0, self.width, self.height);
        let buffer = Arc::new(Mutex::new(Buffer::empty(area)));
        let sink = Arc::clone(&buffer);
        let provider = Provider::mount_with(store.clone(), ui, move |tree| {
            let mut buffer = sink.lock();
            buffer.reset();
            tree_widget(tree).render(area, &mut buffer);
        });
        let screen = Screen::new(provider.shared_tree(), buffer);
        tracing::debug!(width = self.width, height = self.height, "rendered");

        RenderResult {
            store,
            screen,
            provider,
        }
    }
}

/// What a render hands back: the screen queries plus the store.
///
/// `store` is an escape hatch for assertions the screen cannot express.
/// Prefer asserting on what the screen shows over inspecting state.
pub struct RenderResult<S, A> {
    pub store: Store<S, A>,
    screen: Screen,
    provider: Provider<S, A>,
}

impl<S: StoreState, A: Action> RenderResult<S, A> {
    /// Render again without a store change.
    pub fn rerender(&self) {
        self.provider.rerender();
    }

    /// Renders so far, the initial mount included.
    pub fn render_count(&self) -> u64 {
        self.provider.render_count()
    }

    /// Tear the mount down, releasing its store subscription.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<S, A> Deref for RenderResult<S, A> {
    type Target = Screen;

    fn deref(&self) -> &Screen {
        &self.screen
    }
}

/// Render `ui` against a counter store.
///
/// With neither `initial_state` nor `store` set, the store is built from
/// [`CounterReducer`] with no seed and starts at zero.
pub fn render_with_store<C>(
    ui: C,
    options: RenderOptions<CounterState, CounterAction>,
) -> RenderResult<CounterState, CounterAction>
where
    C: Component<CounterState, CounterAction>,
{
    Harness::new(CounterReducer).render(ui, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterStore;
    use crate::ui::counter::{ConnectedCounter, COUNT_TEST_ID};

    #[test]
    fn supplied_store_wins_over_initial_state() {
        let store = CounterStore::new(CounterReducer, Some(CounterState::new(8)));
        let view = render_with_store(
            ConnectedCounter::new(),
            RenderOptions::new()
                .initial_state(CounterState::new(100))
                .store(store.clone()),
        );
        let count = view.get_by_test_id(COUNT_TEST_ID).unwrap();
        assert_eq!(count.text_content().unwrap(), "8");
        assert_eq!(view.store.state(), store.state());
    }

    #[test]
    fn screen_text_shows_drawn_counter() {
        let view = render_with_store(
            ConnectedCounter::new(),
            RenderOptions::new().initial_state(CounterState::new(3)),
        );
        let text = view.screen_text();
        assert!(text.contains("Counter"), "{text}");
        assert!(text.contains("[ - ]  3  [ + ]"), "{text}");
    }

    #[test]
    fn viewport_sets_buffer_size() {
        let view = Harness::new(CounterReducer)
            .viewport(30, 5)
            .render(ConnectedCounter::new(), RenderOptions::default());
        let text = view.screen_text();
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn unmount_releases_subscription() {
        let store = CounterStore::new(CounterReducer, None);
        let view = render_with_store(
            ConnectedCounter::new(),
            RenderOptions::new().store(store.clone()),
        );
        assert_eq!(store.listener_count(), 1);
        view.unmount();
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn rerender_counts_without_dispatch() {
        let view = render_with_store(ConnectedCounter::new(), RenderOptions::default());
        view.rerender();
        assert_eq!(view.render_count(), 2);
        assert_eq!(view.store.dispatch_count(), 0);
    }
}
