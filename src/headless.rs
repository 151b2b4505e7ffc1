//! Render the connected counter without a terminal.

use thiserror::Error;

use crate::config::Config;
use crate::counter::{CounterAction, CounterReducer, CounterState};
use crate::store::StoreError;
use crate::testing::{Harness, RenderOptions};
use crate::ui::counter::ConnectedCounter;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] StoreError),

    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The drawn screen.
    #[default]
    Screen,
    /// The final state as JSON.
    Json,
}

/// Mount the counter against a store seeded with `initial_count`, dispatch
/// `actions` in order, and return the output in `format`.
pub fn run_headless(
    config: &Config,
    initial_count: i64,
    actions: Vec<CounterAction>,
    format: OutputFormat,
) -> Result<String, HeadlessError> {
    let view = Harness::with_config(CounterReducer, &config.ui).render(
        ConnectedCounter::new(),
        RenderOptions::new().initial_state(CounterState::new(initial_count)),
    );

    for action in actions {
        view.store.dispatch(action)?;
    }

    let output = match format {
        OutputFormat::Screen => view.screen_text(),
        OutputFormat::Json => serde_json::to_string(&view.store.state())?,
    };
    Ok(output)
}
