//! Counter feature module.
//!
//! - `state.rs` - The counter value
//! - `action.rs` - INCREMENT / DECREMENT and pass-through kinds
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::{CounterAction, DECREMENT, INCREMENT};
pub use reducer::CounterReducer;
pub use state::CounterState;

use crate::store::Store;

/// Store specialized to the counter state and actions.
pub type CounterStore = Store<CounterState, CounterAction>;
