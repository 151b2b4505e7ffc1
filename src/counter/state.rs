//! State for the counter.

use serde::{Deserialize, Serialize};

use crate::store::StoreState;

/// Current counter value. Defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

impl StoreState for CounterState {}
