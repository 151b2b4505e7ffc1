//! Actions for the counter.

use crate::store::{Action, INIT_KIND};

pub const INCREMENT: &str = "INCREMENT";
pub const DECREMENT: &str = "DECREMENT";

/// Actions that can be dispatched to the counter reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Add one to the count.
    Increment,

    /// Subtract one from the count.
    Decrement,

    /// Any other kind. The counter reducer leaves state unchanged.
    Other(String),
}

impl CounterAction {
    /// Parse an action from its kind string. Unrecognized kinds become
    /// [`CounterAction::Other`].
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            INCREMENT => Self::Increment,
            DECREMENT => Self::Decrement,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Action for CounterAction {
    fn kind(&self) -> &str {
        match self {
            Self::Increment => INCREMENT,
            Self::Decrement => DECREMENT,
            Self::Other(kind) => kind,
        }
    }

    fn init() -> Self {
        Self::Other(INIT_KIND.to_string())
    }
}
