use thiserror::Error;

use crate::store::StoreError;
use crate::ui::node::Selector;

/// Errors raised by screen queries and simulated events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Unable to find an element by {selector}")]
    NotFound { selector: Selector },

    #[error("Found {count} elements by {selector}, expected exactly one")]
    Multiple { selector: Selector, count: usize },

    #[error("Element found by {selector} cannot be clicked")]
    NotClickable { selector: Selector },

    #[error("Click handler failed: {0}")]
    Dispatch(#[from] StoreError),
}
