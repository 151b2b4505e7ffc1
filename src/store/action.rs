//! Base trait for actions dispatched to a store.

use std::fmt::Debug;

/// Kind carried by the action every store dispatches to itself on creation.
pub const INIT_KIND: &str = "@@store/INIT";

/// A tagged request to transition state.
///
/// Actions represent:
/// - User activations (button clicks, key presses)
/// - The store's own initialization
///
/// Reducers must treat kinds they do not recognize as no-ops.
pub trait Action: Clone + Debug + Send + Sync + 'static {
    /// Kind discriminator, used for logging and matching.
    fn kind(&self) -> &str;

    /// The action dispatched once when a store is created.
    ///
    /// Its kind should be [`INIT_KIND`] so no application reducer matches it.
    fn init() -> Self;
}
