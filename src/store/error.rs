use thiserror::Error;

/// Errors returned by [`Store::dispatch`](super::Store::dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A dispatch was issued while the store was reducing or notifying.
    #[error("Action '{kind}' dispatched while a previous dispatch was in progress")]
    ReentrantDispatch { kind: String },
}
