//! Reducer trait for the store.

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer<S, A>: Send + Sync + 'static {
    /// Process an action and return the new state.
    ///
    /// Unknown action kinds must return `state` unchanged.
    fn reduce(&self, state: S, action: &A) -> S;

    /// State used when a store is created without a seed.
    fn initial_state(&self) -> S
    where
        S: Default,
    {
        S::default()
    }
}

impl<S, A, F> Reducer<S, A> for F
where
    S: StoreState,
    A: Action,
    F: Fn(S, &A) -> S + Send + Sync + 'static,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}
