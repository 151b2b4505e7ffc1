//! Reducer for the counter.

use crate::store::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Total over all inputs: unknown kinds return the input state unchanged,
/// and the count wraps at the `i64` limits instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl Reducer<CounterState, CounterAction> for CounterReducer {
    fn reduce(&self, state: CounterState, action: &CounterAction) -> CounterState {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count.wrapping_add(1),
            },
            CounterAction::Decrement => CounterState {
                count: state.count.wrapping_sub(1),
            },
            CounterAction::Other(_) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(count: i64, action: CounterAction) -> CounterState {
        CounterReducer.reduce(CounterState::new(count), &action)
    }

    #[test]
    fn increment_adds_one() {
        for count in [-3, 0, 1, 999] {
            assert_eq!(reduce(count, CounterAction::Increment).count, count + 1);
        }
    }

    #[test]
    fn decrement_subtracts_one() {
        for count in [-3, 0, 1, 999] {
            assert_eq!(reduce(count, CounterAction::Decrement).count, count - 1);
        }
    }

    #[test]
    fn decrement_goes_negative() {
        assert_eq!(reduce(0, CounterAction::Decrement).count, -1);
    }

    #[test]
    fn unknown_kind_is_identity() {
        for count in [i64::MIN, -1, 0, 42, i64::MAX] {
            let action = CounterAction::from_kind("RESET");
            assert_eq!(reduce(count, action), CounterState::new(count));
        }
    }

    #[test]
    fn repeated_unknown_kind_is_idempotent() {
        let action = CounterAction::Other("NOOP".to_string());
        let once = CounterReducer.reduce(CounterState::new(5), &action);
        let twice = CounterReducer.reduce(once, &action);
        assert_eq!(once, twice);
    }

    #[test]
    fn increment_is_not_idempotent() {
        let once = reduce(5, CounterAction::Increment);
        let twice = CounterReducer.reduce(once, &CounterAction::Increment);
        assert_ne!(once, twice);
    }

    #[test]
    fn bounds_wrap() {
        assert_eq!(reduce(i64::MAX, CounterAction::Increment).count, i64::MIN);
        assert_eq!(reduce(i64::MIN, CounterAction::Decrement).count, i64::MAX);
    }

    #[test]
    fn initial_state_is_zero() {
        assert_eq!(
            Reducer::<CounterState, CounterAction>::initial_state(&CounterReducer),
            CounterState::new(0)
        );
    }
}
