//! The counter reducer driven through a real store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use connect_harness::counter::{CounterAction, CounterReducer, CounterState, CounterStore};
use connect_harness::store::{Reducer, StoreError};
use parking_lot::Mutex;

#[test]
fn unknown_kinds_are_identity() {
    let store = CounterStore::new(CounterReducer, Some(CounterState::new(17)));
    for kind in ["", "increment", "RESET", "@@store/INIT", "INCREMENT "] {
        let next = store.dispatch(CounterAction::from_kind(kind)).unwrap();
        assert_eq!(next, CounterState::new(17), "kind {kind:?}");
    }
}

#[test]
fn increment_and_decrement_step_by_one() {
    let store = CounterStore::new(CounterReducer, None);
    let mut expected = 0i64;
    let script = [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::from_kind("NOOP"),
        CounterAction::Decrement,
        CounterAction::Decrement,
    ];
    for action in script {
        expected += match action {
            CounterAction::Increment => 1,
            CounterAction::Decrement => -1,
            CounterAction::Other(_) => 0,
        };
        assert_eq!(store.dispatch(action).unwrap().count, expected);
    }
    assert_eq!(store.state().count, -1);
}

#[test]
fn reducer_and_store_agree() {
    let reducer = CounterReducer;
    let store = CounterStore::new(CounterReducer, Some(CounterState::new(5)));
    let direct = reducer.reduce(CounterState::new(5), &CounterAction::Decrement);
    assert_eq!(store.dispatch(CounterAction::Decrement).unwrap(), direct);
}

#[test]
fn every_dispatch_notifies_once_with_new_state() {
    let store = CounterStore::new(CounterReducer, None);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(move |state: &CounterState| sink.lock().push(state.count));

    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::from_kind("OTHER")).unwrap();
    store.dispatch(CounterAction::Decrement).unwrap();

    assert_eq!(*seen.lock(), vec![1, 1, 0]);
}

#[test]
fn reentrant_dispatch_is_rejected_and_state_untouched() {
    let store = CounterStore::new(CounterReducer, None);
    let rejected = Arc::new(AtomicUsize::new(0));
    let inner = store.clone();
    let counter = Arc::clone(&rejected);
    let _sub = store.subscribe(move |_: &CounterState| {
        if let Err(StoreError::ReentrantDispatch { kind }) =
            inner.dispatch(CounterAction::Increment)
        {
            assert_eq!(kind, "INCREMENT");
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    store.dispatch(CounterAction::Increment).unwrap();

    assert_eq!(rejected.load(Ordering::SeqCst), 1);
    assert_eq!(store.state().count, 1);
}
