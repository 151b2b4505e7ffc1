//! Base trait for store state.

use std::fmt::Debug;

/// Marker trait for state held by a [`Store`](super::Store).
///
/// States should be:
/// - Cheap to clone (snapshots are handed to listeners and callers)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the value a reducer falls back to when no seed is given)
pub trait StoreState: Clone + PartialEq + Default + Debug + Send + Sync + 'static {}
