//! Centralized state store primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Listeners
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: value held by the store, replaced on every dispatch
//! - **Action**: tagged request to transition state
//! - **Reducer**: pure function that computes the next state
//! - **Store**: owns the state and notifies subscribers after each dispatch

mod action;
mod container;
mod error;
mod reducer;
mod state;
mod subscription;

pub use action::{Action, INIT_KIND};
pub use container::Store;
pub use error::StoreError;
pub use reducer::Reducer;
pub use state::StoreState;
pub use subscription::Subscription;
