//! Minimal reducer-based state container
//!
//! This crate provides:
//! - Actions with string type tags (`"<slice>/<operation>"`) and JSON payloads
//! - Slices bundling a state sub-tree with its case reducers and action creators
//! - A root reducer composing slices into one state tree
//! - A single-threaded store with dispatch/subscribe and selector bindings
//!
//! State flows one way: `dispatch(action)` runs the root reducer, installs
//! the new snapshot, then notifies listeners in subscription order.

pub mod action;
pub mod dispatcher;
pub mod error;
pub mod reducer;
pub mod selector;
pub mod slice;
pub mod state;
pub mod store;

pub use action::{Action, ActionCreator, INIT_ACTION_TYPE};
pub use dispatcher::Dispatcher;
pub use error::{ReducerError, Result, StoreError};
pub use reducer::RootReducer;
pub use selector::Binding;
pub use slice::{CaseReducer, Slice, SliceBuilder, SliceReducer};
pub use state::{SliceState, SliceValue, StateTree};
pub use store::{Listener, Store, SubscriptionId, Unsubscribe};
