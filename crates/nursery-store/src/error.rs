//! Errors raised by the store and by slice reducers

use thiserror::Error;

/// Errors surfaced to the caller of `Store::new` or `Store::dispatch`
#[derive(Error, Debug)]
pub enum StoreError {
    /// The action type is empty or contains whitespace
    #[error("Malformed action type: {0:?}")]
    MalformedAction(String),

    /// Two slices were registered under the same key
    #[error("Slice already registered: {0}")]
    DuplicateSlice(String),

    /// The state held for a slice is not the type its reducer expects
    #[error("State for slice '{0}' has an unexpected type")]
    SliceTypeMismatch(String),

    /// A payload could not be serialized into an action
    #[error("Failed to serialize action payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A case reducer rejected the action. State is left untouched.
    #[error("Reducer {slice}/{operation} failed: {source}")]
    Reducer {
        slice: String,
        operation: String,
        #[source]
        source: ReducerError,
    },

    /// A dispatcher outlived the store it was created from
    #[error("Store has been dropped")]
    StoreDropped,
}

/// Errors a case reducer may return
#[derive(Error, Debug)]
pub enum ReducerError {
    #[error("Action carries no payload")]
    MissingPayload,

    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(String),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
