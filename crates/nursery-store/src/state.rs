//! The state tree held by the store
//!
//! Every slice owns one sub-tree, stored behind an `Arc` so that a new tree
//! can share unchanged slices with the previous one. Pointer identity of a
//! slice is the signal "this slice did not change".

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// A value that can live in the state tree
///
/// Implemented for every `Debug + Serialize + Send + Sync + 'static` type.
pub trait SliceValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// Snapshot used for structural comparison and diagnostics
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T> SliceValue for T
where
    T: Any + fmt::Debug + Serialize + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Type-erased slice state
pub type SliceState = Arc<dyn SliceValue>;

/// Immutable snapshot of the whole application state, keyed by slice
#[derive(Clone, Default)]
pub struct StateTree {
    slices: BTreeMap<String, SliceState>,
}

impl StateTree {
    pub(crate) fn from_slices(slices: BTreeMap<String, SliceState>) -> Self {
        Self { slices }
    }

    /// Raw slice state by key
    pub fn get(&self, key: &str) -> Option<&SliceState> {
        self.slices.get(key)
    }

    /// Typed access to a slice's state
    ///
    /// Returns `None` if the key is unknown or holds a different type.
    pub fn slice<T: Any>(&self, key: &str) -> Option<&T> {
        (**self.slices.get(key)?).as_any().downcast_ref::<T>()
    }

    /// Typed shared handle to a slice's state
    pub fn slice_arc<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let state = Arc::clone(self.slices.get(key)?);
        state.into_any().downcast::<T>().ok()
    }

    /// Slice keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// True if both trees hold the very same allocation for `key`
    pub fn shares_slice(&self, other: &StateTree, key: &str) -> bool {
        match (self.slices.get(key), other.slices.get(key)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// JSON snapshot of the whole tree
    ///
    /// Slices that fail to serialize are logged and shown as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .slices
            .iter()
            .map(|(key, state)| {
                let value = (**state).to_json().unwrap_or_else(|e| {
                    log::warn!("Slice '{}' is not serializable: {}", key, e);
                    serde_json::Value::Null
                });
                (key.clone(), value)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl fmt::Debug for StateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.slices.iter()).finish()
    }
}

/// Structural equality: same keys, and every slice serializes to the same value
impl PartialEq for StateTree {
    fn eq(&self, other: &Self) -> bool {
        self.slices.len() == other.slices.len()
            && self.slices.iter().all(|(key, state)| {
                other.slices.get(key).is_some_and(|o| {
                    Arc::ptr_eq(state, o) || json_eq(&**state, &**o)
                })
            })
    }
}

/// Unserializable slices are only equal by identity
fn json_eq(a: &dyn SliceValue, b: &dyn SliceValue) -> bool {
    match (a.to_json(), b.to_json()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
