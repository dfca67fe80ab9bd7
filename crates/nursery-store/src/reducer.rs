use std::collections::BTreeMap;
use std::fmt;

use crate::action::Action;
use crate::error::{Result, StoreError};
use crate::slice::SliceReducer;
use crate::state::StateTree;

/// Root reducer - composes slice reducers into one function over the state tree
///
/// The registry is fixed once the store is built. Every action runs through
/// every slice; slices that are not addressed hand back their previous state.
#[derive(Default)]
pub struct RootReducer {
    slices: BTreeMap<String, Box<dyn SliceReducer>>,
}

impl RootReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slice under its own name
    pub fn slice<R: SliceReducer + 'static>(self, reducer: R) -> Result<Self> {
        let key = reducer.name().to_string();
        self.with(key, reducer)
    }

    /// Register a slice reducer under an explicit key
    pub fn with<R: SliceReducer + 'static>(mut self, key: impl Into<String>, reducer: R) -> Result<Self> {
        let key = key.into();
        if self.slices.contains_key(&key) {
            return Err(StoreError::DuplicateSlice(key));
        }
        self.slices.insert(key, Box::new(reducer));
        Ok(self)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    /// Pure function producing the next state tree from the current one
    ///
    /// Either every slice succeeds and a complete new tree is returned, or the
    /// first error is returned and nothing is produced.
    pub fn reduce(&self, state: Option<&StateTree>, action: &Action) -> Result<StateTree> {
        let mut next = BTreeMap::new();
        for (key, reducer) in &self.slices {
            let previous = state.and_then(|tree| tree.get(key));
            let slice_state = reducer.reduce_erased(previous, action)?;
            next.insert(key.clone(), slice_state);
        }
        Ok(StateTree::from_slices(next))
    }
}

impl fmt::Debug for RootReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootReducer")
            .field("slices", &self.slices.keys().collect::<Vec<_>>())
            .finish()
    }
}
