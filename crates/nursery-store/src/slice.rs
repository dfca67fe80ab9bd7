//! Slices: a named state sub-tree, the case reducers that transition it, and
//! the action creators derived from those reducers.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::action::{Action, ActionCreator};
use crate::error::{ReducerError, Result, StoreError};
use crate::state::{SliceState, SliceValue};

/// Update function for one operation of a slice
///
/// Receives the current state and the action, and returns:
/// - `Ok(Some(next))` when the slice changed
/// - `Ok(None)` when the action is a no-op for this state (the previous
///   state is kept by reference)
/// - `Err(_)` to reject the action; nothing is committed
///
/// Case reducers are plain functions over a shared reference. They must not
/// have side effects and must never dispatch.
pub type CaseReducer<S> = fn(&S, &Action) -> Result<Option<S>, ReducerError>;

/// A named bundle of state, case reducers and action creators
pub struct Slice<S> {
    name: String,
    initial_state: Arc<S>,
    reducers: BTreeMap<String, CaseReducer<S>>,
}

impl<S> Slice<S> {
    /// Start defining a slice
    pub fn builder(name: impl Into<String>, initial_state: S) -> SliceBuilder<S> {
        SliceBuilder {
            name: name.into(),
            initial_state,
            reducers: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_state(&self) -> &Arc<S> {
        &self.initial_state
    }

    /// Action creator for one operation, if the slice declares it
    pub fn action(&self, operation: &str) -> Option<ActionCreator> {
        self.reducers
            .contains_key(operation)
            .then(|| ActionCreator::new(&self.name, operation))
    }

    /// One action creator per declared operation, keyed by operation name
    pub fn actions(&self) -> BTreeMap<String, ActionCreator> {
        self.reducers
            .keys()
            .map(|op| (op.clone(), ActionCreator::new(&self.name, op)))
            .collect()
    }

    /// Compute the next state of this slice
    ///
    /// Without a prior state the slice starts from its initial state. Actions
    /// addressed to other slices, and unknown operations of this slice,
    /// return the prior state by reference.
    pub fn reduce(&self, state: Option<&Arc<S>>, action: &Action) -> Result<Arc<S>> {
        let state = state.unwrap_or(&self.initial_state);

        let Some(operation) = action.operation_for(&self.name) else {
            return Ok(Arc::clone(state));
        };

        let Some(case_reducer) = self.reducers.get(operation) else {
            log::trace!("{}: ignoring unknown operation '{}'", self.name, operation);
            return Ok(Arc::clone(state));
        };

        match case_reducer(&**state, action) {
            Ok(Some(next)) => Ok(Arc::new(next)),
            Ok(None) => Ok(Arc::clone(state)),
            Err(source) => Err(StoreError::Reducer {
                slice: self.name.clone(),
                operation: operation.to_string(),
                source,
            }),
        }
    }
}

impl<S> fmt::Debug for Slice<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("name", &self.name)
            .field("operations", &self.reducers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder returned by [`Slice::builder`]
pub struct SliceBuilder<S> {
    name: String,
    initial_state: S,
    reducers: BTreeMap<String, CaseReducer<S>>,
}

impl<S> SliceBuilder<S> {
    /// Declare an operation. Declaring the same name twice keeps the last one.
    pub fn reducer(mut self, operation: impl Into<String>, reducer: CaseReducer<S>) -> Self {
        self.reducers.insert(operation.into(), reducer);
        self
    }

    pub fn build(self) -> Slice<S> {
        Slice {
            name: self.name,
            initial_state: Arc::new(self.initial_state),
            reducers: self.reducers,
        }
    }
}

/// Type-erased slice reducer, as registered in the root reducer
pub trait SliceReducer {
    /// Slice name used for routing (`"<name>/<operation>"`)
    fn name(&self) -> &str;

    fn reduce_erased(&self, state: Option<&SliceState>, action: &Action) -> Result<SliceState>;
}

impl<S> SliceReducer for Slice<S>
where
    S: Any + fmt::Debug + Serialize + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn reduce_erased(&self, state: Option<&SliceState>, action: &Action) -> Result<SliceState> {
        let typed = match state {
            Some(state) => Some(
                Arc::clone(state)
                    .into_any()
                    .downcast::<S>()
                    .map_err(|_| StoreError::SliceTypeMismatch(self.name.clone()))?,
            ),
            None => None,
        };

        let next = self.reduce(typed.as_ref(), action)?;
        Ok(next as SliceState)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Counter {
        value: i64,
    }

    fn increment(state: &Counter, _action: &Action) -> Result<Option<Counter>, ReducerError> {
        Ok(Some(Counter {
            value: state.value + 1,
        }))
    }

    fn add(state: &Counter, action: &Action) -> Result<Option<Counter>, ReducerError> {
        let amount: i64 = action.payload_as()?;
        if amount == 0 {
            return Ok(None);
        }
        Ok(Some(Counter {
            value: state.value + amount,
        }))
    }

    fn counter_slice() -> Slice<Counter> {
        Slice::builder("counter", Counter { value: 0 })
            .reducer("increment", increment)
            .reducer("add", add)
            .build()
    }

    #[test]
    fn test_actions_are_derived_from_reducers() {
        let slice = counter_slice();
        let actions = slice.actions();

        assert_eq!(
            actions.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["add", "increment"]
        );
        assert_eq!(actions["increment"].action_type(), "counter/increment");
        assert!(slice.action("add").is_some());
        assert!(slice.action("reset").is_none());
    }

    #[test]
    fn test_missing_state_starts_from_initial_state() {
        let slice = counter_slice();
        let state = slice.reduce(None, &Action::init()).unwrap();

        assert!(Arc::ptr_eq(&state, slice.initial_state()));
    }

    #[test]
    fn test_routed_action_produces_new_reference() {
        let slice = counter_slice();
        let before = Arc::new(Counter { value: 1 });
        let action = slice.action("increment").unwrap().empty();

        let after = slice.reduce(Some(&before), &action).unwrap();

        assert_eq!(*after, Counter { value: 2 });
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, Counter { value: 1 });
    }

    #[test]
    fn test_foreign_and_unknown_actions_keep_reference() {
        let slice = counter_slice();
        let before = Arc::new(Counter { value: 5 });

        for action in [
            Action::new("other/increment"),
            Action::new("counter/reset"),
            Action::new("counterincrement"),
        ] {
            let after = slice.reduce(Some(&before), &action).unwrap();
            assert!(Arc::ptr_eq(&before, &after), "{:?}", action);
        }
    }

    #[test]
    fn test_no_op_case_reducer_keeps_reference() {
        let slice = counter_slice();
        let before = Arc::new(Counter { value: 5 });
        let action = slice.action("add").unwrap().create(&0).unwrap();

        let after = slice.reduce(Some(&before), &action).unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_reducer_error_names_slice_and_operation() {
        let slice = counter_slice();
        let action = slice.action("add").unwrap().empty();

        match slice.reduce(None, &action) {
            Err(StoreError::Reducer {
                slice,
                operation,
                source: ReducerError::MissingPayload,
            }) => {
                assert_eq!(slice, "counter");
                assert_eq!(operation, "add");
            }
            other => panic!("expected reducer error, got {:?}", other),
        }
    }

    #[test]
    fn test_erased_reduce_rejects_foreign_state_type() {
        let slice = counter_slice();
        let foreign: SliceState = Arc::new("not a counter".to_string());

        let result = slice.reduce_erased(Some(&foreign), &Action::init());
        assert!(matches!(result, Err(StoreError::SliceTypeMismatch(name)) if name == "counter"));
    }
}
