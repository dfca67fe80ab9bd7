//! Dispatcher handed to consumers that only need to write
//!
//! Views receive a `Dispatcher` instead of the whole store, so they can
//! request state changes without holding on to the state itself. It keeps a
//! weak reference: a dispatcher never keeps a store alive.

use std::rc::Weak;

use crate::action::Action;
use crate::error::{Result, StoreError};
use crate::store::StoreInner;

#[derive(Clone)]
pub struct Dispatcher {
    store: Weak<StoreInner>,
}

impl Dispatcher {
    pub(crate) fn new(store: Weak<StoreInner>) -> Self {
        Self { store }
    }

    /// Dispatch an action to the store this dispatcher was created from
    pub fn dispatch(&self, action: Action) -> Result<()> {
        let store = self.store.upgrade().ok_or(StoreError::StoreDropped)?;
        store.dispatch(action)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("connected", &(self.store.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReducerError;
    use crate::reducer::RootReducer;
    use crate::slice::Slice;
    use crate::store::Store;
    use serde::Serialize;

    #[derive(Debug, Clone, Serialize)]
    struct Hits(u32);

    fn hit(state: &Hits, _action: &Action) -> Result<Option<Hits>, ReducerError> {
        Ok(Some(Hits(state.0 + 1)))
    }

    fn store() -> Store {
        let slice = Slice::builder("hits", Hits(0)).reducer("hit", hit).build();
        Store::new(RootReducer::new().slice(slice).unwrap()).unwrap()
    }

    #[test]
    fn test_dispatcher_reaches_store() {
        let store = store();
        let dispatcher = store.dispatcher();

        dispatcher.dispatch(Action::new("hits/hit")).unwrap();
        dispatcher.clone().dispatch(Action::new("hits/hit")).unwrap();

        assert_eq!(store.state().slice::<Hits>("hits").map(|h| h.0), Some(2));
    }

    #[test]
    fn test_dispatcher_does_not_keep_store_alive() {
        let store = store();
        let dispatcher = store.dispatcher();
        drop(store);

        let result = dispatcher.dispatch(Action::new("hits/hit"));
        assert!(matches!(result, Err(StoreError::StoreDropped)));
    }
}
