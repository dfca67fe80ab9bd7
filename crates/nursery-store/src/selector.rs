//! Selector bindings - the read side of the store
//!
//! A binding owns one subscription. It computes its selector immediately,
//! then recomputes it after every dispatch and signals the consumer with the
//! new value. There is no equality short-circuit: every committed dispatch
//! re-signals every live binding.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::state::StateTree;
use crate::store::{Store, Unsubscribe};

/// A live selector subscription
///
/// Dropping the binding (or calling [`Binding::unsubscribe`]) removes its
/// store subscription exactly once.
pub struct Binding<T> {
    value: Rc<RefCell<Rc<T>>>,
    subscription: Unsubscribe,
}

impl<T> Binding<T> {
    /// Latest selected value
    pub fn get(&self) -> Rc<T> {
        Rc::clone(&self.value.borrow())
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl<T> Drop for Binding<T> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.value.borrow())
            .field("subscription", &self.subscription.id())
            .finish()
    }
}

impl Store {
    /// Bind a selector to this store
    ///
    /// `on_change` receives every recomputed value, in dispatch order. If it
    /// dispatches, the nested value is queued and delivered once the outer
    /// call returns.
    pub fn use_selector<T, S, F>(&self, selector: S, on_change: F) -> Binding<T>
    where
        T: 'static,
        S: Fn(&StateTree) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        let value = Rc::new(RefCell::new(Rc::new(selector(&self.state()))));
        let on_change = RefCell::new(on_change);
        let pending: RefCell<VecDeque<Rc<T>>> = RefCell::new(VecDeque::new());
        let store = self.downgrade();

        let subscription = {
            let value = Rc::clone(&value);
            self.subscribe(move || {
                let Some(store) = store.upgrade() else {
                    return;
                };
                let next = Rc::new(selector(&store.snapshot()));
                *value.borrow_mut() = Rc::clone(&next);
                pending.borrow_mut().push_back(next);

                // re-entered from on_change: the outer call drains the queue
                let Ok(mut on_change) = on_change.try_borrow_mut() else {
                    log::trace!("Queued selector value from nested dispatch");
                    return;
                };
                loop {
                    let queued = pending.borrow_mut().pop_front();
                    let Some(next) = queued else {
                        break;
                    };
                    (*on_change)(&next);
                }
            })
        };

        Binding {
            value,
            subscription,
        }
    }

    /// Bind a selector without a change handler; read it with [`Binding::get`]
    pub fn select<T, S>(&self, selector: S) -> Binding<T>
    where
        T: 'static,
        S: Fn(&StateTree) -> T + 'static,
    {
        self.use_selector(selector, |_| {})
    }

    /// Write hook: the dispatcher consumers use to request changes
    pub fn use_dispatch(&self) -> crate::dispatcher::Dispatcher {
        self.dispatcher()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::error::ReducerError;
    use crate::reducer::RootReducer;
    use crate::slice::Slice;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Words {
        list: Vec<String>,
    }

    fn push(state: &Words, action: &Action) -> Result<Option<Words>, ReducerError> {
        let word: String = action.payload_as()?;
        let mut list = state.list.clone();
        list.push(word);
        Ok(Some(Words { list }))
    }

    fn touch(_state: &Words, _action: &Action) -> Result<Option<Words>, ReducerError> {
        Ok(None)
    }

    fn store() -> Store {
        let slice = Slice::builder("words", Words { list: Vec::new() })
            .reducer("push", push)
            .reducer("touch", touch)
            .build();
        Store::new(RootReducer::new().slice(slice).unwrap()).unwrap()
    }

    fn word_count(state: &StateTree) -> usize {
        state.slice::<Words>("words").map_or(0, |w| w.list.len())
    }

    fn push_word(word: &str) -> Action {
        Action::with_payload("words/push", &word).unwrap()
    }

    #[test]
    fn test_binding_computes_immediately() {
        let store = store();
        store.dispatch(push_word("fern")).unwrap();

        let binding = store.select(word_count);
        assert_eq!(*binding.get(), 1);
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_binding_signals_on_every_dispatch_even_if_equal() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _binding = {
            let seen = Rc::clone(&seen);
            store.use_selector(word_count, move |count| seen.borrow_mut().push(*count))
        };

        store.dispatch(push_word("moss")).unwrap();
        store.dispatch(Action::new("words/touch")).unwrap();
        store.dispatch(Action::new("other/anything")).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 1, 1]);
    }

    #[test]
    fn test_drop_unsubscribes_once() {
        let store = store();
        let binding = store.select(word_count);
        let other = store.select(word_count);
        assert_eq!(store.listener_count(), 2);

        binding.unsubscribe();
        assert_eq!(store.listener_count(), 1);

        drop(other);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_change_handler_may_dispatch() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let dispatcher = store.use_dispatch();

        let binding = {
            let seen = Rc::clone(&seen);
            store.use_selector(word_count, move |count| {
                seen.borrow_mut().push(*count);
                if *count == 1 {
                    dispatcher.dispatch(push_word("echo")).unwrap();
                }
            })
        };

        store.dispatch(push_word("ivy")).unwrap();

        // the nested value is delivered after the outer call returns
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(*binding.get(), 2);
        assert_eq!(word_count(&store.state()), 2);
    }

    #[test]
    fn test_every_nested_dispatch_is_signalled_in_order() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let dispatcher = store.use_dispatch();

        let _binding = {
            let seen = Rc::clone(&seen);
            store.use_selector(word_count, move |count| {
                seen.borrow_mut().push(*count);
                if *count == 1 {
                    dispatcher.dispatch(push_word("fern")).unwrap();
                    dispatcher.dispatch(push_word("moss")).unwrap();
                }
            })
        };

        store.dispatch(push_word("ivy")).unwrap();
        store.dispatch(Action::new("words/touch")).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 3, 3]);
    }
}
