use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::reducer::RootReducer;
use crate::state::StateTree;

/// Listener invoked after every committed dispatch
pub type Listener = Rc<dyn Fn()>;

/// Identifies one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) struct StoreInner {
    root: RootReducer,
    state: RefCell<Arc<StateTree>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl StoreInner {
    pub(crate) fn dispatch(&self, action: Action) -> Result<()> {
        action.validate()?;
        log::debug!("Action: {}", action.action_type());

        // the borrow ends before listeners run, so they can read state
        let next = {
            let current = self.state.borrow();
            self.root.reduce(Some(&**current), &action)?
        };
        *self.state.borrow_mut() = Arc::new(next);

        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
        Ok(())
    }

    pub(crate) fn snapshot(&self) -> Arc<StateTree> {
        Arc::clone(&self.state.borrow())
    }

    fn remove_listener(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(entry, _)| *entry != id);
        listeners.len() != before
    }
}

/// Store - holds the state tree and runs the dispatch/notify cycle
///
/// The store is a cheap handle: clones share the same state. It is
/// single-threaded (`!Send`); hosts that dispatch from several threads must
/// serialize access themselves.
///
/// Reducers must be free of side effects and must never dispatch. Listeners
/// may read state, subscribe, unsubscribe and dispatch; changes to the
/// listener list apply from the next notification pass.
///
/// # Example
/// ```ignore
/// let root = RootReducer::new().slice(cart::slice())?;
/// let store = Store::new(root)?;
/// let unsubscribe = store.subscribe(|| log::info!("state changed"));
/// store.dispatch(cart::add_item(&item)?)?;
/// unsubscribe.unsubscribe();
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Rc<StoreInner>,
}

impl Store {
    /// Build the store and its initial state tree
    ///
    /// Every slice reducer runs once with no prior state and the `@@INIT`
    /// action before the store is handed out.
    pub fn new(root: RootReducer) -> Result<Self> {
        let initial = root.reduce(None, &Action::init())?;
        log::debug!("Store initialized with slices: {:?}", root.keys().collect::<Vec<_>>());

        Ok(Self {
            inner: Rc::new(StoreInner {
                root,
                state: RefCell::new(Arc::new(initial)),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        })
    }

    /// Current snapshot
    ///
    /// Snapshots never change; a later dispatch installs a new one.
    pub fn state(&self) -> Arc<StateTree> {
        self.inner.snapshot()
    }

    /// Run an action through the root reducer and notify listeners
    ///
    /// Malformed action types and reducer errors are returned to the caller
    /// and leave the current state untouched; listeners are not notified.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.inner.dispatch(action)
    }

    /// Register a listener; every call creates an independent subscription
    #[must_use = "dropping the handle leaves the listener subscribed forever"]
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Unsubscribe {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Unsubscribe {
            store: Rc::downgrade(&self.inner),
            id,
            done: Cell::new(false),
        }
    }

    /// Write handle that can be passed down to consumers
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(Rc::downgrade(&self.inner))
    }

    pub(crate) fn downgrade(&self) -> Weak<StoreInner> {
        Rc::downgrade(&self.inner)
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Handle returned by [`Store::subscribe`]
///
/// Dropping it does not unsubscribe; call [`Unsubscribe::unsubscribe`].
pub struct Unsubscribe {
    store: Weak<StoreInner>,
    id: SubscriptionId,
    done: Cell<bool>,
}

impl Unsubscribe {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove the subscription. Calling it again is a no-op.
    ///
    /// Returns true only for the call that actually removed the listener.
    pub fn unsubscribe(&self) -> bool {
        if self.done.replace(true) {
            return false;
        }
        self.store
            .upgrade()
            .is_some_and(|store| store.remove_listener(self.id))
    }
}
