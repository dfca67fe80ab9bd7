//! Cart selectors
//!
//! Derived values are computed from the state tree on every read; nothing
//! here is cached in the cart slice.

use nursery_store::StateTree;

use crate::actions::CART_SLICE;
use crate::domain_models::{Item, Money};
use crate::error::CartError;
use crate::state::CartState;

/// The cart slice, if the store has one
pub fn cart(state: &StateTree) -> Option<&CartState> {
    state.slice::<CartState>(CART_SLICE)
}

pub fn cart_items(state: &StateTree) -> Vec<Item> {
    cart(state).map(|cart| cart.items.clone()).unwrap_or_default()
}

/// Number of items in the cart (navbar badge)
pub fn cart_item_count(state: &StateTree) -> usize {
    cart(state).map_or(0, CartState::len)
}

/// Selector telling whether an item is already in the cart
pub fn is_in_cart(name: impl Into<String>) -> impl Fn(&StateTree) -> bool {
    let name = name.into();
    move |state| cart(state).is_some_and(|cart| cart.contains(&name))
}

/// Sum of all item costs, to the cent
pub fn total_cost(state: &StateTree) -> Result<Money, CartError> {
    cart(state).map_or(Ok(Money::zero()), cart_total)
}

/// Sum of all item costs of a cart slice
pub fn cart_total(cart: &CartState) -> Result<Money, CartError> {
    cart.items.iter().try_fold(Money::zero(), |total, item| {
        total
            .checked_add(item.price()?)
            .ok_or(CartError::TotalOverflow)
    })
}
