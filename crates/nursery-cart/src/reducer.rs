use nursery_store::{Action, CaseReducer, ReducerError, Slice};
use strum::IntoEnumIterator;

use crate::actions::{CartOperation, CART_SLICE};
use crate::domain_models::{Item, ItemKey};
use crate::state::CartState;

/// Build the cart slice with one case reducer per [`CartOperation`]
pub fn slice() -> Slice<CartState> {
    CartOperation::iter().fold(
        Slice::builder(CART_SLICE, CartState::default()),
        |builder, operation| builder.reducer(operation.to_string(), case_reducer(operation)),
    )
    .build()
}

fn case_reducer(operation: CartOperation) -> CaseReducer<CartState> {
    match operation {
        CartOperation::AddItem => add_item,
        CartOperation::RemoveItem => remove_item,
        CartOperation::ClearCart => clear_cart,
    }
}

/// Append the item unless one with the same name is already in the cart
///
/// Duplicates are not merged: the existing entry is kept as is.
fn add_item(state: &CartState, action: &Action) -> Result<Option<CartState>, ReducerError> {
    let item: Item = action.payload_as()?;

    if state.contains(&item.name) {
        log::warn!("Item '{}' is already in the cart", item.name);
        return Ok(None);
    }

    log::debug!("Adding '{}' to the cart", item.name);
    let mut items = state.items.clone();
    items.push(item);
    Ok(Some(CartState { items }))
}

fn remove_item(state: &CartState, action: &Action) -> Result<Option<CartState>, ReducerError> {
    let key: ItemKey = action.payload_as()?;

    if !state.contains(&key.name) {
        log::debug!("Item '{}' is not in the cart", key.name);
        return Ok(None);
    }

    let items = state
        .items
        .iter()
        .filter(|item| item.name != key.name)
        .cloned()
        .collect();
    Ok(Some(CartState { items }))
}

fn clear_cart(state: &CartState, _action: &Action) -> Result<Option<CartState>, ReducerError> {
    if state.is_empty() {
        return Ok(None);
    }
    Ok(Some(CartState::default()))
}
