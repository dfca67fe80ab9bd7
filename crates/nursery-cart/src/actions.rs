//! Cart actions
//!
//! Every operation of the cart slice has one action creator. Types are
//! `"cart/<operation>"`, with operation names in camelCase.

use nursery_store::{Action, ActionCreator, StoreError};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::domain_models::{Item, ItemKey};

/// Name of the cart slice, and prefix of every cart action type
pub const CART_SLICE: &str = "cart";

/// Operations the cart slice understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum CartOperation {
    /// Append an item unless one with the same name is present
    AddItem,
    /// Remove the item with the given name
    RemoveItem,
    /// Empty the cart
    ClearCart,
}

impl CartOperation {
    pub fn creator(self) -> ActionCreator {
        let operation: &'static str = self.into();
        ActionCreator::new(CART_SLICE, operation)
    }
}

pub fn add_item(item: &Item) -> Result<Action, StoreError> {
    CartOperation::AddItem.creator().create(item)
}

pub fn remove_item(name: impl Into<String>) -> Result<Action, StoreError> {
    CartOperation::RemoveItem.creator().create(&ItemKey::new(name))
}

pub fn clear_cart() -> Action {
    CartOperation::ClearCart.creator().empty()
}
