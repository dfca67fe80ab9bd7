//! Domain models for the cart

mod item;
mod money;

pub use item::{Cost, Item, ItemKey};
pub use money::Money;
