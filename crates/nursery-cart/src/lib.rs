//! Shopping cart for the Paradise Nursery storefront
//!
//! This crate provides:
//! - Domain models (`Item`, `Cost`, `Money`)
//! - The `cart` slice and its action creators
//! - Selectors deriving the item count, membership and total cost

pub mod actions;
pub mod domain_models;
pub mod error;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use actions::{add_item, clear_cart, remove_item, CartOperation, CART_SLICE};
pub use domain_models::{Cost, Item, ItemKey, Money};
pub use error::CartError;
pub use reducer::slice;
pub use state::CartState;
