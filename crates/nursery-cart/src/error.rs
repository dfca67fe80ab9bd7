use thiserror::Error;

/// Errors raised while deriving values from the cart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartError {
    #[error("Invalid cost {cost:?} for item '{name}'")]
    InvalidCost { name: String, cost: String },

    #[error("Cart total exceeds the largest representable amount")]
    TotalOverflow,
}
