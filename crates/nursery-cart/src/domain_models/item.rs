//! Item model
//!
//! A plant as offered by the catalog and stored in the cart. The name is the
//! item's identity within the cart.

use serde::{Deserialize, Serialize};

use super::Money;
use crate::error::CartError;

/// A catalog item in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique key within the cart
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub cost: Cost,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: impl Into<Cost>) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            description: String::new(),
            cost: cost.into(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parsed cost of this item
    pub fn price(&self) -> Result<Money, CartError> {
        self.cost.to_money().ok_or_else(|| CartError::InvalidCost {
            name: self.name.clone(),
            cost: self.cost.to_string(),
        })
    }
}

/// Identifies an item by name; the payload of `removeItem`
///
/// Extra fields are ignored, so a full [`Item`] is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: String,
}

impl ItemKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&Item> for ItemKey {
    fn from(item: &Item) -> Self {
        Self::new(item.name.clone())
    }
}

/// Item cost as delivered by the catalog: a number or a decimal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Number(f64),
    Text(String),
}

impl Cost {
    pub fn to_money(&self) -> Option<Money> {
        match self {
            Cost::Number(amount) => Money::from_f64(*amount),
            Cost::Text(text) => Money::parse(text),
        }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Number(amount) => write!(f, "{}", amount),
            Cost::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for Cost {
    fn from(text: &str) -> Self {
        Cost::Text(text.to_string())
    }
}

impl From<String> for Cost {
    fn from(text: String) -> Self {
        Cost::Text(text)
    }
}

impl From<f64> for Cost {
    fn from(amount: f64) -> Self {
        Cost::Number(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_cost_accepts_string_or_number() {
        let text: Item = serde_json::from_value(json!({
            "name": "Snake Plant",
            "image": "snake.jpg",
            "description": "Produces oxygen at night",
            "cost": "15"
        }))
        .unwrap();
        assert_eq!(text.cost, Cost::Text("15".to_string()));
        assert_eq!(text.price().unwrap(), Money::from_cents(1500));

        let number: Item = serde_json::from_value(json!({ "name": "Aloe", "cost": 12.5 })).unwrap();
        assert_eq!(number.cost, Cost::Number(12.5));
        assert_eq!(number.price().unwrap(), Money::from_cents(1250));
        assert!(number.image.is_empty());
    }

    #[test]
    fn test_invalid_cost_names_the_item() {
        let item = Item::new("Mystery", "free");
        match item.price() {
            Err(CartError::InvalidCost { name, cost }) => {
                assert_eq!(name, "Mystery");
                assert_eq!(cost, "free");
            }
            other => panic!("expected InvalidCost, got {:?}", other),
        }
    }

    #[test]
    fn test_item_key_ignores_extra_fields() {
        let key: ItemKey = serde_json::to_value(Item::new("Fern", "8"))
            .and_then(serde_json::from_value)
            .unwrap();
        assert_eq!(key, ItemKey::new("Fern"));
    }
}
