//! Product catalog
//!
//! The catalog is static data supplied from outside: a JSON array of
//! categories, each listing its plants.
//!
//! ```json
//! [{ "category": "Air Purifying Plants",
//!    "plants": [{ "name": "Snake Plant", "image": "...", "description": "...", "cost": "$15" }] }]
//! ```

use anyhow::{Context, Result};
use nursery_cart::Item;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub category: String,
    pub plants: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        log::info!(
            "Loaded {} plants in {} categories from {}",
            catalog.plants().count(),
            catalog.categories.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(content)?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn plants(&self) -> impl Iterator<Item = &Item> {
        self.categories.iter().flat_map(|c| c.plants.iter())
    }

    /// Find a plant by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.plants().find(|plant| plant.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) const CATALOG: &str = r#"[
        {
            "category": "Air Purifying Plants",
            "plants": [
                { "name": "Snake Plant", "image": "snake.jpg", "description": "Produces oxygen at night", "cost": "$15" },
                { "name": "Spider Plant", "image": "spider.jpg", "description": "Filters formaldehyde", "cost": "$12" }
            ]
        },
        {
            "category": "Aromatic Fragrant Plants",
            "plants": [
                { "name": "Lavender", "image": "lavender.jpg", "description": "Calming scent", "cost": 20 }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(
            catalog.plants().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["Snake Plant", "Spider Plant", "Lavender"]
        );
    }

    #[test]
    fn test_find_ignores_case() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(
            catalog.find("snake plant").map(|p| p.description.as_str()),
            Some("Produces oxygen at night")
        );
        assert!(catalog.find("Cactus").is_none());
    }

    #[test]
    fn test_invalid_catalog() {
        assert!(Catalog::from_json(r#"{ "plants": [] }"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
