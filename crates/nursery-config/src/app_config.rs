//! Application configuration
//!
//! Configuration loaded from .paradise-nursery.toml file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from .paradise-nursery.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Product catalog (JSON). Defaults to `catalog.json` in the config directory
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Log level (error, warn, info, debug, trace). Overrides RUST_LOG when set
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            currency_symbol: default_currency_symbol(),
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Catalog location, falling back to the config directory
    pub fn catalog_path(&self) -> Result<PathBuf> {
        match &self.catalog_file {
            Some(path) => Ok(path.clone()),
            None => crate::paths::default_catalog_path(),
        }
    }
}
