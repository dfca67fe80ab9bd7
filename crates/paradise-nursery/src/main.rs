use anyhow::Result;
use std::io;
use std::path::PathBuf;

mod app;
mod catalog;
mod commands;
mod logger;
mod state;
mod views;

use app::App;
use catalog::Catalog;
use nursery_config::AppConfig;
use nursery_store::{RootReducer, Store};

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting paradise-nursery, logging to {}", log_file.display());

    let config = AppConfig::load();
    let level = logger::apply_level(config.log_level.as_deref());
    log::debug!("Log level {}", level);

    // First argument overrides the configured catalog
    let catalog_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => config.catalog_path()?,
    };
    let catalog = Catalog::load(&catalog_path)?;

    let store = Store::new(RootReducer::new().slice(nursery_cart::slice())?)?;
    let mut app = App::new(store, catalog, config.currency_symbol.as_str());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = app.run(stdin.lock(), &mut stdout);

    if let Err(err) = &result {
        log::error!("Storefront stopped: {:#}", err);
    }
    log::info!("Exiting paradise-nursery");
    result
}
