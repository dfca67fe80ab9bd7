//! Storefront loop
//!
//! Reads commands line by line, turns them into cart actions and renders the
//! current screen. Errors are reported to the user and the loop continues.

use anyhow::{anyhow, bail, Result};
use std::io::{BufRead, Write};

use nursery_cart::selectors::{cart_item_count, cart_items, is_in_cart};
use nursery_cart::{add_item, clear_cart, remove_item};
use nursery_store::{Binding, Dispatcher, Store};

use crate::catalog::Catalog;
use crate::commands::Command;
use crate::state::{Screen, ViewState};
use crate::views;

pub struct App {
    store: Store,
    dispatch: Dispatcher,
    catalog: Catalog,
    currency_symbol: String,
    view: ViewState,
    badge: Binding<usize>,
}

impl App {
    pub fn new(store: Store, catalog: Catalog, currency_symbol: impl Into<String>) -> Self {
        let dispatch = store.use_dispatch();
        let badge = store.use_selector(cart_item_count, |count| {
            log::debug!("Cart badge is now {}", count);
        });
        Self {
            store,
            dispatch,
            catalog,
            currency_symbol: currency_symbol.into(),
            view: ViewState::new(),
            badge,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.view.screen
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to Paradise Nursery! Type 'help' for commands.")?;
        self.render(out)?;

        let mut lines = input.lines();
        while self.view.running {
            write!(out, "[cart: {}]> ", self.badge.get())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                log::debug!("Input closed");
                break;
            };
            let line = line?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            };

            log::debug!("Command: {:?}", command);
            if let Err(err) = self.handle(command, out) {
                log::warn!("Command failed: {:#}", err);
                writeln!(out, "Error: {:#}", err)?;
            }
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::ShowPlants => {
                self.view.navigate(Screen::Plants);
                self.render(out)?;
            }
            Command::ShowCart => {
                self.view.navigate(Screen::Cart);
                self.render(out)?;
            }
            Command::Add(name) => {
                let plant = self
                    .catalog
                    .find(&name)
                    .ok_or_else(|| anyhow!("No plant named '{}' in the catalog", name))?;
                if is_in_cart(plant.name.as_str())(&self.store.state()) {
                    bail!("{} is already in the cart", plant.name);
                }
                self.dispatch.dispatch(add_item(plant)?)?;
                writeln!(out, "Added {} to the cart", plant.name)?;
            }
            Command::Remove(name) => {
                let item = cart_items(&self.store.state())
                    .into_iter()
                    .find(|item| item.name.eq_ignore_ascii_case(&name))
                    .ok_or_else(|| anyhow!("'{}' is not in the cart", name))?;
                self.dispatch.dispatch(remove_item(item.name.as_str())?)?;
                writeln!(out, "Removed {} from the cart", item.name)?;
                if self.view.screen == Screen::Cart {
                    self.render(out)?;
                }
            }
            Command::Clear => {
                self.dispatch.dispatch(clear_cart())?;
                writeln!(out, "Cart cleared")?;
            }
            Command::Total => {
                views::render_total(out, &self.store.state(), &self.currency_symbol)?;
            }
            Command::Help => {
                writeln!(out, "{}", Command::help())?;
            }
            Command::Quit => self.view.quit(),
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = self.store.state();
        match self.view.screen {
            Screen::Plants => {
                views::render_plants(out, &self.catalog, &state, &self.currency_symbol)?
            }
            Screen::Cart => views::render_cart(out, &state, &self.currency_symbol)?,
        }
        Ok(())
    }
}
