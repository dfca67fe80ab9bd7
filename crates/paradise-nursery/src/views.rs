//! Text rendering for the storefront screens
//!
//! Views only read: they take a state snapshot and write lines.

use std::io::{self, Write};

use nursery_cart::selectors::{cart_item_count, cart_items, is_in_cart, total_cost};
use nursery_store::StateTree;

use crate::catalog::Catalog;

/// Navbar line with the cart badge
pub fn render_navbar<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "== Paradise Nursery ==  Plants | Cart ({})", count)
}

/// Product listing; plants already in the cart are marked as added
pub fn render_plants<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    state: &StateTree,
    symbol: &str,
) -> io::Result<()> {
    render_navbar(out, cart_item_count(state))?;
    for category in catalog.categories() {
        writeln!(out)?;
        writeln!(out, "{}", category.category)?;
        for plant in &category.plants {
            let price = match plant.price() {
                Ok(price) => price.with_symbol(symbol),
                Err(_) => plant.cost.to_string(),
            };
            let marker = if is_in_cart(plant.name.as_str())(state) {
                "[Added to Cart]"
            } else {
                "[Add to Cart]"
            };
            writeln!(out, "  {:<24} {:>10}  {}", plant.name, price, marker)?;
            if !plant.description.is_empty() {
                writeln!(out, "      {}", plant.description)?;
            }
        }
    }
    Ok(())
}

pub fn render_cart<W: Write>(out: &mut W, state: &StateTree, symbol: &str) -> io::Result<()> {
    let items = cart_items(state);
    render_navbar(out, items.len())?;
    if items.is_empty() {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    }

    for item in &items {
        let price = match item.price() {
            Ok(price) => price.with_symbol(symbol),
            Err(_) => item.cost.to_string(),
        };
        writeln!(out, "  {:<24} {:>10}", item.name, price)?;
    }
    render_total(out, state, symbol)
}

pub fn render_total<W: Write>(out: &mut W, state: &StateTree, symbol: &str) -> io::Result<()> {
    match total_cost(state) {
        Ok(total) => writeln!(out, "Total: {}", total.with_symbol(symbol)),
        Err(err) => writeln!(out, "Total unavailable: {}", err),
    }
}
