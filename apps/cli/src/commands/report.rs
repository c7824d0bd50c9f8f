//! # Report Commands
//!
//! Menu options 5 (Mostrar Productos) and 6 (Mostrar Categorías).
//! Rendering lives in `ferreteria_core::report`; these only print.

use std::io::{BufRead, Write};

use ferreteria_core::TableLayout;
use ferreteria_store::Inventory;

use crate::console::Console;
use crate::error::CliResult;

/// Prints the catalog table.
pub fn show_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
    layout: &TableLayout,
) -> CliResult<()> {
    console.blank()?;
    for line in inventory.catalog_lines(layout) {
        console.line(&line)?;
    }
    Ok(())
}

/// Prints the category list (or the "no categories" message).
pub fn show_categories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> CliResult<()> {
    console.blank()?;
    for line in inventory.category_lines() {
        console.line(&line)?;
    }
    console.blank()
}
