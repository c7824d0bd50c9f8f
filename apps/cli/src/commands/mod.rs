//! # Commands Module
//!
//! One handler per menu option. Each handler prompts for its fields, calls
//! the [`Inventory`](ferreteria_store::Inventory) and prints the outcome.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Console Commands                                │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   product.rs    │  │    stock.rs     │  │       report.rs         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │ • create_product│  │ • restock       │  │ • show_products         │ │
//! │  │ • update_price  │  │ • record_sale   │  │ • show_categories       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Handlers only request what they need: the console always, the         │
//! │  inventory mutably or immutably, the layout for the catalog.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Business failures ([`CoreError`]) are printed and swallowed here; only
//! console failures bubble up as `Err`.

pub mod product;
pub mod report;
pub mod stock;

use std::io::{BufRead, Write};

use tracing::warn;

use ferreteria_core::CoreError;

use crate::console::Console;
use crate::error::CliResult;

/// Prints a rejected operation and logs it.
fn report_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &CoreError,
) -> CliResult<()> {
    warn!(error = %err, "Operation rejected");
    console.notice(&format!("{}.", err))
}
