//! # ferreteria-core: Pure Business Logic for the Ferretería Inventory
//!
//! This crate holds the domain types and every pure calculation of the
//! inventory tool. It never touches the console, the file system or any
//! shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ferretería Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (menu loop)                         │   │
//! │  │    prompt ──► parse ──► dispatch ──► print                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ferreteria-store (Inventory)                    │   │
//! │  │        product table + category set, all mutations              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ ferreteria-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  report   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  tables   │  │  coercion │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SaleReceipt)
//! - [`money`] - Prices in integer cents, parsed from decimal text
//! - [`error`] - Domain error types
//! - [`validation`] - Coercion of raw console text into typed values
//! - [`report`] - Fixed-width product table and category listing
//!
//! ## Example Usage
//!
//! ```rust
//! use ferreteria_core::money::Money;
//!
//! let price: Money = "1500".parse().unwrap();
//! assert_eq!(price.cents(), 150_000);
//! assert_eq!(price.to_string(), "$1500.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::TableLayout;
pub use types::*;
