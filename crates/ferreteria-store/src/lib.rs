//! # ferreteria-store: In-Memory Inventory Store
//!
//! This crate owns every piece of mutable inventory state: the product
//! table and the category set. Nothing outlives the process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ferretería Data Flow                               │
//! │                                                                         │
//! │  Menu command (Registrar Venta)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  ferreteria-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐       ┌───────────────────────────┐   │   │
//! │  │   │     Inventory      │       │       Repositories        │   │   │
//! │  │   │  (inventory.rs)    │       │                           │   │   │
//! │  │   │                    │──────►│ ProductRepository         │   │   │
//! │  │   │ create_product     │       │   BTreeMap<code, Product> │   │   │
//! │  │   │ restock            │       │                           │   │   │
//! │  │   │ update_price       │──────►│ CategorySet               │   │   │
//! │  │   │ record_sale        │       │   BTreeSet<String>        │   │   │
//! │  │   └────────────────────┘       └───────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`inventory`] - The store object and its four mutating operations
//! - [`repository`] - Product table and category set
//!
//! ## Usage
//!
//! ```rust
//! use ferreteria_core::{Money, NewProduct};
//! use ferreteria_store::Inventory;
//!
//! let mut inventory = Inventory::new();
//! inventory.create_product(NewProduct {
//!     code: 1,
//!     name: "Martillo".to_string(),
//!     category: "Herramientas".to_string(),
//!     price: Money::from_cents(150_000),
//!     stock: 5,
//! })?;
//!
//! let receipt = inventory.record_sale(1, 3)?;
//! assert_eq!(receipt.remaining_stock, 2);
//! # Ok::<(), ferreteria_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod inventory;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use inventory::Inventory;
pub use repository::category::CategorySet;
pub use repository::product::ProductRepository;
