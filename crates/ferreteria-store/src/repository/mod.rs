//! # Repository Module
//!
//! In-memory collections behind the [`Inventory`](crate::Inventory).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inventory operation                                                    │
//! │       │                                                                 │
//! │       │  inventory.products().get(code)                                 │
//! │       ▼                                                                 │
//! │  ProductRepository                                                      │
//! │  ├── get(&self, code)                                                   │
//! │  ├── insert(&mut self, product)     ← rejects duplicate codes           │
//! │  ├── update_stock(&mut self, code, delta)                               │
//! │  └── update_price(&mut self, code, price)                               │
//! │                                                                         │
//! │  CategorySet                                                            │
//! │  └── insert(&mut self, name)        ← grows only                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both are ordered collections, so iteration (and therefore every report)
//! is deterministic.
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product table keyed by code
//! - [`CategorySet`](category::CategorySet) - Distinct category names

pub mod category;
pub mod product;
