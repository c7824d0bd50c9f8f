//! # Domain Types
//!
//! Core domain types of the inventory.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │   │     Product     │   │   SaleReceipt   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │──►│  code (key)     │──►│  code, name     │       │
//! │  │  name           │   │  name           │   │  quantity       │       │
//! │  │  category       │   │  category       │   │  unit_price     │       │
//! │  │  price          │   │  price (Money)  │   │  total          │       │
//! │  │  stock          │   │  stock          │   │  remaining      │       │
//! │  └─────────────────┘   │  timestamps     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! The operator supplies `code`; it is never generated. It is the only key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// Input for registering a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub code: i64,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub stock: i64,
}

/// A product registered in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Operator-supplied unique code.
    pub code: i64,

    /// Display name. May be longer than a report column.
    pub name: String,

    /// Free-form category label.
    pub category: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand.
    pub stock: i64,

    /// When the product was registered.
    pub created_at: DateTime<Utc>,

    /// When the product was last restocked, repriced or sold.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product from creation input, stamping both timestamps.
    pub fn from_new(new: NewProduct, now: DateTime<Utc>) -> Self {
        Product {
            code: new.code,
            name: new.name,
            category: new.category,
            price: new.price,
            stock: new.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Sale Receipt
// =============================================================================

/// Outcome of a successful sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    pub code: i64,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// `unit_price × quantity`, or `None` when the product does not fit in
    /// an `i64` of cents. The sale itself still goes through.
    pub total: Option<Money>,
    /// Stock left after the sale.
    pub remaining_stock: i64,
    pub sold_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
