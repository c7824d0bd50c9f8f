//! # Inventory
//!
//! The store object: one product table plus the category set derived from it.
//! Constructed once at startup and handed by `&mut` to every operation.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation        Preconditions                  Effect                 │
//! │  ───────────────  ─────────────────────────────  ────────────────────── │
//! │  create_product   code not taken                 insert + add category  │
//! │  restock          code exists                    stock += qty           │
//! │  update_price     code exists                    price = new_price      │
//! │  record_sale      code exists, stock >= qty      stock -= qty           │
//! │                                                                         │
//! │  Any failed precondition → Err(CoreError), state untouched              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};

use ferreteria_core::report::{self, TableLayout};
use ferreteria_core::{CoreError, CoreResult, Money, NewProduct, Product, SaleReceipt};

use crate::repository::category::CategorySet;
use crate::repository::product::ProductRepository;

/// Owner of all inventory state.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: ProductRepository,
    categories: CategorySet,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Read access to the product table.
    pub fn products(&self) -> &ProductRepository {
        &self.products
    }

    /// Read access to the category set.
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Registers a new product and records its category.
    ///
    /// ## Returns
    /// * `Ok(&Product)` - the stored product
    /// * `Err(CoreError::DuplicateCode)` - code taken; nothing changes,
    ///   the category set included
    pub fn create_product(&mut self, new: NewProduct) -> CoreResult<&Product> {
        let product = self.products.insert(Product::from_new(new, Utc::now()))?;
        if self.categories.insert(&product.category) {
            debug!(category = %product.category, "New category registered");
        }

        info!(code = product.code, name = %product.name, "Product created");
        Ok(product)
    }

    /// Adds `quantity` units to a product's stock.
    ///
    /// The sign of `quantity` is not checked; a negative value lowers stock.
    pub fn restock(&mut self, code: i64, quantity: i64) -> CoreResult<&Product> {
        let product = self.products.update_stock(code, quantity, Utc::now())?;
        info!(code, quantity, stock = product.stock, "Stock added");
        Ok(product)
    }

    /// Replaces a product's price.
    pub fn update_price(&mut self, code: i64, price: Money) -> CoreResult<&Product> {
        let product = self.products.update_price(code, price, Utc::now())?;
        info!(code, price = %product.price, "Price updated");
        Ok(product)
    }

    /// Sells `quantity` units of a product.
    ///
    /// ## User Workflow
    /// ```text
    /// Registrar Venta (code 1, qty 3)
    ///      │
    ///      ▼
    /// lookup ──► missing? ──► ProductNotFound(1)
    ///      │
    ///      ▼
    /// stock < qty? ──► InsufficientStock { available, requested }
    ///      │
    ///      ▼
    /// stock -= qty ──► SaleReceipt { total = price × qty (if it fits), remaining_stock }
    /// ```
    pub fn record_sale(&mut self, code: i64, quantity: i64) -> CoreResult<SaleReceipt> {
        let product = self
            .products
            .get(code)
            .ok_or(CoreError::ProductNotFound(code))?;

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                code,
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        let unit_price = product.price;
        let delta = quantity
            .checked_neg()
            .ok_or(CoreError::StockOverflow { code })?;

        let now = Utc::now();
        let product = self.products.update_stock(code, delta, now)?;

        let total = unit_price.checked_mul_quantity(quantity);
        if total.is_none() {
            warn!(code, quantity, price = %unit_price, "Sale total not representable");
        }
        info!(code, quantity, stock = product.stock, ?total, "Sale recorded");

        Ok(SaleReceipt {
            code,
            name: product.name.clone(),
            quantity,
            unit_price,
            total,
            remaining_stock: product.stock,
            sold_at: now,
        })
    }

    /// Renders the catalog table (see [`report::render_product_table`]).
    pub fn catalog_lines(&self, layout: &TableLayout) -> Vec<String> {
        report::render_product_table(self.products.iter(), layout)
    }

    /// Renders the category list (see [`report::render_categories`]).
    pub fn category_lines(&self) -> Vec<String> {
        report::render_categories(self.categories.iter())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
