//! # Product Repository
//!
//! The product table: products keyed by their operator-supplied code.
//!
//! ## Stock Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                            │
//! │                                                                     │
//! │  Every stock change is a DELTA applied to the current value:        │
//! │     restock 5  →  update_stock(code, +5)                            │
//! │     sell 3     →  update_stock(code, -3)                            │
//! │                                                                     │
//! │  The delta is added with checked arithmetic; on overflow the        │
//! │  product is left untouched and StockOverflow is returned.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use ferreteria_core::{CoreError, CoreResult, Money, Product};

/// In-memory product table.
///
/// ## Usage
/// ```rust,ignore
/// let mut repo = ProductRepository::new();
/// repo.insert(product)?;
/// repo.update_stock(1, -3, Utc::now())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductRepository {
    products: BTreeMap<i64, Product>,
}

impl ProductRepository {
    /// Creates an empty table.
    pub fn new() -> Self {
        ProductRepository::default()
    }

    /// Gets a product by code.
    pub fn get(&self, code: i64) -> Option<&Product> {
        self.products.get(&code)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(&Product)` - the stored product
    /// * `Err(CoreError::DuplicateCode)` - code already taken; table unchanged
    pub fn insert(&mut self, product: Product) -> CoreResult<&Product> {
        debug!(code = product.code, name = %product.name, "Inserting product");

        match self.products.entry(product.code) {
            Entry::Occupied(_) => Err(CoreError::DuplicateCode { code: product.code }),
            Entry::Vacant(slot) => Ok(slot.insert(product)),
        }
    }

    /// Applies a stock delta (negative for sales, positive for restocking).
    ///
    /// ## Returns
    /// * `Ok(&Product)` - product after the update
    /// * `Err(CoreError::ProductNotFound)` - unknown code
    /// * `Err(CoreError::StockOverflow)` - result does not fit in `i64`
    pub fn update_stock(
        &mut self,
        code: i64,
        delta: i64,
        now: DateTime<Utc>,
    ) -> CoreResult<&Product> {
        debug!(code, delta, "Updating stock");

        let product = self
            .products
            .get_mut(&code)
            .ok_or(CoreError::ProductNotFound(code))?;

        product.stock = product
            .stock
            .checked_add(delta)
            .ok_or(CoreError::StockOverflow { code })?;
        product.updated_at = now;

        Ok(product)
    }

    /// Replaces the price unconditionally.
    pub fn update_price(
        &mut self,
        code: i64,
        price: Money,
        now: DateTime<Utc>,
    ) -> CoreResult<&Product> {
        debug!(code, price = %price, "Updating price");

        let product = self
            .products
            .get_mut(&code)
            .ok_or(CoreError::ProductNotFound(code))?;

        product.price = price;
        product.updated_at = now;

        Ok(product)
    }

    /// Iterates products in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ferreteria_core::NewProduct;

    fn product(code: i64, stock: i64) -> Product {
        Product::from_new(
            NewProduct {
                code,
                name: format!("Producto {code}"),
                category: "General".to_string(),
                price: Money::from_cents(1000),
                stock,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_insert_rejects_duplicate_and_keeps_original() {
        let mut repo = ProductRepository::new();
        repo.insert(product(1, 10)).unwrap();

        let mut clash = product(1, 99);
        clash.name = "Otro".to_string();
        let err = repo.insert(clash).unwrap_err();

        assert_eq!(err, CoreError::DuplicateCode { code: 1 });
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(1).unwrap().stock, 10);
        assert_eq!(repo.get(1).unwrap().name, "Producto 1");
    }

    #[test]
    fn test_update_stock_applies_delta_and_touches_timestamp() {
        let mut repo = ProductRepository::new();
        let created = repo.insert(product(1, 10)).unwrap().updated_at;

        let later = created + chrono::Duration::seconds(5);
        let updated = repo.update_stock(1, -4, later).unwrap();

        assert_eq!(updated.stock, 6);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.created_at, created);
    }

    #[test]
    fn test_update_stock_overflow_leaves_product_untouched() {
        let mut repo = ProductRepository::new();
        repo.insert(product(1, i64::MAX)).unwrap();

        let err = repo.update_stock(1, 1, Utc::now()).unwrap_err();
        assert_eq!(err, CoreError::StockOverflow { code: 1 });
        assert_eq!(repo.get(1).unwrap().stock, i64::MAX);
    }

    #[test]
    fn test_unknown_code() {
        let mut repo = ProductRepository::new();
        assert_eq!(
            repo.update_stock(5, 1, Utc::now()).unwrap_err(),
            CoreError::ProductNotFound(5)
        );
        assert_eq!(
            repo.update_price(5, Money::from_cents(0), Utc::now()).unwrap_err(),
            CoreError::ProductNotFound(5)
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn test_iter_ascending() {
        let mut repo = ProductRepository::new();
        for code in [30, -1, 7] {
            repo.insert(product(code, 0)).unwrap();
        }
        let codes: Vec<i64> = repo.iter().map(|p| p.code).collect();
        assert_eq!(codes, vec![-1, 7, 30]);
        assert!(repo.get(7).is_some());
        assert!(repo.get(8).is_none());
    }
}
