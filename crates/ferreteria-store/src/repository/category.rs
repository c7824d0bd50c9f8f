//! # Category Set
//!
//! Distinct category names seen across all registered products.

use std::collections::BTreeSet;

/// Set of category names.
///
/// ## Invariants
/// - Grows monotonically; there is no removal
/// - Iterates in sorted order
#[derive(Debug, Clone, Default)]
pub struct CategorySet {
    categories: BTreeSet<String>,
}

impl CategorySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        CategorySet::default()
    }

    /// Adds a category. Returns `true` if it was not present yet.
    pub fn insert(&mut self, category: &str) -> bool {
        if self.categories.contains(category) {
            return false;
        }
        self.categories.insert(category.to_string())
    }

    /// Checks whether a category is registered.
    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Iterates category names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Checks if no category has been registered.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
