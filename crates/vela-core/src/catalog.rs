//! # Catalog Module
//!
//! The owned in-memory product store.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Who Owns What                                  │
//! │                                                                     │
//! │  Catalog ──owns──► Product ◄──references by name key── CartItem     │
//! │                                                                     │
//! │  The cart never copies product state. It holds the catalog key,     │
//! │  so price/stock/expiry are always read live, and a stock change     │
//! │  between add and checkout is caught by checkout re-validation.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog replaces a process-wide static list: it is constructed
//! explicitly, passed explicitly, and has no hidden global lifecycle.
//! Lookups are case-insensitive ("laptop" finds "Laptop"); keys are
//! normalized to lowercase internally.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// The full set of available products, keyed by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Normalized (lowercased) name → product.
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: HashMap::new(),
        }
    }

    /// Normalized lookup key for a product name.
    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Inserts a product, returning the previous product under the same
    /// name if one existed (names are unique per catalog).
    pub fn insert(&mut self, product: Product) -> Option<Product> {
        self.products.insert(Self::key(product.name()), product)
    }

    /// Finds a product by name, case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use vela_core::catalog::Catalog;
    /// use vela_core::money::Money;
    /// use vela_core::types::Product;
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.insert(Product::non_perishable("Book", Money::from_cents(2000), 50, None).unwrap());
    ///
    /// assert!(catalog.find_by_name("book").is_some());
    /// assert!(catalog.find_by_name("BOOK").is_some());
    /// assert!(catalog.find_by_name("pen").is_none());
    /// ```
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.get(&Self::key(name))
    }

    /// Mutable access for checkout's stock deduction.
    ///
    /// Crate-internal: callers outside the crate mutate products only
    /// through a successful checkout.
    pub(crate) fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.get_mut(&Self::key(name))
    }

    /// Iterates over all products (unordered).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
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
    use crate::money::Money;

    fn book() -> Product {
        Product::non_perishable("Book", Money::from_cents(2000), 50, None).unwrap()
    }

    #[test]
    fn test_insert_and_find() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.insert(book());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find_by_name("Book").unwrap().name(), "Book");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.insert(book());

        assert!(catalog.find_by_name("book").is_some());
        assert!(catalog.find_by_name("BOOK").is_some());
        assert!(catalog.find_by_name("  Book  ").is_some());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let catalog = Catalog::new();
        assert!(catalog.find_by_name("Pen").is_none());
    }

    #[test]
    fn test_insert_same_name_replaces() {
        let mut catalog = Catalog::new();
        catalog.insert(book());

        let cheaper = Product::non_perishable("Book", Money::from_cents(1500), 10, None).unwrap();
        let previous = catalog.insert(cheaper);

        assert_eq!(previous.unwrap().price(), Money::from_cents(2000));
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.find_by_name("Book").unwrap().price(),
            Money::from_cents(1500)
        );
    }

    #[test]
    fn test_mutable_access_reaches_same_product() {
        let mut catalog = Catalog::new();
        catalog.insert(book());

        catalog
            .find_by_name_mut("book")
            .unwrap()
            .reduce_stock(10)
            .unwrap();

        assert_eq!(catalog.find_by_name("Book").unwrap().stock(), 40);
    }
}
