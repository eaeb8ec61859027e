//! # Cart Module
//!
//! The shopping cart: accumulated purchase intent against live
//! inventory.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Caller Action              Validation             Cart Change      │
//! │  ─────────────              ──────────             ───────────      │
//! │                                                                     │
//! │  add("Laptop", 1) ────────► exists? expired?  ───► line appended    │
//! │                             stock covers qty?      (or merged)      │
//! │                                                                     │
//! │  add("Laptop", 2) ────────► stock covers 3?   ───► line qty = 3     │
//! │                                                                     │
//! │  subtotal(catalog) ───────► (read only) ─────────► Money            │
//! │                                                                     │
//! │  NOTE: add NEVER mutates product stock. Deduction happens exactly   │
//! │        once, at checkout, after full re-validation.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::pricing::PricingEngine;
use crate::validation::validate_quantity;
use crate::MAX_CART_ITEMS;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `product_name`: the catalog key. The cart observes catalog state
///   through this key instead of copying the product, so price, stock,
///   and expiry are always read live.
/// - `quantity`: validated against stock when the line is created or
///   merged; checkout re-validates because stock may change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Canonical product name (catalog key).
    product_name: String,

    /// Requested quantity (positive).
    quantity: i64,
}

impl CartItem {
    /// Returns the canonical product name.
    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the requested quantity.
    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product (adding the same product merges into
///   the existing line); order is the order of first addition and is
///   meaningful for receipt display
/// - Every line passed expiry and stock validation when created/merged
/// - At most MAX_CART_ITEMS lines, MAX_ITEM_QUANTITY per line
/// - An empty cart cannot proceed to checkout
///
/// ## Lifecycle
/// Created empty per transaction attempt; discarded after checkout
/// (success or failure), not reused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in first-add order.
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart, or merges into its existing line.
    ///
    /// ## Constraints (checked in order)
    /// 1. quantity is positive and within MAX_ITEM_QUANTITY
    /// 2. the product exists in the catalog
    /// 3. the product is not expired
    /// 4. current stock covers the merged line quantity
    /// 5. a new line fits under MAX_CART_ITEMS
    ///
    /// On any violation the cart is left exactly as it was. Product
    /// stock is NOT mutated here - deduction is deferred to checkout.
    pub fn add(&mut self, catalog: &Catalog, name: &str, quantity: i64) -> CheckoutResult<()> {
        validate_quantity(quantity)?;

        let product = catalog
            .find_by_name(name)
            .ok_or_else(|| CheckoutError::ProductNotFound {
                name: name.to_string(),
            })?;

        if product.is_expired() {
            return Err(CheckoutError::ExpiredProduct {
                name: product.name().to_string(),
            });
        }

        let existing = self
            .items
            .iter()
            .position(|item| item.product_name.eq_ignore_ascii_case(product.name()));

        let merged_quantity = match existing {
            Some(index) => {
                let merged = self.items[index].quantity + quantity;
                validate_quantity(merged)?;
                merged
            }
            None => {
                if self.items.len() >= MAX_CART_ITEMS {
                    return Err(CheckoutError::CartTooLarge {
                        max: MAX_CART_ITEMS,
                    });
                }
                quantity
            }
        };

        if !product.in_stock(merged_quantity) {
            return Err(CheckoutError::InsufficientStock {
                name: product.name().to_string(),
                available: product.stock(),
                requested: merged_quantity,
            });
        }

        match existing {
            Some(index) => self.items[index].quantity = merged_quantity,
            None => self.items.push(CartItem {
                product_name: product.name().to_string(),
                quantity,
            }),
        }

        Ok(())
    }

    /// Sum of (current unit price × quantity) over all lines.
    ///
    /// Lines whose product no longer resolves contribute nothing here;
    /// checkout rejects them with `ProductNotFound`.
    pub fn subtotal(&self, catalog: &Catalog) -> Money {
        self.items
            .iter()
            .filter_map(|item| {
                catalog
                    .find_by_name(&item.product_name)
                    .map(|product| product.price().multiply_quantity(item.quantity))
            })
            .fold(Money::zero(), |acc, line| acc + line)
    }

    /// Shipping fees for the cart, delegated to the pricing engine.
    pub fn shipping_fees(&self, catalog: &Catalog, pricing: &PricingEngine) -> Money {
        pricing.shipping_fees(catalog, self)
    }

    /// Lines in first-add order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Checks if the cart has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Weight;
    use crate::types::Product;
    use chrono::{Duration, Utc};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            Product::non_perishable("Widget", Money::from_cents(10000), 5, None).unwrap(),
        );
        catalog.insert(
            Product::non_perishable(
                "Gadget",
                Money::from_cents(5000),
                1,
                Some(Weight::from_grams(2000)),
            )
            .unwrap(),
        );
        catalog
    }

    fn expired_milk() -> Product {
        Product::perishable(
            "Milk",
            Money::from_cents(200),
            30,
            Utc::now().date_naive() - Duration::days(1),
            Weight::from_grams(1000),
        )
        .unwrap()
    }

    #[test]
    fn test_add_appends_line() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "Widget", 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(&catalog), Money::from_cents(20000));
    }

    #[test]
    fn test_add_same_product_merges_line() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "Widget", 2).unwrap();
        cart.add(&catalog, "widget", 3).unwrap();

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_merged_quantity_cannot_exceed_stock() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "Widget", 3).unwrap();
        // 3 already in cart + 3 more = 6 > stock of 5
        let err = cart.add(&catalog, "Widget", 3).unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::InsufficientStock {
                available: 5,
                requested: 6,
                ..
            }
        ));
        assert_eq!(cart.total_quantity(), 3); // First add untouched
    }

    #[test]
    fn test_add_insufficient_stock_leaves_cart_and_stock_unchanged() {
        let catalog = catalog();
        let mut cart = Cart::new();

        // Stock is 1, requesting 3
        let err = cart.add(&catalog, "Gadget", 3).unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::InsufficientStock {
                available: 1,
                requested: 3,
                ..
            }
        ));
        assert!(cart.is_empty());
        assert_eq!(catalog.find_by_name("Gadget").unwrap().stock(), 1);
    }

    #[test]
    fn test_add_expired_product_fails_regardless_of_quantity() {
        let mut catalog = catalog();
        catalog.insert(expired_milk());
        let mut cart = Cart::new();

        for qty in [1, 5, 30] {
            let err = cart.add(&catalog, "Milk", qty).unwrap_err();
            assert!(matches!(err, CheckoutError::ExpiredProduct { .. }));
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let err = cart.add(&catalog, "Flux Capacitor", 1).unwrap_err();
        assert!(matches!(err, CheckoutError::ProductNotFound { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert!(cart.add(&catalog, "Widget", 0).is_err());
        assert!(cart.add(&catalog, "Widget", -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_stores_canonical_name() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "widget", 1).unwrap();
        assert_eq!(cart.items()[0].product_name(), "Widget");
    }

    #[test]
    fn test_subtotal_sums_lines_in_order() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "Widget", 2).unwrap(); // $200.00
        cart.add(&catalog, "Gadget", 1).unwrap(); // $50.00

        assert_eq!(cart.subtotal(&catalog), Money::from_cents(25000));
        assert_eq!(cart.items()[0].product_name(), "Widget");
        assert_eq!(cart.items()[1].product_name(), "Gadget");
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total_quantity(), 0);
    }
}
