//! # Domain Types
//!
//! Core domain types used throughout Vela POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │   ProductKind   │   │    Customer     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  Perishable     │   │  id (UUID)      │   │
//! │  │  name (business)│   │   expires_on    │   │  name           │   │
//! │  │  price (Money)  │   │   weight        │   │  balance (Money)│   │
//! │  │  stock          │   │  NonPerishable  │   │                 │   │
//! │  │  kind           │   │   shipping?     │   │                 │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, stable across renames
//! - Business ID: the product name / customer name - human-readable
//!
//! ## Shippability as Structure
//! `ProductKind` makes "weight is defined only when shippable"
//! unrepresentable any other way: perishables always carry a weight
//! (they always ship), non-perishables carry one iff they ship.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CheckoutError, CheckoutResult, ValidationResult};
use crate::money::{Money, Weight};
use crate::validation::{
    validate_balance, validate_customer_name, validate_price, validate_product_name,
    validate_quantity, validate_stock, validate_weight,
};

// =============================================================================
// Product Kind
// =============================================================================

/// The perishability/shippability variant of a product.
///
/// ## Variants
/// - `Perishable`: has an expiry date; always requires shipment, so the
///   weight is mandatory.
/// - `NonPerishable`: never expires; ships only when a shipping weight
///   is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    /// Expires on a date; always shippable by policy.
    Perishable {
        expires_on: NaiveDate,
        weight: Weight,
    },
    /// Never expires; shippable iff a shipping weight is set.
    NonPerishable { shipping: Option<Weight> },
}

impl ProductKind {
    /// Pure expiry predicate against an explicit date.
    ///
    /// A perishable is expired strictly *after* its expiry date - it is
    /// still sellable on the date itself. Non-perishables never expire.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        match self {
            ProductKind::Perishable { expires_on, .. } => date > *expires_on,
            ProductKind::NonPerishable { .. } => false,
        }
    }

    /// Whether this kind requires physical shipment.
    pub fn is_shippable(&self) -> bool {
        self.shipping_weight().is_some()
    }

    /// Unit shipping weight, present iff shippable.
    pub fn shipping_weight(&self) -> Option<Weight> {
        match self {
            ProductKind::Perishable { weight, .. } => Some(*weight),
            ProductKind::NonPerishable { shipping } => *shipping,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item available for sale.
///
/// ## Invariants
/// - price and stock are never negative (enforced by constructors and
///   `reduce_stock`)
/// - weight exists only for shippable kinds (enforced by [`ProductKind`])
/// - stock is mutated only by `reduce_stock`, which either applies the
///   full decrement or fails with no effect
///
/// ## Lifecycle
/// Created once at catalog initialization; stock only ever decreases
/// (no restock is modeled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    id: String,

    /// Display name - the business key the catalog indexes by.
    name: String,

    /// Unit price.
    price: Money,

    /// Current stock level.
    stock: i64,

    /// Perishability/shippability variant.
    kind: ProductKind,
}

impl Product {
    /// Creates a perishable product (always shippable).
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use vela_core::money::{Money, Weight};
    /// use vela_core::types::Product;
    ///
    /// let milk = Product::perishable(
    ///     "Milk",
    ///     Money::from_cents(200),
    ///     30,
    ///     NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    ///     Weight::from_grams(1000),
    /// )
    /// .unwrap();
    /// assert!(milk.is_shippable());
    /// ```
    pub fn perishable(
        name: impl Into<String>,
        price: Money,
        stock: i64,
        expires_on: NaiveDate,
        weight: Weight,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock(stock)?;
        validate_weight(weight)?;

        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            stock,
            kind: ProductKind::Perishable { expires_on, weight },
        })
    }

    /// Creates a non-perishable product.
    ///
    /// Pass `Some(weight)` for items that require shipment, `None` for
    /// items handed over at the counter (e-goods, in-store pickup).
    pub fn non_perishable(
        name: impl Into<String>,
        price: Money,
        stock: i64,
        shipping: Option<Weight>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock(stock)?;
        if let Some(weight) = shipping {
            validate_weight(weight)?;
        }

        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            stock,
            kind: ProductKind::NonPerishable { shipping },
        })
    }

    /// Returns the stable UUID identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name (business key).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the current stock level.
    #[inline]
    pub const fn stock(&self) -> i64 {
        self.stock
    }

    /// Returns the perishability/shippability variant.
    #[inline]
    pub const fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Checks expiry against the current UTC date.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    /// Pure expiry predicate against an explicit date.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.kind.is_expired_on(date)
    }

    /// Whether this product requires physical shipment.
    pub fn is_shippable(&self) -> bool {
        self.kind.is_shippable()
    }

    /// Unit shipping weight, present iff shippable.
    pub fn shipping_weight(&self) -> Option<Weight> {
        self.kind.shipping_weight()
    }

    /// Checks whether current stock covers a requested quantity.
    #[inline]
    pub const fn in_stock(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// Decrements stock by the requested quantity.
    ///
    /// ## Contract
    /// Fails with `InsufficientStock` if `quantity` exceeds current
    /// stock; otherwise applies the full decrement. There is no partial
    /// effect: on error the stock is exactly what it was before.
    pub fn reduce_stock(&mut self, quantity: i64) -> CheckoutResult<()> {
        validate_quantity(quantity)?;

        if quantity > self.stock {
            return Err(CheckoutError::InsufficientStock {
                name: self.name.clone(),
                available: self.stock,
                requested: quantity,
            });
        }

        self.stock -= quantity;
        Ok(())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A balance-holding customer.
///
/// ## Invariants
/// - balance never goes negative; `charge` only succeeds when
///   balance >= amount
///
/// ## Lifecycle
/// Long-lived across checkouts; mutated only by a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier (UUID v4).
    id: String,

    /// Customer name.
    name: String,

    /// Current account balance.
    balance: Money,
}

impl Customer {
    /// Creates a customer with an opening balance.
    pub fn new(name: impl Into<String>, balance: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_customer_name(&name)?;
        validate_balance(balance)?;

        Ok(Customer {
            id: Uuid::new_v4().to_string(),
            name,
            balance,
        })
    }

    /// Returns the stable UUID identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the customer name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance.
    #[inline]
    pub const fn balance(&self) -> Money {
        self.balance
    }

    /// Checks whether the balance covers an amount.
    #[inline]
    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    /// Deducts an amount from the balance.
    ///
    /// Fails with `InsufficientBalance` when the balance does not cover
    /// the amount; the balance is untouched on failure.
    pub fn charge(&mut self, amount: Money) -> CheckoutResult<()> {
        if !self.can_afford(amount) {
            return Err(CheckoutError::InsufficientBalance {
                customer: self.name.clone(),
                required: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(stock: i64) -> Product {
        Product::non_perishable("Widget", Money::from_cents(10000), stock, None).unwrap()
    }

    #[test]
    fn test_non_perishable_without_shipping_has_no_weight() {
        let book = Product::non_perishable("Book", Money::from_cents(2000), 50, None).unwrap();
        assert!(!book.is_shippable());
        assert_eq!(book.shipping_weight(), None);
        assert!(!book.is_expired());
    }

    #[test]
    fn test_non_perishable_with_shipping_has_weight() {
        let laptop = Product::non_perishable(
            "Laptop",
            Money::from_cents(100_000),
            10,
            Some(Weight::from_grams(2500)),
        )
        .unwrap();
        assert!(laptop.is_shippable());
        assert_eq!(laptop.shipping_weight(), Some(Weight::from_grams(2500)));
    }

    #[test]
    fn test_perishable_is_always_shippable() {
        let expires = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let milk = Product::perishable(
            "Milk",
            Money::from_cents(200),
            30,
            expires,
            Weight::from_grams(1000),
        )
        .unwrap();
        assert!(milk.is_shippable());
        assert_eq!(milk.shipping_weight(), Some(Weight::from_grams(1000)));
    }

    #[test]
    fn test_expiry_predicate() {
        let expires = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let milk = Product::perishable(
            "Milk",
            Money::from_cents(200),
            30,
            expires,
            Weight::from_grams(1000),
        )
        .unwrap();

        // Still sellable on the expiry date itself
        assert!(!milk.is_expired_on(NaiveDate::from_ymd_opt(2026, 6, 14).unwrap()));
        assert!(!milk.is_expired_on(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()));
        assert!(milk.is_expired_on(NaiveDate::from_ymd_opt(2026, 6, 16).unwrap()));
    }

    #[test]
    fn test_constructor_rejects_bad_input() {
        assert!(Product::non_perishable("", Money::from_cents(100), 1, None).is_err());
        assert!(Product::non_perishable("X", Money::from_cents(-1), 1, None).is_err());
        assert!(Product::non_perishable("X", Money::from_cents(100), -1, None).is_err());
        assert!(
            Product::non_perishable("X", Money::from_cents(100), 1, Some(Weight::from_grams(0)))
                .is_err()
        );
    }

    #[test]
    fn test_reduce_stock() {
        let mut product = widget(5);
        product.reduce_stock(2).unwrap();
        assert_eq!(product.stock(), 3);
    }

    #[test]
    fn test_reduce_stock_insufficient_leaves_stock_unchanged() {
        let mut product = widget(2);
        let err = product.reduce_stock(3).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InsufficientStock {
                available: 2,
                requested: 3,
                ..
            }
        ));
        assert_eq!(product.stock(), 2);
    }

    #[test]
    fn test_reduce_stock_rejects_non_positive_quantity() {
        let mut product = widget(5);
        assert!(product.reduce_stock(0).is_err());
        assert!(product.reduce_stock(-1).is_err());
        assert_eq!(product.stock(), 5);
    }

    #[test]
    fn test_customer_charge() {
        let mut alice = Customer::new("Alice", Money::from_cents(100_000)).unwrap();
        assert!(alice.can_afford(Money::from_cents(20000)));

        alice.charge(Money::from_cents(20000)).unwrap();
        assert_eq!(alice.balance(), Money::from_cents(80000));
    }

    #[test]
    fn test_customer_charge_insufficient_leaves_balance_unchanged() {
        let mut bob = Customer::new("Bob", Money::from_cents(1000)).unwrap();
        let err = bob.charge(Money::from_cents(6000)).unwrap_err();
        assert!(matches!(err, CheckoutError::InsufficientBalance { .. }));
        assert_eq!(bob.balance(), Money::from_cents(1000));
    }

    #[test]
    fn test_customer_rejects_negative_opening_balance() {
        assert!(Customer::new("Eve", Money::from_cents(-1)).is_err());
    }
}
