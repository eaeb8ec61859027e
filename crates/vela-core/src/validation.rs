//! # Validation Module
//!
//! Input validation utilities for Vela POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Constructors (Product, Customer)                          │
//! │  ├── THIS MODULE: field-level rules at creation time                │
//! │  └── A value that exists is a value that passed                     │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Cart::add                                                 │
//! │  ├── quantity bounds (this module)                                  │
//! │  └── business rules: expiry, stock coverage (cart.rs)               │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: CheckoutProcessor                                         │
//! │  └── full re-validation against live catalog state                  │
//! │                                                                     │
//! │  Defense in depth: each layer catches what earlier ones cannot      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vela_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Laptop").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::{Money, Weight};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use vela_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Laptop").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                     │
/// │                                                                     │
/// │  Caller requests quantity: 5                                        │
/// │       │                                                             │
/// │       ▼                                                             │
/// │  validate_quantity(5) ← THIS FUNCTION                               │
/// │       │                                                             │
/// │       ├── qty <= 0? → Error: "quantity must be positive"            │
/// │       │                                                             │
/// │       ├── qty > 999? → Error: out of range                          │
/// │       │                                                             │
/// │       └── OK → proceed with stock/expiry checks                     │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
///
/// ## Example
/// ```rust
/// use vela_core::money::Money;
/// use vela_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an opening balance.
///
/// ## Rules
/// - Must be non-negative
pub fn validate_balance(balance: Money) -> ValidationResult<()> {
    if balance.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "balance".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (zero means sold out, still a valid product)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a shipping weight.
///
/// ## Rules
/// - Must be positive; a shippable item with zero weight is a data bug
pub fn validate_weight(weight: Weight) -> ValidationResult<()> {
    if weight.grams() <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "weight".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
