//! # Error Types
//!
//! Domain-specific error types for vela-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  vela-core errors (this file)                                       │
//! │  ├── CheckoutError    - Cart/checkout business rule violations      │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  Flow: ValidationError → CheckoutError → CLI exit message           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every failure aborts the whole checkout before any mutation;
//!    retrying the same call cannot succeed, so no variant is transient

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Checkout Error
// =============================================================================

/// Cart and checkout business rule violations.
///
/// Every variant is a local validation failure: stock, expiry, and
/// balance do not change by retrying the same call. The caller decides
/// how to surface the message (print, propagate).
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no items.
    ///
    /// ## When This Occurs
    /// - `CheckoutProcessor::process` called on a freshly created cart
    /// - Every prior `Cart::add` failed and the caller proceeded anyway
    #[error("Cart is empty, cannot proceed to checkout")]
    EmptyCart,

    /// No product in the catalog matches the requested name.
    ///
    /// ## When This Occurs
    /// - Typo in the product name passed to `Cart::add`
    /// - Product removed from the catalog between add and checkout
    #[error("Product not found: {name}")]
    ProductNotFound { name: String },

    /// The product's expiry date has passed.
    ///
    /// Raised both at add-time and again during checkout validation,
    /// since the product may expire while sitting in the cart.
    #[error("Cannot purchase expired product: {name}")]
    ExpiredProduct { name: String },

    /// Requested quantity exceeds current stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to cart (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Laptop", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 Laptop in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Customer balance does not cover the order total.
    ///
    /// Raised during the Charging phase, strictly before any stock or
    /// balance mutation.
    #[error("Insufficient balance for {customer}: required {required}, available {available}")]
    InsufficientBalance {
        customer: String,
        required: Money,
        available: Money,
    },

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied values don't meet
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CheckoutError::InsufficientStock {
            name: "Laptop".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Laptop: available 3, requested 5"
        );

        let err = CheckoutError::ExpiredProduct {
            name: "Milk".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot purchase expired product: Milk");
    }

    #[test]
    fn test_insufficient_balance_message_uses_money_display() {
        let err = CheckoutError::InsufficientBalance {
            customer: "Alice".to_string(),
            required: Money::from_cents(6000),
            available: Money::from_cents(1000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance for Alice: required $60.00, available $10.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_checkout_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let checkout_err: CheckoutError = validation_err.into();
        assert!(matches!(checkout_err, CheckoutError::Validation(_)));
    }
}
