//! # vela-core: Pure Business Logic for Vela POS
//!
//! This crate is the **heart** of Vela POS. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Vela POS Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     pos-cli (front end)                       │  │
//! │  │   Seeds catalog ──► builds cart ──► renders receipt           │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ vela-core (THIS CRATE) ★                      │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌────────┐ ┌─────────┐ ┌──────────┐  │  │
//! │  │  │  types  │ │ catalog │ │  cart  │ │ pricing │ │ checkout │  │  │
//! │  │  │ Product │ │ Catalog │ │  Cart  │ │ Engine  │ │ Processor│  │  │
//! │  │  │Customer │ │ by name │ │CartItem│ │  Quote  │ │  Receipt │  │  │
//! │  │  └─────────┘ └─────────┘ └────────┘ └─────────┘ └──────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductKind, Customer)
//! - [`money`] - Money and Weight types with integer arithmetic (no floats!)
//! - [`catalog`] - The owned product store, keyed by name
//! - [`cart`] - Cart and CartItem with add-time validation
//! - [`pricing`] - Subtotal and flat-rate shipping fee computation
//! - [`checkout`] - The atomic checkout transaction
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic over its
//!    inputs (the expiry clock reads the current UTC date and has a
//!    pure `_on(date)` twin)
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Units**: monetary values are cents (i64), weights are
//!    grams (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **No Mutation Before Full Validation**: checkout applies stock and
//!    balance changes only after every check passes
//!
//! ## Example Usage
//!
//! ```rust
//! use vela_core::catalog::Catalog;
//! use vela_core::cart::Cart;
//! use vela_core::checkout::CheckoutProcessor;
//! use vela_core::money::Money;
//! use vela_core::types::{Customer, Product};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(Product::non_perishable("Book", Money::from_cents(2000), 50, None).unwrap());
//!
//! let mut customer = Customer::new("Alice", Money::from_cents(200_000)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(&catalog, "Book", 2).unwrap();
//!
//! let receipt = CheckoutProcessor::new()
//!     .process(&mut catalog, &mut customer, &cart)
//!     .unwrap();
//!
//! assert_eq!(receipt.total, Money::from_cents(4000));
//! assert_eq!(catalog.find_by_name("Book").unwrap().stock(), 48);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vela_core::Money` instead of
// `use vela_core::money::Money`

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use checkout::{CheckoutProcessor, Receipt, ReceiptLine, ShipmentLine, ShipmentNotice};
pub use error::{CheckoutError, CheckoutResult, ValidationError};
pub use money::{Money, Weight};
pub use pricing::{PriceQuote, PricingEngine};
pub use types::{Customer, Product, ProductKind};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Default flat shipping fee per shippable unit, in cents ($10.00)
///
/// ## Business Reason
/// Flat per-unit pricing keeps the fee independent of weight and
/// distance; override per engine with [`PricingEngine::with_flat_fee`].
pub const DEFAULT_SHIPPING_FEE_CENTS: i64 = 1000;
