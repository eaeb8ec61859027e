//! # Pricing Module
//!
//! Computes subtotal and shipping fees from cart contents.
//!
//! ## Fee Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Shipping Fee Policy                            │
//! │                                                                     │
//! │  Flat rate per shippable UNIT:                                      │
//! │                                                                     │
//! │    fee × quantity, summed over every shippable line                 │
//! │                                                                     │
//! │  2× Laptop   (shippable)      → $10.00 × 2 = $20.00                 │
//! │  1× Book     (not shippable)  → $0.00                               │
//! │  3× Milk     (perishable)     → $10.00 × 3 = $30.00                 │
//! │                                            ─────────                │
//! │  shipping fee                                $50.00                 │
//! │                                                                     │
//! │  Independent of weight and distance. No taxes, discounts, or        │
//! │  currency conversion.                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::money::Money;
use crate::DEFAULT_SHIPPING_FEE_CENTS;

// =============================================================================
// Pricing Engine
// =============================================================================

/// Computes order pricing: subtotal, shipping fees, total.
///
/// The flat per-unit shipping fee is configurable per engine; the
/// default is [`DEFAULT_SHIPPING_FEE_CENTS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingEngine {
    /// Flat fee charged per shippable unit.
    flat_shipping_fee: Money,
}

impl PricingEngine {
    /// Creates a pricing engine with the default flat shipping fee.
    pub fn new() -> Self {
        PricingEngine {
            flat_shipping_fee: Money::from_cents(DEFAULT_SHIPPING_FEE_CENTS),
        }
    }

    /// Creates a pricing engine with a custom flat fee per shippable unit.
    pub const fn with_flat_fee(flat_shipping_fee: Money) -> Self {
        PricingEngine { flat_shipping_fee }
    }

    /// Returns the configured flat fee per shippable unit.
    #[inline]
    pub const fn flat_shipping_fee(&self) -> Money {
        self.flat_shipping_fee
    }

    /// Sum of (current unit price × quantity) over all cart lines.
    pub fn subtotal(&self, catalog: &Catalog, cart: &Cart) -> Money {
        cart.subtotal(catalog)
    }

    /// Flat fee × quantity, summed over every shippable line.
    ///
    /// Non-shippable lines contribute zero. Lines whose product no
    /// longer resolves contribute nothing here; checkout rejects them.
    pub fn shipping_fees(&self, catalog: &Catalog, cart: &Cart) -> Money {
        cart.items()
            .iter()
            .filter_map(|item| {
                catalog
                    .find_by_name(item.product_name())
                    .filter(|product| product.is_shippable())
                    .map(|_| self.flat_shipping_fee.multiply_quantity(item.quantity()))
            })
            .fold(Money::zero(), |acc, fee| acc + fee)
    }

    /// Full price quote: subtotal, shipping, and their sum.
    pub fn quote(&self, catalog: &Catalog, cart: &Cart) -> PriceQuote {
        let subtotal = self.subtotal(catalog, cart);
        let shipping = self.shipping_fees(catalog, cart);
        PriceQuote {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Price Quote
// =============================================================================

/// The priced view of a cart: `total = subtotal + shipping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Weight;
    use crate::types::Product;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            Product::non_perishable("Widget", Money::from_cents(10000), 5, None).unwrap(),
        );
        catalog.insert(
            Product::non_perishable(
                "Gadget",
                Money::from_cents(5000),
                10,
                Some(Weight::from_grams(2000)),
            )
            .unwrap(),
        );
        catalog
    }

    #[test]
    fn test_quote_without_shippable_items_has_zero_shipping() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "Widget", 2).unwrap();

        let quote = PricingEngine::new().quote(&catalog, &cart);

        assert_eq!(quote.subtotal, Money::from_cents(20000));
        assert_eq!(quote.shipping, Money::zero());
        assert_eq!(quote.total, Money::from_cents(20000));
    }

    #[test]
    fn test_flat_fee_is_charged_per_unit() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "Gadget", 3).unwrap();

        let pricing = PricingEngine::new();
        // $10.00 × 3 units
        assert_eq!(pricing.shipping_fees(&catalog, &cart), Money::from_cents(3000));
    }

    #[test]
    fn test_mixed_cart_charges_only_shippable_lines() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "Widget", 2).unwrap(); // not shippable
        cart.add(&catalog, "Gadget", 1).unwrap(); // shippable

        let quote = PricingEngine::new().quote(&catalog, &cart);

        assert_eq!(quote.subtotal, Money::from_cents(25000));
        assert_eq!(quote.shipping, Money::from_cents(1000));
        assert_eq!(quote.total, Money::from_cents(26000));
    }

    #[test]
    fn test_custom_flat_fee() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "Gadget", 2).unwrap();

        let pricing = PricingEngine::with_flat_fee(Money::from_cents(250));
        assert_eq!(pricing.shipping_fees(&catalog, &cart), Money::from_cents(500));
    }

    #[test]
    fn test_cart_delegates_shipping_fees() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "Gadget", 1).unwrap();

        let pricing = PricingEngine::new();
        assert_eq!(
            cart.shipping_fees(&catalog, &pricing),
            pricing.shipping_fees(&catalog, &cart)
        );
    }

    #[test]
    fn test_empty_cart_quotes_zero() {
        let catalog = catalog();
        let cart = Cart::new();

        let quote = PricingEngine::new().quote(&catalog, &cart);
        assert_eq!(quote.total, Money::zero());
    }
}
