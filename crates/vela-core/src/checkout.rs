//! # Checkout Module
//!
//! The atomic checkout transaction: converts a Cart + Customer into
//! stock/balance mutations plus a structured receipt.
//!
//! ## Phase Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Phases                                 │
//! │                                                                     │
//! │  Validating ──► Pricing ──► Charging ──► Fulfilling ──► Complete    │
//! │      │                          │             │                     │
//! │      │ EmptyCart                │             │  stock -= qty       │
//! │      │ ProductNotFound          │             │  balance -= total   │
//! │      │ ExpiredProduct           │                                   │
//! │      │ InsufficientStock        │ InsufficientBalance               │
//! │      ▼                          ▼                                   │
//! │   Failed(reason) ◄──────────────┘                                   │
//! │                                                                     │
//! │  NOTHING is mutated until every check has passed. A failure in      │
//! │  any phase leaves catalog, customer, and cart exactly as before.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Re-validation here is mandatory even though `Cart::add` validated at
//! add-time: stock may have been consumed by another checkout and a
//! perishable may have expired while sitting in the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::{Money, Weight};
use crate::pricing::PricingEngine;
use crate::types::Customer;

// =============================================================================
// Checkout Processor
// =============================================================================

/// Orchestrates validation → pricing → charging → fulfillment as one
/// logical transaction.
#[derive(Debug, Clone, Default)]
pub struct CheckoutProcessor {
    pricing: PricingEngine,
}

/// A validated line snapshot taken during the Validating phase.
///
/// Fulfillment and the receipt are built from this plan, so the data
/// that was validated is exactly the data that gets applied.
#[derive(Debug, Clone)]
struct PlanLine {
    name: String,
    quantity: i64,
    unit_price: Money,
    shipping_weight: Option<Weight>,
}

impl CheckoutProcessor {
    /// Creates a processor with default pricing.
    pub fn new() -> Self {
        CheckoutProcessor {
            pricing: PricingEngine::new(),
        }
    }

    /// Creates a processor with a custom pricing engine.
    pub const fn with_pricing(pricing: PricingEngine) -> Self {
        CheckoutProcessor { pricing }
    }

    /// Runs the checkout transaction.
    ///
    /// ## Contract
    /// 1. **Validating**: `EmptyCart` for a cart with no lines; per
    ///    line `ProductNotFound` / `ExpiredProduct` /
    ///    `InsufficientStock` against *current* catalog state.
    /// 2. **Pricing**: subtotal + shipping via the pricing engine.
    /// 3. **Charging**: `InsufficientBalance` if the customer cannot
    ///    afford the total. Still no mutation at this point.
    /// 4. **Fulfilling**: decrement stock per line, deduct the total
    ///    from the balance. Pre-validated, so this cannot fail in the
    ///    single-threaded model.
    /// 5. **Complete**: return the structured [`Receipt`].
    ///
    /// All-or-nothing: any error leaves catalog, customer, and cart
    /// exactly as they were before the call.
    pub fn process(
        &self,
        catalog: &mut Catalog,
        customer: &mut Customer,
        cart: &Cart,
    ) -> CheckoutResult<Receipt> {
        debug!(lines = cart.line_count(), "checkout: validating");
        let plan = self.validate(catalog, cart)?;

        debug!("checkout: pricing");
        let quote = self.pricing.quote(catalog, cart);

        debug!(total = %quote.total, balance = %customer.balance(), "checkout: charging");
        if !customer.can_afford(quote.total) {
            return Err(CheckoutError::InsufficientBalance {
                customer: customer.name().to_string(),
                required: quote.total,
                available: customer.balance(),
            });
        }

        debug!("checkout: fulfilling");
        self.fulfill(catalog, customer, &plan, quote.total)?;

        let receipt = Receipt {
            receipt_number: generate_receipt_number(),
            customer_name: customer.name().to_string(),
            lines: plan
                .iter()
                .map(|line| ReceiptLine {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    line_total: line.unit_price.multiply_quantity(line.quantity),
                })
                .collect(),
            subtotal: quote.subtotal,
            shipping_fee: quote.shipping,
            total: quote.total,
            balance_remaining: customer.balance(),
            shipment: build_shipment_notice(&plan),
            completed_at: Utc::now(),
        };

        info!(
            receipt_number = %receipt.receipt_number,
            total = %receipt.total,
            lines = receipt.lines.len(),
            "checkout complete"
        );

        Ok(receipt)
    }

    /// Validating phase: re-check every line against live catalog state
    /// and snapshot the fulfillment plan.
    fn validate(&self, catalog: &Catalog, cart: &Cart) -> CheckoutResult<Vec<PlanLine>> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let today = Utc::now().date_naive();
        let mut plan = Vec::with_capacity(cart.line_count());

        for item in cart.items() {
            let product = catalog.find_by_name(item.product_name()).ok_or_else(|| {
                CheckoutError::ProductNotFound {
                    name: item.product_name().to_string(),
                }
            })?;

            if product.is_expired_on(today) {
                return Err(CheckoutError::ExpiredProduct {
                    name: product.name().to_string(),
                });
            }

            if !product.in_stock(item.quantity()) {
                return Err(CheckoutError::InsufficientStock {
                    name: product.name().to_string(),
                    available: product.stock(),
                    requested: item.quantity(),
                });
            }

            plan.push(PlanLine {
                name: product.name().to_string(),
                quantity: item.quantity(),
                unit_price: product.price(),
                shipping_weight: product.shipping_weight(),
            });
        }

        Ok(plan)
    }

    /// Fulfilling phase: one stock decrement per plan line, then the
    /// balance deduction. Every step was pre-validated.
    fn fulfill(
        &self,
        catalog: &mut Catalog,
        customer: &mut Customer,
        plan: &[PlanLine],
        total: Money,
    ) -> CheckoutResult<()> {
        for line in plan {
            catalog
                .find_by_name_mut(&line.name)
                .ok_or_else(|| CheckoutError::ProductNotFound {
                    name: line.name.clone(),
                })?
                .reduce_stock(line.quantity)?;
        }

        customer.charge(total)
    }
}

/// Builds the shipment notice for the shippable plan lines, if any.
fn build_shipment_notice(plan: &[PlanLine]) -> Option<ShipmentNotice> {
    let lines: Vec<ShipmentLine> = plan
        .iter()
        .filter_map(|line| {
            line.shipping_weight.map(|unit_weight| ShipmentLine {
                name: line.name.clone(),
                quantity: line.quantity,
                weight: unit_weight.multiply_quantity(line.quantity),
            })
        })
        .collect();

    if lines.is_empty() {
        return None;
    }

    let total_weight = lines
        .iter()
        .fold(Weight::zero(), |acc, line| acc + line.weight);

    Some(ShipmentNotice {
        lines,
        total_weight,
    })
}

/// Generates a human-readable receipt number: `YYMMDD-HHMMSS-NNNN`.
fn generate_receipt_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let random: u16 = (nanos % 10000) as u16;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), random)
}

// =============================================================================
// Checkout Result Types
// =============================================================================

/// The structured result of a successful checkout.
///
/// The core never formats human-readable text: front ends render this
/// (console, log, UI) however they need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Human-readable receipt number (timestamp-derived).
    pub receipt_number: String,

    /// Customer the order was charged to.
    pub customer_name: String,

    /// Itemized lines in cart order.
    pub lines: Vec<ReceiptLine>,

    /// Sum of line totals.
    pub subtotal: Money,

    /// Flat-rate shipping fees.
    pub shipping_fee: Money,

    /// subtotal + shipping_fee.
    pub total: Money,

    /// Customer balance after the charge.
    pub balance_remaining: Money,

    /// Present iff at least one line is shippable.
    pub shipment: Option<ShipmentNotice>,

    /// When the checkout completed.
    pub completed_at: DateTime<Utc>,
}

/// One itemized receipt line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// unit_price × quantity.
    pub line_total: Money,
}

/// Shipment details for the shippable portion of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentNotice {
    /// One line per shippable product, in cart order.
    pub lines: Vec<ShipmentLine>,

    /// Total package weight across all lines.
    pub total_weight: Weight,
}

/// One shippable line: package weight is quantity × unit weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub name: String,
    pub quantity: i64,
    pub weight: Weight,
}

// =============================================================================
// Unit Tests
// =============================================================================
