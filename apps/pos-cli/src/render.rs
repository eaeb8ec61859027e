//! # Receipt Rendering
//!
//! Turns the core's structured checkout result into terminal text.
//! The layout follows the classic register tape:
//!
//! ```text
//!  ** Shipment notice **
//! 1x Laptop           2.5kg
//! 2x Smartphone        600g
//! Total package weight 3.1kg
//!
//!  ** Checkout receipt **
//! 1x Laptop        $1000.00
//! 2x Smartphone    $1000.00
//! ----------------------
//! Subtotal         $2000.00
//! Shipping           $30.00
//! Amount           $2030.00
//! Balance left       $...
//! ```

use std::fmt::Write;

use vela_core::{Catalog, Receipt};

const RULE: &str = "----------------------";

/// Renders the full checkout result: shipment notice (when present)
/// followed by the itemized receipt.
pub fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();

    if let Some(shipment) = &receipt.shipment {
        let _ = writeln!(out, " ** Shipment notice ** ");
        for line in &shipment.lines {
            let _ = writeln!(
                out,
                "{}x {:<16}{:>9}",
                line.quantity,
                line.name,
                line.weight.to_string()
            );
        }
        let _ = writeln!(out, "Total package weight {}", shipment.total_weight);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, " ** Checkout receipt ** ");
    for line in &receipt.lines {
        let _ = writeln!(
            out,
            "{}x {:<16}{:>9}",
            line.quantity,
            line.name,
            line.line_total.to_string()
        );
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Subtotal {:>13}", receipt.subtotal.to_string());
    let _ = writeln!(out, "Shipping {:>13}", receipt.shipping_fee.to_string());
    let _ = writeln!(out, "Amount {:>15}", receipt.total.to_string());
    let _ = writeln!(
        out,
        "Balance left {:>9}",
        receipt.balance_remaining.to_string()
    );

    out
}

/// Renders the catalog for `--list`: one product per line, sorted by
/// name so output is stable.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut products: Vec<_> = catalog.products().collect();
    products.sort_by(|a, b| a.name().cmp(b.name()));

    let mut out = String::new();
    let _ = writeln!(out, "{:<16}{:>10}  {:>5}  {}", "NAME", "PRICE", "STOCK", "NOTES");
    for product in products {
        let notes = match (product.is_expired(), product.shipping_weight()) {
            (true, _) => "expired".to_string(),
            (false, Some(weight)) => format!("ships at {weight}/unit"),
            (false, None) => "no shipment".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<16}{:>10}  {:>5}  {}",
            product.name(),
            product.price().to_string(),
            product.stock(),
            notes
        );
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
