//! # Demo Catalog
//!
//! Seeds the in-memory catalog the CLI runs against. There is no
//! persistence layer: the catalog is pre-populated here and lives for
//! one transaction.

use chrono::{Duration, Utc};
use vela_core::error::ValidationResult;
use vela_core::money::{Money, Weight};
use vela_core::types::Product;
use vela_core::Catalog;

/// Builds the demo catalog.
///
/// ## Contents
/// ```text
/// Laptop       $1000.00  ×10   ships at 2.5kg
/// Smartphone    $500.00  ×20   ships at 300g
/// Book           $20.00  ×50   no shipment
/// Milk            $2.00  ×30   perishable, already past date
/// Cheese          $8.50  ×12   perishable, fresh for two weeks
/// ```
///
/// Expiry dates are relative to today so the demo behaves the same on
/// any day it runs: Milk always demonstrates the expired-product
/// failure, Cheese always checks out.
pub fn demo_catalog() -> ValidationResult<Catalog> {
    let today = Utc::now().date_naive();
    let mut catalog = Catalog::new();

    catalog.insert(Product::non_perishable(
        "Laptop",
        Money::from_major_minor(1000, 0),
        10,
        Some(Weight::from_grams(2500)),
    )?);
    catalog.insert(Product::non_perishable(
        "Smartphone",
        Money::from_major_minor(500, 0),
        20,
        Some(Weight::from_grams(300)),
    )?);
    catalog.insert(Product::non_perishable(
        "Book",
        Money::from_major_minor(20, 0),
        50,
        None,
    )?);
    catalog.insert(Product::perishable(
        "Milk",
        Money::from_major_minor(2, 0),
        30,
        today - Duration::days(2),
        Weight::from_grams(1000),
    )?);
    catalog.insert(Product::perishable(
        "Cheese",
        Money::from_major_minor(8, 50),
        12,
        today + Duration::days(14),
        Weight::from_grams(400),
    )?);

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_contents() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.len(), 5);

        let laptop = catalog.find_by_name("Laptop").unwrap();
        assert_eq!(laptop.price(), Money::from_cents(100_000));
        assert!(laptop.is_shippable());

        let book = catalog.find_by_name("Book").unwrap();
        assert!(!book.is_shippable());
    }

    #[test]
    fn test_milk_is_always_expired_and_cheese_is_not() {
        let catalog = demo_catalog().unwrap();
        assert!(catalog.find_by_name("Milk").unwrap().is_expired());
        assert!(!catalog.find_by_name("Cheese").unwrap().is_expired());
    }
}
