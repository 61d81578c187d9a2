//! # Checkout
//!
//! Aggregates chargeable items into subtotal, tax and total.
//!
//! ## Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: [Thriller $12.99]          rate: 20%                           │
//! │                                                                         │
//! │  subtotal()        = Σ price            = 12.99    (fresh every call)  │
//! │  total_tax()       = Σ price × rate     = 2.598    (fresh every call)  │
//! │  grand_total()     = subtotal + tax     = 15.588   (fresh every call)  │
//! │                                                                         │
//! │  calculate_total() → running += subtotal + tax                         │
//! │      1st call                          = 15.588                        │
//! │      2nd call                          = 31.176   ← accumulates!       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `calculate_total` accumulates on every call. Use
//! [`Checkout::grand_total`] when a stable figure is needed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::format_amount;
use crate::tax::TaxCalculator;
use crate::types::{Chargeable, ChargeableItem};

// =============================================================================
// Checkout
// =============================================================================

/// An ordered list of items priced with one tax calculator.
#[derive(Debug, Clone)]
pub struct Checkout {
    items: Vec<ChargeableItem>,
    running_total: f64,
    tax_calculator: TaxCalculator,
}

impl Checkout {
    /// Creates an empty checkout using `tax_calculator` for every item.
    pub fn new(tax_calculator: TaxCalculator) -> Self {
        Checkout {
            items: Vec::new(),
            running_total: 0.0,
            tax_calculator,
        }
    }

    /// Appends an item. No deduplication.
    pub fn add_item(&mut self, item: impl Into<ChargeableItem>) {
        self.items.push(item.into());
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[ChargeableItem] {
        &self.items
    }

    pub fn tax_calculator(&self) -> &TaxCalculator {
        &self.tax_calculator
    }

    /// Sum of item prices before tax.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(Chargeable::price).sum()
    }

    /// Sum of per-item tax.
    pub fn total_tax(&self) -> f64 {
        self.items
            .iter()
            .map(|item| self.tax_calculator.calculate_tax(item))
            .sum()
    }

    /// Adds every item's price and tax to the running total and returns it.
    ///
    /// Calling this twice on the same items doubles the result. The running
    /// total is never reset.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Checkout, PhysicalProduct, TaxCalculator, TaxRate};
    ///
    /// let mut checkout = Checkout::new(TaxCalculator::new(TaxRate::from_fraction(0.2).unwrap()));
    /// checkout.add_item(PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap());
    ///
    /// assert!((checkout.calculate_total() - 15.588).abs() < 1e-9);
    /// assert!((checkout.calculate_total() - 31.176).abs() < 1e-9);
    /// ```
    pub fn calculate_total(&mut self) -> f64 {
        for item in &self.items {
            self.running_total += item.price();
            self.running_total += self.tax_calculator.calculate_tax(item);
        }
        self.running_total
    }

    /// Current value of the running total without adding to it.
    pub fn running_total(&self) -> f64 {
        self.running_total
    }

    /// `subtotal() + total_tax()`, recomputed each call.
    pub fn grand_total(&self) -> f64 {
        self.subtotal() + self.total_tax()
    }

    /// Snapshot of the three figures, using [`Checkout::grand_total`].
    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary {
            subtotal: self.subtotal(),
            total_tax: self.total_tax(),
            grand_total: self.grand_total(),
        }
    }
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// Subtotal, tax and total at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub total_tax: f64,
    pub grand_total: f64,
}

/// Three receipt lines: `Subtotal`, `Total Tax`, `Total Checkout`.
impl fmt::Display for CheckoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subtotal: ${}", format_amount(self.subtotal))?;
        writeln!(f, "Total Tax: ${}", format_amount(self.total_tax))?;
        write!(f, "Total Checkout: ${}", format_amount(self.grand_total))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::TaxRate;
    use crate::types::{PhysicalProduct, Service, UtilityService};

    const EPSILON: f64 = 1e-9;

    fn checkout_at(rate: f64) -> Checkout {
        Checkout::new(TaxCalculator::new(TaxRate::from_fraction(rate).unwrap()))
    }

    fn thriller() -> PhysicalProduct {
        PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap()
    }

    #[test]
    fn test_empty_checkout_is_zero() {
        let mut checkout = checkout_at(0.2);
        assert_eq!(checkout.subtotal(), 0.0);
        assert_eq!(checkout.total_tax(), 0.0);
        assert_eq!(checkout.grand_total(), 0.0);
        assert_eq!(checkout.calculate_total(), 0.0);
    }

    #[test]
    fn test_thriller_scenario() {
        let mut checkout = checkout_at(0.2);
        checkout.add_item(thriller());

        assert!((checkout.subtotal() - 12.99).abs() < EPSILON);
        assert!((checkout.total_tax() - 2.598).abs() < EPSILON);
        assert!((checkout.calculate_total() - 15.588).abs() < EPSILON);
    }

    /// The running total grows on every call; it is never reset.
    #[test]
    fn test_calculate_total_accumulates_across_calls() {
        let mut checkout = checkout_at(0.2);
        checkout.add_item(thriller());

        let first = checkout.calculate_total();
        let second = checkout.calculate_total();
        let third = checkout.calculate_total();

        assert!((first - 15.588).abs() < EPSILON);
        assert!((second - 31.176).abs() < EPSILON);
        assert!((third - 46.764).abs() < EPSILON);
        assert_eq!(checkout.running_total(), third);
    }

    #[test]
    fn test_grand_total_is_stable() {
        let mut checkout = checkout_at(0.2);
        checkout.add_item(thriller());

        checkout.calculate_total();
        checkout.calculate_total();

        assert!((checkout.grand_total() - 15.588).abs() < EPSILON);
        assert_eq!(checkout.grand_total(), checkout.grand_total());
        assert!((checkout.grand_total() - (checkout.subtotal() + checkout.total_tax())).abs() < EPSILON);
    }

    #[test]
    fn test_subtotal_and_tax_are_recomputed() {
        let mut checkout = checkout_at(0.2);
        checkout.add_item(Service::new("Web Hosting", 50.0).unwrap());
        assert_eq!(checkout.subtotal(), checkout.subtotal());
        assert_eq!(checkout.total_tax(), checkout.total_tax());

        checkout.add_item(UtilityService::new("Electricity", 100.0).unwrap());
        assert!((checkout.subtotal() - 150.0).abs() < EPSILON);
        assert!((checkout.total_tax() - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_tax_sum_matches_calculator() {
        let mut checkout = checkout_at(0.2);
        checkout.add_item(thriller());
        checkout.add_item(Service::new("Web Hosting", 50.0).unwrap());
        checkout.add_item(UtilityService::new("Electricity", 100.0).unwrap());

        let expected: f64 = checkout
            .items()
            .iter()
            .map(|item| checkout.tax_calculator().calculate_tax(item))
            .sum();
        assert_eq!(checkout.total_tax(), expected);
    }

    #[test]
    fn test_duplicates_are_counted() {
        let mut checkout = checkout_at(0.0);
        checkout.add_item(thriller());
        checkout.add_item(thriller());
        assert_eq!(checkout.items().len(), 2);
        assert!((checkout.subtotal() - 25.98).abs() < EPSILON);
    }

    #[test]
    fn test_summary_display() {
        let mut checkout = checkout_at(0.2);
        checkout.add_item(thriller());
        checkout.add_item(Service::new("Web Hosting", 50.0).unwrap());
        checkout.add_item(UtilityService::new("Electricity", 100.0).unwrap());

        let summary = checkout.summary();
        assert_eq!(
            summary.to_string(),
            "Subtotal: $162.99\nTotal Tax: $32.60\nTotal Checkout: $195.59"
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let checkout = checkout_at(0.2);
        let json = serde_json::to_value(checkout.summary()).unwrap();
        assert!(json.get("totalTax").is_some());
        assert!(json.get("grandTotal").is_some());
    }
}
