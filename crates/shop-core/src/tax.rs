//! # Tax
//!
//! `TaxRate` and the `TaxCalculator` used by checkout.
//!
//! ```text
//! Item price: $12.99
//!      │
//!      ▼
//! calculate_tax(item) at 20%
//!      │
//!      ▼
//! Tax: 12.99 × 0.2 = 2.598  (unrounded; rounding is a display concern)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Chargeable;

// =============================================================================
// Tax Rate
// =============================================================================

/// A tax rate stored as a fraction (`0.2` = 20%).
///
/// ## Basis Points
/// 1 basis point = 0.01%, so `TaxRate::from_bps(2000)` is the same rate as
/// `TaxRate::from_fraction(0.2)`. Configuration uses bps because integers
/// survive environment variables without precision surprises.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Creates a rate from a fraction in `0.0..=1.0`.
    pub fn from_fraction(fraction: f64) -> CoreResult<Self> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(CoreError::InvalidTaxRate { value: fraction });
        }
        Ok(TaxRate(fraction))
    }

    /// Creates a rate from basis points (2000 = 20%).
    pub fn from_bps(bps: u32) -> CoreResult<Self> {
        TaxRate::from_fraction(f64::from(bps) / 10_000.0)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0.0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Tax Calculator
// =============================================================================

/// Computes the tax owed on a single item at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaxCalculator {
    rate: TaxRate,
}

impl TaxCalculator {
    pub const fn new(rate: TaxRate) -> Self {
        TaxCalculator { rate }
    }

    pub const fn rate(&self) -> TaxRate {
        self.rate
    }

    /// Returns `item.price() * rate`.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{PhysicalProduct, TaxCalculator, TaxRate};
    ///
    /// let calculator = TaxCalculator::new(TaxRate::from_fraction(0.2).unwrap());
    /// let cd = PhysicalProduct::new("Thriller", "Michael", "Jackson", 12.99).unwrap();
    /// assert!((calculator.calculate_tax(&cd) - 2.598).abs() < 1e-9);
    /// ```
    pub fn calculate_tax<C: Chargeable + ?Sized>(&self, item: &C) -> f64 {
        item.price() * self.rate.fraction()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
