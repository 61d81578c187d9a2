//! # Money Module
//!
//! Provides the `Price` type for item costs and the two-decimal formatting
//! shared by every renderer.
//!
//! ## Why a Newtype Over f64?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE INVARIANT                                                        │
//! │                                                                         │
//! │  Raw f64 accepts:   -3.0, NaN, inf             ❌ not a price           │
//! │  Price accepts:      0.0, 12.99, 1e6           ✅ finite, >= 0          │
//! │                                                                         │
//! │  Price::new() is the only way in, so every item in the catalog         │
//! │  carries a valid amount from construction onwards.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts stay `f64` because tax is a plain `price * rate` product
//! (`12.99 * 0.2 = 2.598`), with rounding applied only when displayed.
//!
//! ## Usage
//! ```rust
//! use shop_core::money::{format_amount, Price};
//!
//! let price = Price::new(12.99).unwrap();
//! assert_eq!(price.to_string(), "$12.99");
//! assert_eq!(format_amount(12.999), "13.00");
//! assert!(Price::new(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative, finite monetary amount.
///
/// Serializes as a bare number. Deserialization goes through
/// [`Price::new`], so a stored `-1` is rejected rather than smuggled in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Creates a price, rejecting negative and non-finite amounts.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Price;
    ///
    /// assert_eq!(Price::new(9.99).unwrap().amount(), 9.99);
    /// assert!(Price::new(f64::NAN).is_err());
    /// ```
    pub fn new(amount: f64) -> CoreResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::InvalidPrice { value: amount });
        }
        Ok(Price(amount))
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Checks if the price is zero (free item).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns the amount as a two-decimal string without currency sign.
    pub fn to_fixed(&self) -> String {
        format_amount(self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = CoreError;

    fn try_from(amount: f64) -> CoreResult<Self> {
        Price::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}

/// Displays as `$12.99`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", format_amount(self.0))
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount to exactly two decimals.
///
/// Rounds half away from zero at the cent (`0.125` → `"0.13"`).
/// No thousands separators.
///
/// ## Example
/// ```rust
/// use shop_core::money::format_amount;
///
/// assert_eq!(format_amount(12.999), "13.00");
/// assert_eq!(format_amount(50.0), "50.00");
/// assert_eq!(format_amount(1200.0), "1200.00");
/// ```
pub fn format_amount(amount: f64) -> String {
    let scaled = amount * 100.0;

    // Past ~1.8e306 the cent scaling overflows; such amounts have no
    // fractional part left to round
    if !scaled.is_finite() {
        return format!("{:.2}", amount);
    }

    // `+ 0.0` folds -0.0 into 0.0 so tiny negatives never print "-0.00"
    let rounded = scaled.round() / 100.0 + 0.0;
    format!("{:.2}", rounded)
}

// =============================================================================
// Unit Tests
// =============================================================================
