//! # Money Module
//!
//! Provides the `Money` type for every amount the pricing pipeline touches:
//! unit prices, subtotals, fees, discounts, tax and the final total.
//!
//! ## Cents, Not Floats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    (1000.0 - 230.0) * 0.07 = 53.900000000000006                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    77000 cents × 700 bps / 10000 = 5390 cents (exact)                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is currency-agnostic: a `Money` is "minor units of whatever
//! currency the invoice is billed in". Nothing here converts between them.
//!
//! ## Usage
//! ```rust
//! use invoice_core::money::Money;
//! use invoice_core::types::Rate;
//!
//! let price = Money::from_major_minor(10, 99);
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.cents(), 3297);
//!
//! let tax = Money::from_cents(77_000).apply_rate(Rate::from_bps(700));
//! assert_eq!(tax.cents(), 5390);
//! ```

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Representation
/// - **i64 (signed)**: tax on an over-discounted invoice is negative, so the
///   intermediate values must be able to go below zero
/// - **Saturating arithmetic**: absurd quantities clamp at the `i64` bounds
///   instead of panicking in the middle of a computation
/// - **Serialized as a bare integer**: `{"total": 82390}`
///
/// ## Where Money Flows
/// ```text
/// LineItem.unit_price ──► × qty ──► subtotal ──┬──► shipping table
///                                              ├──► discount rules
///                                              └──► (− discount) ──► tax
///
/// subtotal + shipping + fragile fee + tax − discount ──► floor at 0 ──► total
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(823, 90).cents(), 82390);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// The sign lives on the major part; the minor part is always 0..=99.
    /// `from_major_minor(-5, 50)` is -5.50, not -4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative values to zero.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-20).floor_at_zero(), Money::zero());
    /// assert_eq!(Money::from_cents(20).floor_at_zero().cents(), 20);
    /// ```
    #[inline]
    pub fn floor_at_zero(self) -> Self {
        self.max(Money::zero())
    }

    /// Applies a basis-point rate and rounds half-up to the nearest minor unit.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  result = floor((amount × bps + 5000) / 10000)                      │
    /// │                                                                     │
    /// │   77000 × 700  → 5390.0000 → 5390                                   │
    /// │     995 × 300  →   29.8500 →   30   (half goes up)                  │
    /// │   -1050 × 500  →  -52.5000 →  -52   (half goes toward +∞)           │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    /// Flooring (instead of truncating) keeps the rule identical for negative
    /// amounts, which show up when a discount exceeds the subtotal.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    /// use invoice_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(100_000);
    /// assert_eq!(subtotal.apply_rate(Rate::from_bps(300)).cents(), 3000);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        // i128 so that amount × bps cannot overflow
        let scaled = (self.0 as i128 * rate.bps() as i128 + 5000).div_euclid(10000);
        Money::from_cents(scaled.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Line total for `qty` units at this price.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering, e.g. `823.90`. No currency symbol: the invoice
/// country decides the currency, not this type.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_units().unsigned_abs(),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
