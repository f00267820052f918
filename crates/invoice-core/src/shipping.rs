//! # Shipping Rule
//!
//! Maps `(country, subtotal)` to a shipping fee.
//!
//! ## Fee Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  country │ tiers (first match wins, strict <)           │ otherwise     │
//! │  ────────┼──────────────────────────────────────────────┼────────────── │
//! │  TH      │ subtotal < 500.00  → 60.00                   │ 0             │
//! │  JP      │ subtotal < 4000.00 → 600.00                  │ 0             │
//! │  US      │ subtotal < 100.00  → 15.00                   │               │
//! │          │ subtotal < 300.00  → 8.00                    │ 0             │
//! │  other   │ subtotal < 200.00  → 25.00                   │ 0             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The subtotal here is the raw item subtotal: before discounts, before tax,
//! and without fragile surcharges. A subtotal sitting exactly on a threshold
//! falls through to the next (cheaper) tier.

use crate::money::Money;
use crate::types::Country;

/// One row of a country's shipping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingTier {
    /// The tier applies when the subtotal is strictly below this amount.
    pub below: Money,
    pub fee: Money,
}

impl ShippingTier {
    const fn new(below_cents: i64, fee_cents: i64) -> Self {
        ShippingTier {
            below: Money::from_cents(below_cents),
            fee: Money::from_cents(fee_cents),
        }
    }

    #[inline]
    pub fn matches(&self, subtotal: Money) -> bool {
        subtotal < self.below
    }
}

pub const THAILAND_TIERS: &[ShippingTier] = &[ShippingTier::new(50_000, 6_000)];

pub const JAPAN_TIERS: &[ShippingTier] = &[ShippingTier::new(400_000, 60_000)];

pub const UNITED_STATES_TIERS: &[ShippingTier] = &[
    ShippingTier::new(10_000, 1_500),
    ShippingTier::new(30_000, 800),
];

pub const REST_OF_WORLD_TIERS: &[ShippingTier] = &[ShippingTier::new(20_000, 2_500)];

/// The ordered tier table used for a destination.
pub fn shipping_tiers(country: &Country) -> &'static [ShippingTier] {
    match country {
        Country::Thailand => THAILAND_TIERS,
        Country::Japan => JAPAN_TIERS,
        Country::UnitedStates => UNITED_STATES_TIERS,
        Country::Other(_) => REST_OF_WORLD_TIERS,
    }
}

/// Computes the shipping fee for a destination and raw subtotal.
///
/// ## Example
/// ```rust
/// use invoice_core::money::Money;
/// use invoice_core::shipping::shipping_fee;
/// use invoice_core::Country;
///
/// let us = Country::from("US");
/// assert_eq!(shipping_fee(&us, Money::from_cents(9_999)).cents(), 1_500);
/// assert_eq!(shipping_fee(&us, Money::from_cents(10_000)).cents(), 800);
/// assert_eq!(shipping_fee(&us, Money::from_cents(30_000)).cents(), 0);
/// ```
pub fn shipping_fee(country: &Country, subtotal: Money) -> Money {
    shipping_tiers(country)
        .iter()
        .find(|tier| tier.matches(subtotal))
        .map(|tier| tier.fee)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(country: &str, subtotal_cents: i64) -> i64 {
        shipping_fee(&Country::from(country), Money::from_cents(subtotal_cents)).cents()
    }

    #[test]
    fn test_thailand_threshold_is_strict() {
        assert_eq!(fee("TH", 49_999), 6_000);
        assert_eq!(fee("TH", 50_000), 0);
    }

    #[test]
    fn test_japan() {
        assert_eq!(fee("JP", 0), 60_000);
        assert_eq!(fee("JP", 399_999), 60_000);
        assert_eq!(fee("JP", 400_000), 0);
    }

    #[test]
    fn test_united_states_two_tiers() {
        assert_eq!(fee("US", 9_999), 1_500);
        assert_eq!(fee("US", 10_000), 800);
        assert_eq!(fee("US", 29_999), 800);
        assert_eq!(fee("US", 30_000), 0);
    }

    #[test]
    fn test_rest_of_world() {
        assert_eq!(fee("DE", 19_999), 2_500);
        assert_eq!(fee("DE", 20_000), 0);
        // lower-case codes are not recognised
        assert_eq!(fee("us", 9_999), 2_500);
    }

    #[test]
    fn test_tables_are_ordered_by_threshold() {
        for tiers in [
            THAILAND_TIERS,
            JAPAN_TIERS,
            UNITED_STATES_TIERS,
            REST_OF_WORLD_TIERS,
        ] {
            assert!(tiers.windows(2).all(|pair| pair[0].below < pair[1].below));
        }
    }
}
