//! # Tax Rule
//!
//! One flat rate per destination, applied to the taxable amount
//! (subtotal minus discount).
//!
//! | country | rate |
//! |---------|------|
//! | TH      | 7%   |
//! | JP      | 10%  |
//! | US      | 8%   |
//! | other   | 5%   |
//!
//! A discount larger than the subtotal makes the taxable amount negative, and
//! the tax negative with it. That is accepted: the final total is floored at
//! zero by the pipeline, not here.

use crate::money::Money;
use crate::types::{Country, Rate};

pub const THAILAND_TAX_RATE: Rate = Rate::from_bps(700);
pub const JAPAN_TAX_RATE: Rate = Rate::from_bps(1_000);
pub const UNITED_STATES_TAX_RATE: Rate = Rate::from_bps(800);
pub const DEFAULT_TAX_RATE: Rate = Rate::from_bps(500);

pub fn tax_rate(country: &Country) -> Rate {
    match country {
        Country::Thailand => THAILAND_TAX_RATE,
        Country::Japan => JAPAN_TAX_RATE,
        Country::UnitedStates => UNITED_STATES_TAX_RATE,
        Country::Other(_) => DEFAULT_TAX_RATE,
    }
}

/// Tax owed on `taxable_amount` for the destination.
///
/// ## Example
/// ```rust
/// use invoice_core::money::Money;
/// use invoice_core::tax::tax_amount;
/// use invoice_core::Country;
///
/// let taxable = Money::from_cents(77_000);
/// assert_eq!(tax_amount(&Country::from("TH"), taxable).cents(), 5_390);
/// ```
pub fn tax_amount(country: &Country, taxable_amount: Money) -> Money {
    taxable_amount.apply_rate(tax_rate(country))
}
