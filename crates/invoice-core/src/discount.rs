//! # Discount Rule
//!
//! Two additive components, both computed on the original subtotal:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Tier discount (exactly one branch)                                  │
//! │     gold      → 3% of subtotal                                          │
//! │     platinum  → 5% of subtotal                                          │
//! │     otherwise → 20.00 flat if subtotal > 3000.00, else 0                │
//! │                                                                         │
//! │  2. Coupon discount                                                     │
//! │     absent / blank     → 0, no warning                                  │
//! │     known code         → rate × subtotal                                │
//! │     unknown code       → 0, Warning::UnknownCoupon                      │
//! │                                                                         │
//! │  discount = tier + coupon   (no compounding)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{Invoice, Membership, Rate, Warning};

// =============================================================================
// Rule Tables
// =============================================================================

/// Coupon codes and their rates. Codes match exactly and case-sensitively.
pub const COUPON_RATES: &[(&str, Rate)] = &[
    ("WELCOME10", Rate::from_bps(1_000)),
    ("VIP20", Rate::from_bps(2_000)),
    ("STUDENT5", Rate::from_bps(500)),
];

pub const GOLD_RATE: Rate = Rate::from_bps(300);
pub const PLATINUM_RATE: Rate = Rate::from_bps(500);

/// Non-members get [`FLAT_DISCOUNT`] once the subtotal is strictly above this.
pub const FLAT_DISCOUNT_THRESHOLD: Money = Money::from_cents(300_000);
pub const FLAT_DISCOUNT: Money = Money::from_cents(2_000);

/// Looks a coupon code up in [`COUPON_RATES`].
///
/// The code is matched as given; trimming is the caller's job.
pub fn coupon_rate(code: &str) -> Option<Rate> {
    COUPON_RATES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rate)| *rate)
}

// =============================================================================
// Discount Breakdown
// =============================================================================

/// The discount split into its two components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountBreakdown {
    pub tier: Money,
    pub coupon: Money,
    /// Coupon-related warnings only.
    pub warnings: Vec<Warning>,
}

impl DiscountBreakdown {
    pub fn total(&self) -> Money {
        self.tier + self.coupon
    }
}

/// Membership discount, or the flat fallback for non-members.
pub fn tier_discount(membership: &Membership, subtotal: Money) -> Money {
    match membership {
        Membership::Gold => subtotal.apply_rate(GOLD_RATE),
        Membership::Platinum => subtotal.apply_rate(PLATINUM_RATE),
        Membership::NonMember(_) if subtotal > FLAT_DISCOUNT_THRESHOLD => FLAT_DISCOUNT,
        Membership::NonMember(_) => Money::zero(),
    }
}

/// Coupon discount for an already-trimmed code.
///
/// Returns the amount and, for a code missing from the table, the warning to
/// surface. `None` means no coupon was entered.
pub fn coupon_discount(code: Option<&str>, subtotal: Money) -> (Money, Option<Warning>) {
    match code {
        None => (Money::zero(), None),
        Some(code) => match coupon_rate(code) {
            Some(rate) => (subtotal.apply_rate(rate), None),
            None => (Money::zero(), Some(Warning::UnknownCoupon)),
        },
    }
}

/// Computes both discount components for an invoice.
///
/// Each component is rounded to cents on its own; the total discount is the
/// sum of the rounded components.
pub fn discount_breakdown(invoice: &Invoice, subtotal: Money) -> DiscountBreakdown {
    let tier = tier_discount(&invoice.membership, subtotal);
    let (coupon, warning) = coupon_discount(invoice.coupon_code(), subtotal);

    DiscountBreakdown {
        tier,
        coupon,
        warnings: warning.into_iter().collect(),
    }
}

/// Total discount and coupon warnings for an invoice.
///
/// ## Example
/// ```rust
/// use invoice_core::discount::compute_discount;
/// use invoice_core::money::Money;
/// use invoice_core::{Invoice, LineItem};
///
/// let invoice = Invoice::new("2", "C2", "TH", "gold", vec![
///     LineItem::new("SKU1", "book", 100_000, 1),
/// ])
/// .with_coupon("VIP20");
///
/// let (discount, warnings) = compute_discount(&invoice, Money::from_cents(100_000));
/// assert_eq!(discount.cents(), 23_000);
/// assert!(warnings.is_empty());
/// ```
pub fn compute_discount(invoice: &Invoice, subtotal: Money) -> (Money, Vec<Warning>) {
    let breakdown = discount_breakdown(invoice, subtotal);
    (breakdown.total(), breakdown.warnings)
}
