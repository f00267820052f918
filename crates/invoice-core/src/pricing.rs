//! # Pricing Pipeline
//!
//! Validates an invoice, then composes the shipping, discount and tax rules
//! into a final total.
//!
//! ## Computation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate ──► problems? ──► PricingError::Validation (no total)         │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  subtotal    = Σ unit_price × qty                                       │
//! │  fragile_fee = Σ 5.00 × qty           (fragile items only)              │
//! │  discount    = discount(invoice, subtotal)                              │
//! │  shipping    = shipping(country, subtotal)      ◄── raw subtotal        │
//! │  tax         = tax(country, subtotal − discount) ◄── discounted amount  │
//! │                                                                         │
//! │  total = max(0, subtotal + shipping + fragile_fee + tax − discount)     │
//! │                                                                         │
//! │  subtotal > 10000.00 and not gold/platinum                              │
//! │      └──► Warning::ConsiderMembershipUpgrade                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shipping and the fragile fee are based on the raw subtotal while tax is
//! based on the discounted amount. Changing either base changes totals.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::discount::discount_breakdown;
use crate::error::{CoreResult, PricingError};
use crate::money::Money;
use crate::shipping::shipping_fee;
use crate::tax::tax_amount;
use crate::types::{Invoice, LineItem, Warning};
use crate::validation::validate_invoice;
use crate::{FRAGILE_FEE_PER_UNIT, MEMBERSHIP_UPGRADE_THRESHOLD};

// =============================================================================
// Results
// =============================================================================

/// What a caller gets back for a valid invoice: the payable total and the
/// advisories raised along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct InvoiceTotal {
    pub total: Money,
    #[ts(as = "Vec<String>")]
    pub warnings: Vec<Warning>,
}

/// Every intermediate amount of a pricing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PricingBreakdown {
    pub subtotal: Money,
    pub fragile_fee: Money,
    pub shipping: Money,
    pub tier_discount: Money,
    pub coupon_discount: Money,
    /// `tier_discount + coupon_discount`
    pub discount: Money,
    /// `subtotal - discount`; may be negative.
    pub taxable_amount: Money,
    /// May be negative when `taxable_amount` is.
    pub tax: Money,
    /// Never negative.
    pub total: Money,
    #[ts(as = "Vec<String>")]
    pub warnings: Vec<Warning>,
}

impl From<PricingBreakdown> for InvoiceTotal {
    fn from(breakdown: PricingBreakdown) -> Self {
        InvoiceTotal {
            total: breakdown.total,
            warnings: breakdown.warnings,
        }
    }
}

// =============================================================================
// Line Aggregates
// =============================================================================

/// Σ unit_price × qty over all items.
pub fn subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

/// Handling surcharge: [`FRAGILE_FEE_PER_UNIT`] per unit of every fragile item.
pub fn fragile_fee(items: &[LineItem]) -> Money {
    items
        .iter()
        .filter(|item| item.fragile)
        .map(|item| FRAGILE_FEE_PER_UNIT.multiply_quantity(item.qty))
        .sum()
}

// =============================================================================
// Pipeline
// =============================================================================

/// Prices an invoice and returns every intermediate amount.
///
/// Accepts `&Invoice` or `Option<&Invoice>`.
///
/// ## Errors
/// [`PricingError::Validation`] with all problems when the invoice is absent
/// or malformed.
pub fn compute_breakdown<'a>(invoice: impl Into<Option<&'a Invoice>>) -> CoreResult<PricingBreakdown> {
    let invoice = invoice.into();
    let problems = validate_invoice(invoice);

    let invoice = match invoice {
        Some(invoice) if problems.is_empty() => invoice,
        _ => {
            debug!(problems = problems.len(), "invoice rejected by validation");
            return Err(PricingError::Validation(problems));
        }
    };

    let subtotal = subtotal(&invoice.items);
    let fragile_fee = fragile_fee(&invoice.items);

    let discounts = discount_breakdown(invoice, subtotal);
    let discount = discounts.total();
    let mut warnings = discounts.warnings;

    let shipping = shipping_fee(&invoice.country, subtotal);

    let taxable_amount = subtotal - discount;
    let tax = tax_amount(&invoice.country, taxable_amount);

    let total = (subtotal + shipping + fragile_fee + tax - discount).floor_at_zero();

    if subtotal > MEMBERSHIP_UPGRADE_THRESHOLD && !invoice.membership.is_member() {
        warnings.push(Warning::ConsiderMembershipUpgrade);
    }

    debug!(
        invoice_id = %invoice.invoice_id,
        country = %invoice.country,
        subtotal = subtotal.cents(),
        fragile_fee = fragile_fee.cents(),
        shipping = shipping.cents(),
        discount = discount.cents(),
        tax = tax.cents(),
        total = total.cents(),
        warnings = warnings.len(),
        "invoice priced"
    );

    Ok(PricingBreakdown {
        subtotal,
        fragile_fee,
        shipping,
        tier_discount: discounts.tier,
        coupon_discount: discounts.coupon,
        discount,
        taxable_amount,
        tax,
        total,
        warnings,
    })
}

/// Prices an invoice: the payable total and the advisory warnings.
///
/// ## Example
/// ```rust
/// use invoice_core::{compute_total, Invoice, LineItem};
///
/// let invoice = Invoice::new("1", "C1", "US", "none", vec![
///     LineItem::new("SKU1", "book", 5_000, 1),
/// ]);
///
/// // 50.00 + 15.00 shipping + 4.00 tax
/// let priced = compute_total(&invoice).unwrap();
/// assert_eq!(priced.total.to_string(), "69.00");
/// assert!(priced.warnings.is_empty());
/// ```
///
/// ## Errors
/// See [`compute_breakdown`].
pub fn compute_total<'a>(invoice: impl Into<Option<&'a Invoice>>) -> CoreResult<InvoiceTotal> {
    compute_breakdown(invoice).map(InvoiceTotal::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn book(price_cents: i64, qty: i64) -> LineItem {
        LineItem::new("SKU1", "book", price_cents, qty)
    }

    #[test]
    fn test_us_single_book() {
        let invoice = Invoice::new("1", "C1", "US", "none", vec![book(10_000, 1)]);
        let breakdown = compute_breakdown(&invoice).unwrap();

        assert_eq!(breakdown.subtotal.cents(), 10_000);
        assert_eq!(breakdown.shipping.cents(), 800);
        assert_eq!(breakdown.tax.cents(), 800);
        assert_eq!(breakdown.discount, Money::zero());
        assert_eq!(breakdown.total.cents(), 11_600);
    }

    #[test]
    fn test_thailand_gold_vip20() {
        let invoice =
            Invoice::new("2", "C2", "TH", "gold", vec![book(100_000, 1)]).with_coupon("VIP20");
        let breakdown = compute_breakdown(&invoice).unwrap();

        assert_eq!(breakdown.tier_discount.cents(), 3_000);
        assert_eq!(breakdown.coupon_discount.cents(), 20_000);
        assert_eq!(breakdown.shipping, Money::zero());
        assert_eq!(breakdown.taxable_amount.cents(), 77_000);
        assert_eq!(breakdown.tax.cents(), 5_390);
        assert_eq!(breakdown.total.cents(), 82_390);
        assert!(breakdown.warnings.is_empty());
    }

    #[test]
    fn test_each_component_is_rounded_to_cents_before_summing() {
        // 3% of 2.50 = 0.075 -> 0.08, 7% of 1.92 = 0.1344 -> 0.13.
        // Rounding the unrounded sum instead would give 62.06.
        let mut invoice = Invoice::new("5", "C5", "TH", "gold", vec![book(250, 1)]);
        invoice.coupon = Some("VIP20".to_string());
        let breakdown = compute_breakdown(&invoice).unwrap();

        assert_eq!(breakdown.tier_discount.cents(), 8);
        assert_eq!(breakdown.coupon_discount.cents(), 50);
        assert_eq!(breakdown.taxable_amount.cents(), 192);
        assert_eq!(breakdown.tax.cents(), 13);
        assert_eq!(breakdown.total.cents(), 6_205);
    }

    #[test]
    fn test_fragile_fee_is_per_unit() {
        let items = vec![
            book(1_000, 3).fragile(),
            book(1_000, 2),
            LineItem::new("TV", "electronics", 50_000, 1).fragile(),
        ];
        assert_eq!(fragile_fee(&items).cents(), 2_000);
        assert_eq!(subtotal(&items).cents(), 55_000);
    }

    #[test]
    fn test_fragile_fee_does_not_affect_shipping_or_tax() {
        // subtotal 190.00 stays under the 200.00 rest-of-world threshold
        // even though the fragile fee pushes the charge above it
        let invoice = Invoice::new("3", "C3", "DE", "none", vec![book(1_900, 10).fragile()]);
        let breakdown = compute_breakdown(&invoice).unwrap();

        assert_eq!(breakdown.fragile_fee.cents(), 5_000);
        assert_eq!(breakdown.shipping.cents(), 2_500);
        assert_eq!(breakdown.tax.cents(), 950);
        assert_eq!(breakdown.total.cents(), 19_000 + 2_500 + 5_000 + 950);
    }

    #[test]
    fn test_upgrade_warning_for_large_non_member_order() {
        let invoice = Invoice::new("4", "C4", "JP", "none", vec![book(1_100_000, 1)]);
        let priced = compute_total(&invoice).unwrap();
        assert_eq!(priced.warnings, vec![Warning::ConsiderMembershipUpgrade]);

        let platinum = Invoice::new("4", "C4", "JP", "platinum", vec![book(1_100_000, 1)]);
        assert!(compute_total(&platinum).unwrap().warnings.is_empty());
    }

    #[test]
    fn test_upgrade_threshold_is_strict() {
        let invoice = Invoice::new("5", "C5", "JP", "none", vec![book(1_000_000, 1)]);
        assert!(compute_total(&invoice).unwrap().warnings.is_empty());
    }

    #[test]
    fn test_unknown_coupon_comes_before_upgrade_warning() {
        let invoice =
            Invoice::new("6", "C6", "US", "none", vec![book(1_100_000, 1)]).with_coupon("FOO");
        let priced = compute_total(&invoice).unwrap();
        assert_eq!(
            priced.warnings,
            vec![Warning::UnknownCoupon, Warning::ConsiderMembershipUpgrade]
        );
    }

    #[test]
    fn test_free_items_total_is_never_negative() {
        // subtotal 0: rest-of-world shipping 25.00, nothing else
        let invoice = Invoice::new("7", "C7", "XX", "none", vec![book(0, 1)]);
        let breakdown = compute_breakdown(&invoice).unwrap();
        assert_eq!(breakdown.total.cents(), 2_500);
        assert!(!breakdown.total.is_negative());
    }

    #[test]
    fn test_empty_items_is_rejected() {
        let invoice = Invoice::new("3", "C3", "TH", "none", vec![]);
        let err = compute_total(&invoice).unwrap_err();
        assert!(err.to_string().contains("Invoice must contain items"));
        assert_eq!(err.problems(), &[ValidationError::NoItems]);
    }

    #[test]
    fn test_missing_invoice_is_rejected() {
        let err = compute_total(None).unwrap_err();
        assert_eq!(err.to_string(), "Invoice is missing");
    }

    #[test]
    fn test_invoice_total_serializes_warnings_as_text() {
        let invoice =
            Invoice::new("8", "C8", "US", "none", vec![book(10_000, 1)]).with_coupon("FOO");
        let json = serde_json::to_value(compute_total(&invoice).unwrap()).unwrap();
        assert_eq!(json["total"], 11_600);
        assert_eq!(json["warnings"][0], "Unknown coupon");
    }
}
