//! # invoice-core: Pure Invoice Pricing
//!
//! Computes the payable total and advisory warnings for a customer invoice.
//! Everything in this crate is a pure function of its input: no I/O, no
//! clock, no shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │            Collaborators (invoice-cli, billing, ...)            │    │
//! │  │     parse transport format ──► Invoice ──► present result       │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ compute_total(&invoice)                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ invoice-core (THIS CRATE) ★                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │validation │  │ shipping  │  │ discount  │  │    tax    │    │    │
//! │  │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────┬─────┘    │    │
//! │  │         └──────────────┴──────┬───────┴──────────────┘          │    │
//! │  │                        ┌──────▼──────┐                          │    │
//! │  │                        │   pricing   │                          │    │
//! │  │                        └─────────────┘                          │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Invoice, LineItem, Country, Membership, Category, Warning
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation and pricing errors
//! - [`validation`] - Invoice well-formedness rules
//! - [`shipping`] - Country shipping fee tables
//! - [`discount`] - Membership tiers and coupon table
//! - [`tax`] - Country tax rates
//! - [`pricing`] - The pipeline composing all of the above
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same invoice in, same total and warnings out
//! 2. **Integer Money**: amounts are minor units (i64), rates are basis points
//! 3. **All Problems At Once**: validation reports every defect, never just the first
//! 4. **Warnings Are Not Errors**: advisories ride along with a successful total
//!
//! ## Example Usage
//!
//! ```rust
//! use invoice_core::{compute_total, Invoice, LineItem, Warning};
//!
//! let invoice = Invoice::new("INV-2", "C2", "TH", "gold", vec![
//!     LineItem::new("SKU1", "book", 100_000, 1),
//! ])
//! .with_coupon("VIP20");
//!
//! // 1000.00 − 30.00 (gold) − 200.00 (VIP20) + 7% tax on 770.00
//! let priced = compute_total(&invoice).unwrap();
//! assert_eq!(priced.total.to_string(), "823.90");
//! assert!(priced.warnings.is_empty());
//!
//! let unknown = invoice.clone().with_coupon("FOO");
//! assert_eq!(compute_total(&unknown).unwrap().warnings, vec![Warning::UnknownCoupon]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod shipping;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use invoice_core::Money` instead of
// `use invoice_core::money::Money`

pub use error::{CoreResult, PricingError, ValidationError};
pub use money::Money;
pub use pricing::{compute_breakdown, compute_total, InvoiceTotal, PricingBreakdown};
pub use types::*;
pub use validation::validate_invoice;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Handling surcharge per unit of a fragile line item (5.00).
///
/// Added to the total after tax; it is neither taxed nor counted toward the
/// shipping thresholds.
pub const FRAGILE_FEE_PER_UNIT: Money = Money::from_cents(500);

/// Non-members ordering strictly more than this (10000.00) are told about
/// membership.
pub const MEMBERSHIP_UPGRADE_THRESHOLD: Money = Money::from_cents(1_000_000);
