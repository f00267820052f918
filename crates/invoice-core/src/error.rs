//! # Error Types
//!
//! Domain-specific error types for invoice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  invoice-core errors (this file)                                        │
//! │  ├── ValidationError  - One defect found in an invoice                  │
//! │  └── PricingError     - Why a total could not be computed               │
//! │                                                                         │
//! │  invoice-cli errors (separate crate)                                    │
//! │  └── CliError         - Config, I/O, JSON, and PricingError             │
//! │                                                                         │
//! │  Flow: ValidationError* → PricingError::Validation → CliError → exit 2  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Advisory warnings (unknown coupon, upgrade suggestion) are NOT errors;
//! they travel with a successful result as [`crate::types::Warning`].
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending SKU in per-item messages
//! 3. Report every defect at once, never only the first

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single problem found while validating an invoice.
///
/// The `Display` text of each variant is the exact message callers see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No invoice was supplied at all.
    #[error("Invoice is missing")]
    InvoiceMissing,

    /// A required header field is empty.
    #[error("Missing {field}")]
    MissingField { field: &'static str },

    /// The invoice has no line items.
    #[error("Invoice must contain items")]
    NoItems,

    /// A line item has an empty SKU.
    #[error("Item sku is missing")]
    MissingSku,

    /// A line item quantity is zero or negative.
    #[error("Invalid qty for {sku}")]
    InvalidQuantity { sku: String },

    /// A line item unit price is negative.
    #[error("Invalid price for {sku}")]
    InvalidPrice { sku: String },

    /// A line item category is outside book/food/electronics/other.
    #[error("Unknown category for {sku}")]
    UnknownCategory { sku: String },
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Failure of the pricing pipeline.
///
/// ## When This Occurs
/// Only when validation reports at least one problem. The pipeline never
/// computes a partial total.
///
/// ```text
/// compute_total(invoice)
///      │
///      ▼
/// validate → [MissingField{customer_id}, NoItems]
///      │
///      ▼
/// PricingError::Validation
///      │
///      ▼
/// "Missing customer_id; Invoice must contain items"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("{}", join_problems(.0))]
    Validation(Vec<ValidationError>),
}

impl PricingError {
    /// The individual problems behind this error, in detection order.
    pub fn problems(&self) -> &[ValidationError] {
        match self {
            PricingError::Validation(problems) => problems,
        }
    }
}

fn join_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type CoreResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
