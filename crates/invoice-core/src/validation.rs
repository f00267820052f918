//! # Validation Module
//!
//! Structural and semantic checks run before any amount is computed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Validation                                 │
//! │                                                                         │
//! │  invoice absent? ──► [InvoiceMissing]  (stop, nothing else to check)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Header checks                                                          │
//! │  ├── invoice_id  empty? ──► MissingField                                │
//! │  ├── customer_id empty? ──► MissingField                                │
//! │  └── items       empty? ──► NoItems                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Per line item, in order                                                │
//! │  ├── sku empty?            ──► MissingSku                               │
//! │  ├── qty <= 0?             ──► InvalidQuantity                          │
//! │  ├── unit price < 0?       ──► InvalidPrice                             │
//! │  └── category unknown?     ──► UnknownCategory                          │
//! │                                                                         │
//! │  Every problem is collected; nothing short-circuits after the header.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::validation::validate_invoice;
//! use invoice_core::{Invoice, LineItem};
//!
//! let invoice = Invoice::new("INV-1", "C-1", "US", "none", vec![
//!     LineItem::new("SKU1", "book", 10_000, 1),
//! ]);
//! assert!(validate_invoice(&invoice).is_empty());
//! assert_eq!(validate_invoice(None).len(), 1);
//! ```

use crate::error::ValidationError;
use crate::types::{Category, Invoice, LineItem};

/// Result type for single-field validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Invoice Validator
// =============================================================================

/// Validates an invoice and returns every problem found, in detection order.
///
/// An empty vector means the invoice may be priced. Accepts `&Invoice` or
/// `Option<&Invoice>`; `None` yields exactly [`ValidationError::InvoiceMissing`].
pub fn validate_invoice<'a>(invoice: impl Into<Option<&'a Invoice>>) -> Vec<ValidationError> {
    let Some(invoice) = invoice.into() else {
        return vec![ValidationError::InvoiceMissing];
    };

    let mut problems = Vec::new();

    let header = [
        validate_required("invoice_id", &invoice.invoice_id),
        validate_required("customer_id", &invoice.customer_id),
        validate_has_items(&invoice.items),
    ];
    problems.extend(header.into_iter().filter_map(Result::err));

    for item in &invoice.items {
        problems.extend(validate_line_item(item));
    }

    problems
}

/// Validates one line item, returning all of its problems.
pub fn validate_line_item(item: &LineItem) -> Vec<ValidationError> {
    [
        validate_sku(&item.sku),
        validate_quantity(&item.sku, item.qty),
        validate_price_cents(&item.sku, item.unit_price_cents),
        validate_category(&item.sku, &item.category),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a header field is present.
///
/// Emptiness is literal: a value of `" "` is accepted.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }

    Ok(())
}

/// Validates that the invoice carries at least one line item.
pub fn validate_has_items(items: &[LineItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    Ok(())
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Example
/// ```rust
/// use invoice_core::validation::validate_sku;
///
/// assert!(validate_sku("SKU1").is_ok());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.is_empty() {
        return Err(ValidationError::MissingSku);
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(sku: &str, qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::InvalidQuantity {
            sku: sku.to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use invoice_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("SKU1", 1099).is_ok());
/// assert!(validate_price_cents("SKU1", 0).is_ok());
/// assert!(validate_price_cents("SKU1", -100).is_err());
/// ```
pub fn validate_price_cents(sku: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::InvalidPrice {
            sku: sku.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Category Validator
// =============================================================================

pub fn validate_category(sku: &str, category: &Category) -> ValidationResult<()> {
    if !category.is_recognized() {
        return Err(ValidationError::UnknownCategory {
            sku: sku.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
