//! # Domain Types
//!
//! The invoice as the pricing pipeline sees it.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │    Invoice      │ 1    n │    LineItem     │                         │
//! │  │  ─────────────  │───────►│  ─────────────  │                         │
//! │  │  invoice_id     │        │  sku            │                         │
//! │  │  customer_id    │        │  category       │                         │
//! │  │  country        │        │  unit_price     │                         │
//! │  │  membership     │        │  qty            │                         │
//! │  │  coupon?        │        │  fragile        │                         │
//! │  └─────────────────┘        └─────────────────┘                         │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Country      │   │   Membership    │   │    Category     │        │
//! │  │  TH / JP / US   │   │  gold           │   │  book / food    │        │
//! │  │  Other(code)    │   │  platinum       │   │  electronics    │        │
//! │  └─────────────────┘   │  NonMember(raw) │   │  other          │        │
//! │                        └─────────────────┘   │  Unrecognized   │        │
//! │  ┌─────────────────┐   ┌─────────────────┐   └─────────────────┘        │
//! │  │      Rate       │   │    Warning      │                              │
//! │  │  bps (u32)      │   │  advisory only  │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Open Enums
//! `Country`, `Membership` and `Category` keep the raw string of values they
//! do not recognise. Country and membership fall back to the rest-of-world and
//! non-member rules; an unrecognised category is rejected by
//! [`crate::validation`], which needs the original text to exist first.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7% (Thai VAT), 2000 bps = 20% (VIP20 coupon)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate(u32);

impl Rate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category of a line item.
///
/// No pricing rule reads the category. An unrecognised value is still a
/// validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Book,
    Food,
    Electronics,
    Other,
    /// Anything outside the four known categories, kept verbatim.
    Unrecognized(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Book => "book",
            Category::Food => "food",
            Category::Electronics => "electronics",
            Category::Other => "other",
            Category::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "book" => Category::Book,
            "food" => Category::Food,
            "electronics" => Category::Electronics,
            "other" => Category::Other,
            raw => Category::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Country
// =============================================================================

/// Destination country, matched on its exact code.
///
/// Codes are case-sensitive: `"th"` is not Thailand and is priced with the
/// rest-of-world rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Country {
    /// `TH`
    Thailand,
    /// `JP`
    Japan,
    /// `US`
    UnitedStates,
    /// Rest of world, with the code as given.
    Other(String),
}

impl Country {
    pub fn code(&self) -> &str {
        match self {
            Country::Thailand => "TH",
            Country::Japan => "JP",
            Country::UnitedStates => "US",
            Country::Other(code) => code.as_str(),
        }
    }
}

impl From<&str> for Country {
    fn from(value: &str) -> Self {
        match value {
            "TH" => Country::Thailand,
            "JP" => Country::Japan,
            "US" => Country::UnitedStates,
            code => Country::Other(code.to_string()),
        }
    }
}

impl From<String> for Country {
    fn from(value: String) -> Self {
        Country::from(value.as_str())
    }
}

impl From<Country> for String {
    fn from(value: Country) -> Self {
        match value {
            Country::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Membership
// =============================================================================

/// Customer membership tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Membership {
    Gold,
    Platinum,
    /// Any other value (`"none"`, `""`, `"silver"`, ...), kept verbatim.
    NonMember(String),
}

impl Membership {
    pub fn as_str(&self) -> &str {
        match self {
            Membership::Gold => "gold",
            Membership::Platinum => "platinum",
            Membership::NonMember(raw) => raw.as_str(),
        }
    }

    /// True for the tiers that earn a membership discount.
    pub fn is_member(&self) -> bool {
        matches!(self, Membership::Gold | Membership::Platinum)
    }
}

impl Default for Membership {
    fn default() -> Self {
        Membership::NonMember("none".to_string())
    }
}

impl From<&str> for Membership {
    fn from(value: &str) -> Self {
        match value {
            "gold" => Membership::Gold,
            "platinum" => Membership::Platinum,
            raw => Membership::NonMember(raw.to_string()),
        }
    }
}

impl From<String> for Membership {
    fn from(value: String) -> Self {
        Membership::from(value.as_str())
    }
}

impl From<Membership> for String {
    fn from(value: Membership) -> Self {
        match value {
            Membership::NonMember(raw) => raw,
            tier => tier.as_str().to_string(),
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One line of an invoice.
///
/// Quantity and price are signed on purpose: the validator, not the type
/// system, decides what a bad line looks like so that every defect can be
/// reported in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Stock Keeping Unit.
    pub sku: String,

    #[ts(as = "String")]
    pub category: Category,

    /// Unit price in minor units.
    pub unit_price_cents: i64,

    pub qty: i64,

    /// Fragile items carry a per-unit handling surcharge.
    #[serde(default)]
    pub fragile: bool,
}

impl LineItem {
    /// Creates a non-fragile line item.
    pub fn new(
        sku: impl Into<String>,
        category: impl Into<Category>,
        unit_price_cents: i64,
        qty: i64,
    ) -> Self {
        LineItem {
            sku: sku.into(),
            category: category.into(),
            unit_price_cents,
            qty,
            fragile: false,
        }
    }

    /// Marks the item as fragile.
    pub fn fragile(mut self) -> Self {
        self.fragile = true;
        self
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.qty)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer invoice ready to be priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub invoice_id: String,

    pub customer_id: String,

    #[ts(as = "String")]
    pub country: Country,

    #[serde(default)]
    #[ts(as = "String")]
    pub membership: Membership,

    /// Coupon code as entered. Blank means "no coupon".
    #[serde(default)]
    pub coupon: Option<String>,

    pub items: Vec<LineItem>,
}

impl Invoice {
    /// Creates an invoice without a coupon.
    pub fn new(
        invoice_id: impl Into<String>,
        customer_id: impl Into<String>,
        country: impl Into<Country>,
        membership: impl Into<Membership>,
        items: Vec<LineItem>,
    ) -> Self {
        Invoice {
            invoice_id: invoice_id.into(),
            customer_id: customer_id.into(),
            country: country.into(),
            membership: membership.into(),
            coupon: None,
            items,
        }
    }

    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    /// The coupon code with surrounding whitespace removed, or `None` when
    /// absent or blank.
    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

// =============================================================================
// Warning
// =============================================================================

/// A non-fatal advisory returned next to a successfully computed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A non-blank coupon code was not found in the coupon table.
    UnknownCoupon,
    /// A large order was placed without a membership tier.
    ConsiderMembershipUpgrade,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Warning::UnknownCoupon => "Unknown coupon",
            Warning::ConsiderMembershipUpgrade => "Consider membership upgrade",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Warnings leave the crate as their human-readable message.
impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from("book"), Category::Book);
        assert_eq!(Category::from("electronics"), Category::Electronics);
        assert_eq!(
            Category::from("Book"),
            Category::Unrecognized("Book".to_string())
        );
        assert!(!Category::from("toys").is_recognized());
    }

    #[test]
    fn test_country_is_case_sensitive() {
        assert_eq!(Country::from("TH"), Country::Thailand);
        assert_eq!(Country::from("th"), Country::Other("th".to_string()));
        assert_eq!(Country::from("DE").code(), "DE");
    }

    #[test]
    fn test_membership_tiers() {
        assert!(Membership::from("gold").is_member());
        assert!(Membership::from("platinum").is_member());
        assert!(!Membership::from("none").is_member());
        assert!(!Membership::from("Gold").is_member());
        assert!(!Membership::default().is_member());
    }

    #[test]
    fn test_coupon_code_trims_and_blanks() {
        let invoice = Invoice::new("1", "C1", "US", "none", vec![]);
        assert_eq!(invoice.coupon_code(), None);
        assert_eq!(invoice.clone().with_coupon("   ").coupon_code(), None);
        assert_eq!(invoice.clone().with_coupon("").coupon_code(), None);
        assert_eq!(
            invoice.with_coupon("  VIP20\t").coupon_code(),
            Some("VIP20")
        );
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("SKU1", "book", 250, 4);
        assert_eq!(item.line_total().cents(), 1000);
        assert!(!item.fragile);
        assert!(item.fragile().fragile);
    }

    #[test]
    fn test_invoice_json_shape() {
        let json = r#"{
            "invoice_id": "INV-1",
            "customer_id": "C-1",
            "country": "JP",
            "membership": "silver",
            "items": [
                {"sku": "A", "category": "food", "unit_price_cents": 500, "qty": 2},
                {"sku": "B", "category": "toys", "unit_price_cents": 100, "qty": 1, "fragile": true}
            ]
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.country, Country::Japan);
        assert_eq!(invoice.membership, Membership::NonMember("silver".to_string()));
        assert_eq!(invoice.coupon, None);
        assert!(!invoice.items[0].fragile);
        assert!(invoice.items[1].fragile);
        assert_eq!(
            invoice.items[1].category,
            Category::Unrecognized("toys".to_string())
        );

        let back = serde_json::to_value(&invoice).unwrap();
        assert_eq!(back["country"], "JP");
        assert_eq!(back["membership"], "silver");
        assert_eq!(back["items"][1]["category"], "toys");
    }

    #[test]
    fn test_warning_serializes_as_message() {
        let json = serde_json::to_string(&vec![
            Warning::UnknownCoupon,
            Warning::ConsiderMembershipUpgrade,
        ])
        .unwrap();
        assert_eq!(json, r#"["Unknown coupon","Consider membership upgrade"]"#);
    }
}
