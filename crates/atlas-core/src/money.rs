//! # Amount Arithmetic
//!
//! Decimal helpers for prices, subtotals, and totals.
//!
//! ## Why Decimal, Not Float
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Amount Representation                               │
//! │                                                                         │
//! │  Wire format:   plain JSON numbers (e.g. 19.99, 19.999)                │
//! │  In memory:     rust_decimal::Decimal                                  │
//! │                                                                         │
//! │  • Sums and price × quantity products are exact                        │
//! │  • Server-authored values survive unrounded (19.999 stays 19.999)      │
//! │  • Two-decimal display rounding happens only at format time            │
//! │                                                                         │
//! │  Binary floats would accumulate drift across 50-row page totals;       │
//! │  integer cents would silently alter three-decimal wire values.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

// =============================================================================
// Parsing
// =============================================================================

/// Parses a user-entered amount string.
///
/// Returns `None` when the input is not a number. Range rules (positivity)
/// live in [`crate::validation`]; this only answers "is it numeric".
///
/// ## Example
/// ```rust
/// use atlas_core::money::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("19.999"), "19.999".parse::<Decimal>().ok());
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(input: &str) -> Option<Decimal> {
    input.trim().parse::<Decimal>().ok()
}

// =============================================================================
// Arithmetic
// =============================================================================

/// Computes a line subtotal: unit price × quantity.
///
/// Exact decimal multiplication; no rounding is applied here.
pub fn line_subtotal(price: Decimal, quantity: i64) -> Decimal {
    price * Decimal::from(quantity)
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount with exactly two decimal places.
///
/// Rounds half away from zero, matching how the exported documents and
/// spreadsheets present prices and subtotals.
///
/// ## Example
/// ```rust
/// use atlas_core::money::format_amount;
/// use rust_decimal::Decimal;
///
/// let price: Decimal = "19.999".parse().unwrap();
/// assert_eq!(format_amount(price), "20.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

// =============================================================================
// Unit Tests
// =============================================================================
