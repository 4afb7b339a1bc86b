//! # Report Math
//!
//! Pagination and totals over fetched report rows.
//!
//! ## Two Totals, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Report Computations                                │
//! │                                                                         │
//! │  On screen:          grand_total(rows)                                 │
//! │                      Σ price × quantity over ALL loaded rows           │
//! │                                                                         │
//! │  In the PDF:         page_totals(page) per 50-row page                 │
//! │                      Σ price, Σ quantity, Σ subtotal of THAT page      │
//! │                                                                         │
//! │  The two are independently defined and never reconciled against        │
//! │  each other.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::money::line_subtotal;
use crate::types::ReportRow;

/// Rows rendered per PDF page.
pub const ROWS_PER_PAGE: usize = 50;

// =============================================================================
// Pagination
// =============================================================================

/// Partitions rows into fixed-size pages, order preserved.
///
/// Produces ceil(N / [`ROWS_PER_PAGE`]) pages; zero rows yields zero pages.
pub fn paginate(rows: &[ReportRow]) -> Vec<&[ReportRow]> {
    rows.chunks(ROWS_PER_PAGE).collect()
}

// =============================================================================
// Totals
// =============================================================================

/// Sums carried by one page's trailing totals row.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTotals {
    /// Sum of unit prices on the page.
    pub price: Decimal,

    /// Sum of quantities on the page.
    pub quantity: i64,

    /// Sum of price × quantity on the page. Not a grand total.
    pub subtotal: Decimal,
}

/// Computes the totals row for one page of rows.
pub fn page_totals(rows: &[ReportRow]) -> PageTotals {
    let mut totals = PageTotals {
        price: Decimal::ZERO,
        quantity: 0,
        subtotal: Decimal::ZERO,
    };

    for row in rows {
        totals.price += row.price;
        totals.quantity += row.quantity;
        totals.subtotal += line_subtotal(row.price, row.quantity);
    }

    totals
}

/// Computes the on-screen grand total: Σ price × quantity over all rows.
///
/// Pure and deterministic; the view recomputes it on demand instead of
/// caching it.
pub fn grand_total(rows: &[ReportRow]) -> Decimal {
    rows.iter()
        .map(|row| line_subtotal(row.price, row.quantity))
        .sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(price: &str, quantity: i64) -> ReportRow {
        ReportRow {
            sale_date: Utc.with_ymd_and_hms(2024, 11, 5, 10, 30, 0).unwrap(),
            product_name: "Sugar 1kg".to_string(),
            customer: "Bob".to_string(),
            price: price.parse().unwrap(),
            quantity,
            payment_type: None,
        }
    }

    fn rows(n: usize) -> Vec<ReportRow> {
        (0..n).map(|i| row("10", i as i64 + 1)).collect()
    }

    #[test]
    fn test_paginate_page_counts() {
        assert_eq!(paginate(&rows(0)).len(), 0);
        assert_eq!(paginate(&rows(1)).len(), 1);
        assert_eq!(paginate(&rows(50)).len(), 1);
        assert_eq!(paginate(&rows(51)).len(), 2);
        assert_eq!(paginate(&rows(100)).len(), 2);
        assert_eq!(paginate(&rows(101)).len(), 3);
    }

    #[test]
    fn test_paginate_preserves_order_and_sizes() {
        let all = rows(120);
        let pages = paginate(&all);

        assert_eq!(pages[0].len(), 50);
        assert_eq!(pages[1].len(), 50);
        assert_eq!(pages[2].len(), 20);

        // First row of page 2 is row index 50 of the input.
        assert_eq!(pages[1][0], all[50]);
        assert_eq!(pages[2][19], all[119]);
    }

    #[test]
    fn test_page_totals_cover_only_that_page() {
        let all = rows(60); // quantities 1..=60 at price 10
        let pages = paginate(&all);

        let first = page_totals(pages[0]);
        assert_eq!(first.price, "500".parse().unwrap()); // 50 × 10
        assert_eq!(first.quantity, (1..=50).sum::<i64>());
        let expected: Decimal = (1..=50).map(|q| Decimal::from(q * 10)).sum();
        assert_eq!(first.subtotal, expected);

        let second = page_totals(pages[1]);
        assert_eq!(second.quantity, (51..=60).sum::<i64>());
        // Page totals plus page totals equal the grand total, but neither
        // page alone does.
        assert_ne!(first.subtotal, grand_total(&all));
        assert_eq!(first.subtotal + second.subtotal, grand_total(&all));
    }

    #[test]
    fn test_grand_total_is_sum_of_products() {
        let data = vec![row("50", 2), row("30", 1)];
        assert_eq!(grand_total(&data), "130".parse().unwrap());
    }

    #[test]
    fn test_grand_total_is_pure() {
        let data = vec![row("19.999", 3), row("0.1", 7)];
        assert_eq!(grand_total(&data), grand_total(&data));
        assert_eq!(grand_total(&data), "60.697".parse().unwrap());
    }

    #[test]
    fn test_grand_total_empty_is_zero() {
        assert_eq!(grand_total(&[]), Decimal::ZERO);
    }
}
