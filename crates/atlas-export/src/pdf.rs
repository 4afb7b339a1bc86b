//! # Paginated Report PDF
//!
//! Lays the current report out as an A4 document, 50 rows per page, each
//! page closed by its own bold totals row.
//!
//! ## Page Anatomy
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ Sales Report - Page 2                         │  header, 10mm from top
//! │                                               │
//! │ Date      Product   Customer  Price Qty  Sub  │  column heads, 20mm
//! │ ───────────────────────────────────────────── │
//! │ 2026-03-01 Widget   Asha      50.00  2 100.00 │
//! │ …                        (up to 50 rows)      │
//! │ ───────────────────────────────────────────── │
//! │ Total:                912.50  37     1,820... │  page sums, bold
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The totals row sums price, quantity, and subtotal over that page's rows
//! only. Nothing on the last page carries a grand total; the grand total is
//! a screen concern and is computed separately over all loaded rows.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::io::BufWriter;
use tracing::debug;

use atlas_core::{format_amount, page_totals, paginate, ReportRow};

use crate::error::{ExportError, ExportResult};
use crate::{COLUMN_HEADERS, DATE_FORMAT};

// =============================================================================
// Layout Constants (millimetres, origin at bottom-left)
// =============================================================================

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_RIGHT: f32 = 14.0;

/// Page header baseline, 10mm from the top edge.
const HEADER_Y: f32 = PAGE_HEIGHT - 10.0;
/// Column header baseline, 20mm from the top edge.
const TABLE_TOP_Y: f32 = PAGE_HEIGHT - 20.0;
/// Vertical distance between data row baselines.
const ROW_STEP: f32 = 4.8;

const HEADER_SIZE: f32 = 14.0;
const HEAD_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;

/// Column baselines for [Date, Product, Customer, Price, Quantity, Subtotal].
const COLUMN_X: [f32; 6] = [14.0, 40.0, 90.0, 130.0, 155.0, 175.0];

/// Character budgets keeping text inside its column.
const PRODUCT_CLIP: usize = 25;
const CUSTOMER_CLIP: usize = 19;

// =============================================================================
// Builder
// =============================================================================

/// Renders all report rows into a single multi-page PDF.
///
/// Returns the finished document bytes; page count is `ceil(rows / 50)`.
/// An empty report has no representable page and is rejected.
pub fn build_report_pdf(rows: &[ReportRow]) -> ExportResult<Vec<u8>> {
    if rows.is_empty() {
        return Err(ExportError::EmptyReport);
    }

    let pages = paginate(rows);
    debug!(rows = rows.len(), pages = pages.len(), "Building report PDF");

    let (doc, first_page, first_layer) =
        PdfDocument::new("Sales Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (index, page_rows) in pages.into_iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        render_page(&layer, &font, &bold, index + 1, page_rows);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Draws one page: running header, column heads, rows, and that page's
/// totals row.
fn render_page(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    bold: &IndirectFontRef,
    page_number: usize,
    rows: &[ReportRow],
) {
    text(
        layer,
        bold,
        HEADER_SIZE,
        MARGIN_LEFT,
        HEADER_Y,
        &format!("Sales Report - Page {}", page_number),
    );

    for (label, x) in COLUMN_HEADERS.iter().zip(COLUMN_X) {
        text(layer, bold, HEAD_SIZE, x, TABLE_TOP_Y, label);
    }
    rule(layer, TABLE_TOP_Y - 2.2);

    let mut y = TABLE_TOP_Y - 6.0;
    for row in rows {
        let cells = [
            row.sale_date.format(DATE_FORMAT).to_string(),
            clip(&row.product_name, PRODUCT_CLIP),
            clip(&row.customer, CUSTOMER_CLIP),
            format_amount(row.price),
            row.quantity.to_string(),
            format_amount(row.subtotal()),
        ];
        for (cell, x) in cells.iter().zip(COLUMN_X) {
            text(layer, font, BODY_SIZE, x, y, cell);
        }
        y -= ROW_STEP;
    }

    // Sums cover this page's rows only.
    let totals = page_totals(rows);
    rule(layer, y + 2.0);
    y -= 2.0;
    text(layer, bold, BODY_SIZE, COLUMN_X[0], y, "Total:");
    text(layer, bold, BODY_SIZE, COLUMN_X[3], y, &format_amount(totals.price));
    text(layer, bold, BODY_SIZE, COLUMN_X[4], y, &totals.quantity.to_string());
    text(
        layer,
        bold,
        BODY_SIZE,
        COLUMN_X[5],
        y,
        &format_amount(totals.subtotal),
    );
}

// =============================================================================
// Drawing Helpers
// =============================================================================

fn text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    x: f32,
    y: f32,
    value: &str,
) {
    layer.use_text(value, size, Mm(x), Mm(y), font);
}

/// Horizontal rule across the table width.
fn rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(printpdf::Line {
        points: vec![
            (printpdf::Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
            (printpdf::Point::new(Mm(PAGE_WIDTH - MARGIN_RIGHT), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Truncates a value to its column's character budget.
fn clip(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        value.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sample_rows(count: usize) -> Vec<ReportRow> {
        (0..count)
            .map(|i| ReportRow {
                sale_date: Utc.with_ymd_and_hms(2026, 3, 1 + (i % 28) as u32, 10, 0, 0).unwrap(),
                product_name: format!("Product {}", i),
                customer: format!("Customer {}", i % 7),
                price: Decimal::new(5000 + i as i64, 2),
                quantity: (i % 5 + 1) as i64,
                payment_type: None,
            })
            .collect()
    }

    #[test]
    fn test_empty_report_is_rejected() {
        assert!(matches!(
            build_report_pdf(&[]),
            Err(ExportError::EmptyReport)
        ));
    }

    #[test]
    fn test_pdf_bytes_well_formed() {
        let bytes = build_report_pdf(&sample_rows(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let tail = &bytes[bytes.len().saturating_sub(1024)..];
        assert!(tail.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_multi_page_document_grows() {
        // 130 rows span three pages; the document must carry all of them.
        let one_page = build_report_pdf(&sample_rows(10)).unwrap();
        let three_pages = build_report_pdf(&sample_rows(130)).unwrap();
        assert!(three_pages.len() > one_page.len());
    }

    #[test]
    fn test_full_page_boundary_builds() {
        // Exactly 50 rows is one full page; 51 spills onto a second.
        assert!(build_report_pdf(&sample_rows(50)).is_ok());
        assert!(build_report_pdf(&sample_rows(51)).is_ok());
    }

    #[test]
    fn test_clip_respects_budget() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("exactly-ten", 11), "exactly-ten");
        assert_eq!(clip("a very long product name", 6), "a very");
    }
}
