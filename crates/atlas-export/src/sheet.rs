//! # Report Spreadsheet
//!
//! Writes the report as a single worksheet named "Report": one header row
//! followed by one row per entry, in fetch order.
//!
//! Price and subtotal cells are text with exactly two decimal digits so
//! the sheet shows the same figures as the PDF. Quantity stays numeric.
//! No totals row is appended; that is a PDF-only affordance.

use rust_xlsxwriter::Workbook;
use tracing::debug;

use atlas_core::{format_amount, ReportRow};

use crate::error::{ExportError, ExportResult};
use crate::{COLUMN_HEADERS, DATE_FORMAT};

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> ExportError {
    ExportError::Xlsx(e.to_string())
}

/// Renders all report rows into workbook bytes.
///
/// An empty report still produces a valid workbook holding just the
/// header row.
pub fn build_report_xlsx(rows: &[ReportRow]) -> ExportResult<Vec<u8>> {
    debug!(rows = rows.len(), "Building report spreadsheet");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Report").map_err(xlsx_err)?;

    for (col, label) in COLUMN_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *label).map_err(xlsx_err)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        sheet
            .write_string(r, 0, row.sale_date.format(DATE_FORMAT).to_string())
            .map_err(xlsx_err)?;
        sheet
            .write_string(r, 1, row.product_name.as_str())
            .map_err(xlsx_err)?;
        sheet
            .write_string(r, 2, row.customer.as_str())
            .map_err(xlsx_err)?;
        sheet
            .write_string(r, 3, format_amount(row.price))
            .map_err(xlsx_err)?;
        sheet
            .write_number(r, 4, row.quantity as f64)
            .map_err(xlsx_err)?;
        sheet
            .write_string(r, 5, format_amount(row.subtotal()))
            .map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}
