//! # Atlas Export
//!
//! Client-side report artifact generation: a paginated PDF and a
//! spreadsheet, both built in memory from the last-fetched report rows.
//!
//! ## Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      atlas-export                        │
//! │                                                          │
//! │   report rows ──┬──► pdf::build_report_pdf ──► Vec<u8>   │
//! │   (atlas-core)  │      50 rows/page, per-page totals     │
//! │                 │                                        │
//! │                 └──► sheet::build_report_xlsx ─► Vec<u8> │
//! │                        header + N rows, "Report" sheet   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers own file placement; the conventional names are
//! [`PDF_FILE_NAME`] and [`XLSX_FILE_NAME`].

pub mod error;
pub mod pdf;
pub mod sheet;

pub use error::{ExportError, ExportResult};
pub use pdf::build_report_pdf;
pub use sheet::build_report_xlsx;

/// Conventional file name for the PDF artifact.
pub const PDF_FILE_NAME: &str = "sales_report.pdf";

/// Conventional file name for the spreadsheet artifact.
pub const XLSX_FILE_NAME: &str = "sales_report.xlsx";

/// Column order shared by both artifacts.
pub(crate) const COLUMN_HEADERS: [&str; 6] =
    ["Date", "Product", "Customer", "Price", "Quantity", "Subtotal"];

/// Date rendering for artifact cells.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
