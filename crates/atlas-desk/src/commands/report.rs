//! # Report Commands
//!
//! Report fetch and file export.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Report Fetch Flow                                 │
//! │                                                                         │
//! │  fetch_report()                                                         │
//! │       │                                                                 │
//! │       ▼  (one lock acquisition)                                         │
//! │  read kind + dates + selection ── missing input? ──► ValidationError    │
//! │  issue fetch ticket                                  (no ticket, no     │
//! │       │                                               request)          │
//! │       ▼  (lock released)                                                │
//! │  await GET sales-report | items-report | customer-ledger                │
//! │       │                                                                 │
//! │       ▼  (one lock acquisition)                                         │
//! │  apply_rows(ticket, rows) ── ticket stale? ──► FetchOutcome::Superseded │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FetchOutcome::Applied { rows }                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Totals
//! The on-screen grand total sums every row; the PDF's per-page total rows
//! sum only their own page. They are independently defined and are not
//! reconciled against each other.

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use atlas_client::{ApiClient, AppConfig};
use atlas_core::{ReportKind, ReportRow};
use atlas_export::{build_report_pdf, build_report_xlsx, ExportError, PDF_FILE_NAME, XLSX_FILE_NAME};

use crate::error::ApiError;
use crate::state::ReportsState;

/// What a completed fetch did to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The response was the latest and is now on screen.
    Applied { rows: Vec<ReportRow> },
    /// A newer fetch started while this one was in flight; its response
    /// was discarded.
    Superseded,
}

/// Report snapshot for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub kind: ReportKind,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rows: Vec<ReportRow>,
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
}

/// Gets the current report view contents.
pub fn get_report(reports: &ReportsState) -> ReportResponse {
    debug!("get_report command");

    reports.with_view(|v| ReportResponse {
        kind: v.kind,
        start_date: v.start_date,
        end_date: v.end_date,
        rows: v.rows.clone(),
        grand_total: v.grand_total(),
    })
}

/// Switches the report kind, clearing rows from the previous kind.
pub fn set_report_kind(reports: &ReportsState, kind: ReportKind) {
    debug!(kind = %kind, "set_report_kind command");
    reports.with_view_mut(|v| v.set_kind(kind));
}

/// Sets the inclusive date range.
pub fn set_report_dates(
    reports: &ReportsState,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) {
    debug!(start = ?start, end = ?end, "set_report_dates command");
    reports.with_view_mut(|v| {
        v.start_date = start;
        v.end_date = end;
    });
}

/// Sets (or clears) the product used by the item report.
pub fn set_report_product(reports: &ReportsState, product_id: Option<String>) {
    debug!(product_id = ?product_id, "set_report_product command");
    reports.with_view_mut(|v| v.selected_product_id = product_id);
}

/// Sets (or clears) the customer used by the customer ledger.
pub fn set_report_customer(reports: &ReportsState, customer_id: Option<String>) {
    debug!(customer_id = ?customer_id, "set_report_customer command");
    reports.with_view_mut(|v| v.selected_customer_id = customer_id);
}

// What the validated view wants fetched.
enum ReportRequest {
    Sales,
    Item(String),
    Customer(String),
}

/// Fetches the report for the current kind, range, and selection.
///
/// ## Behavior
/// - Missing dates or a missing required selection short-circuit with a
///   notification message; no ticket is issued and no request leaves
/// - Concurrent fetches are allowed; only the latest one's response is
///   applied, the rest resolve as [`FetchOutcome::Superseded`]
pub async fn fetch_report(
    client: &ApiClient,
    reports: &ReportsState,
) -> Result<FetchOutcome, ApiError> {
    debug!("fetch_report command");

    let (start, end, request, ticket) = reports.with_view_mut(|v| {
        let start = v
            .start_date
            .ok_or_else(|| ApiError::validation("Please select a date range"))?;
        let end = v
            .end_date
            .ok_or_else(|| ApiError::validation("Please select a date range"))?;

        let request = match v.kind {
            ReportKind::Sales => ReportRequest::Sales,
            ReportKind::Item => {
                let id = v
                    .selected_product_id
                    .clone()
                    .ok_or_else(|| ApiError::validation("Please select Product"))?;
                ReportRequest::Item(id)
            }
            ReportKind::Customer => {
                let id = v
                    .selected_customer_id
                    .clone()
                    .ok_or_else(|| ApiError::validation("Please select Customer"))?;
                ReportRequest::Customer(id)
            }
        };

        // Validation passed, so this fetch supersedes every earlier one.
        Ok::<_, ApiError>((start, end, request, v.begin_fetch()))
    })?;

    let rows = match &request {
        ReportRequest::Sales => client.sales_report(start, end).await?,
        ReportRequest::Item(id) => client.items_report(start, end, id).await?,
        ReportRequest::Customer(id) => client.customer_ledger(start, end, id).await?,
    };

    let outcome = reports.with_view_mut(|v| {
        if v.apply_rows(ticket, rows) {
            FetchOutcome::Applied {
                rows: v.rows.clone(),
            }
        } else {
            FetchOutcome::Superseded
        }
    });

    Ok(outcome)
}

fn write_artifact(dir: PathBuf, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf, ApiError> {
    std::fs::create_dir_all(&dir).map_err(ExportError::Io)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).map_err(ExportError::Io)?;
    Ok(path)
}

/// Renders the on-screen rows to a paginated PDF on disk.
///
/// ## Returns
/// The written file path (`sales_report.pdf` in the configured export
/// directory, falling back to the platform download directory).
pub fn export_report_pdf(reports: &ReportsState, config: &AppConfig) -> Result<PathBuf, ApiError> {
    debug!("export_report_pdf command");

    let rows = reports.with_view(|v| v.rows.clone());
    let bytes = build_report_pdf(&rows)?;
    let path = write_artifact(config.export.resolve_output_dir(), PDF_FILE_NAME, bytes)?;

    info!(path = ?path, "PDF report written");
    Ok(path)
}

/// Renders the on-screen rows to a spreadsheet on disk.
///
/// Unlike the PDF, an empty report still produces a header-only sheet.
pub fn export_report_xlsx(reports: &ReportsState, config: &AppConfig) -> Result<PathBuf, ApiError> {
    debug!("export_report_xlsx command");

    let rows = reports.with_view(|v| v.rows.clone());
    let bytes = build_report_xlsx(&rows)?;
    let path = write_artifact(config.export.resolve_output_dir(), XLSX_FILE_NAME, bytes)?;

    info!(path = ?path, "Spreadsheet report written");
    Ok(path)
}
