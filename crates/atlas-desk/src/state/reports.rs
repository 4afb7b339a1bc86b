//! # Report View State
//!
//! The reports screen: kind, date range, entity selections, and the rows
//! of the last applied fetch.
//!
//! ## Stale Response Guard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Fetch Generations                                     │
//! │                                                                         │
//! │  generate #1 ──► begin_fetch() → ticket(1)     (slow request)           │
//! │  generate #2 ──► begin_fetch() → ticket(2)     (fast request)           │
//! │                                                                         │
//! │  response #2 ──► apply_rows(ticket(2), rows) → applied (gen == 2)       │
//! │  response #1 ──► apply_rows(ticket(1), rows) → dropped (gen != 2)       │
//! │                                                                         │
//! │  INVARIANT: only the most recently issued ticket can publish rows.      │
//! │  Whatever order responses land in, the screen shows the last request.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use atlas_core::{grand_total, ReportKind, ReportRow};

// =============================================================================
// Fetch Ticket
// =============================================================================

/// Proof of which fetch a response belongs to.
///
/// Issued by [`ReportView::begin_fetch`] and surrendered to
/// [`ReportView::apply_rows`]. Not copyable: one ticket, one apply attempt.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

// =============================================================================
// Report View
// =============================================================================

/// Everything the reports screen shows and edits.
#[derive(Debug, Clone, Default)]
pub struct ReportView {
    /// Which aggregation is selected.
    pub kind: ReportKind,

    /// Inclusive start of the date range.
    pub start_date: Option<NaiveDate>,

    /// Inclusive end of the date range.
    pub end_date: Option<NaiveDate>,

    /// Product selection, consulted only for the item report.
    pub selected_product_id: Option<String>,

    /// Customer selection, consulted only for the customer ledger.
    pub selected_customer_id: Option<String>,

    /// Rows of the last applied fetch.
    pub rows: Vec<ReportRow>,

    /// Monotonic fetch counter backing the stale guard.
    generation: u64,
}

impl ReportView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the report kind, discarding rows from the previous kind.
    ///
    /// Dates and selections survive the switch so the clerk does not
    /// re-enter them when flipping between aggregations.
    pub fn set_kind(&mut self, kind: ReportKind) {
        if self.kind != kind {
            self.kind = kind;
            self.rows.clear();
        }
    }

    /// Starts a new fetch, invalidating every ticket issued before.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Publishes rows if the ticket is still the latest.
    ///
    /// Returns false (and drops the rows) for a superseded ticket.
    pub fn apply_rows(&mut self, ticket: FetchTicket, rows: Vec<ReportRow>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.rows = rows;
        true
    }

    /// Sum of row subtotals across all pages.
    pub fn grand_total(&self) -> Decimal {
        grand_total(&self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Managed State
// =============================================================================

/// Thread-safe report view holder shared across commands.
#[derive(Debug)]
pub struct ReportsState {
    view: Arc<Mutex<ReportView>>,
}

impl ReportsState {
    pub fn new() -> Self {
        ReportsState {
            view: Arc::new(Mutex::new(ReportView::new())),
        }
    }

    /// Executes a function with read access to the view.
    pub fn with_view<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ReportView) -> R,
    {
        let view = self.view.lock().expect("Report mutex poisoned");
        f(&view)
    }

    /// Executes a function with write access to the view.
    pub fn with_view_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ReportView) -> R,
    {
        let mut view = self.view.lock().expect("Report mutex poisoned");
        f(&mut view)
    }
}

impl Default for ReportsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(product: &str, price: i64, quantity: i64) -> ReportRow {
        ReportRow {
            sale_date: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            product_name: product.to_string(),
            customer: "Asha Verma".to_string(),
            price: Decimal::new(price, 2),
            quantity,
            payment_type: None,
        }
    }

    #[test]
    fn test_latest_ticket_applies() {
        let mut view = ReportView::new();
        let ticket = view.begin_fetch();

        assert!(view.apply_rows(ticket, vec![row("Sugar 1kg", 5000, 2)]));
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn test_superseded_ticket_is_dropped() {
        let mut view = ReportView::new();
        let stale = view.begin_fetch();
        let fresh = view.begin_fetch();

        // The fast second request lands first.
        assert!(view.apply_rows(fresh, vec![row("Coffee 200g", 19999, 1)]));
        // The slow first request must not clobber it.
        assert!(!view.apply_rows(stale, vec![row("Sugar 1kg", 5000, 2)]));

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].product_name, "Coffee 200g");
    }

    #[test]
    fn test_set_kind_clears_rows_but_keeps_inputs() {
        let mut view = ReportView::new();
        view.start_date = NaiveDate::from_ymd_opt(2026, 3, 1);
        view.end_date = NaiveDate::from_ymd_opt(2026, 3, 31);
        view.selected_product_id = Some("p1".to_string());
        let ticket = view.begin_fetch();
        view.apply_rows(ticket, vec![row("Sugar 1kg", 5000, 2)]);

        view.set_kind(ReportKind::Item);
        assert!(view.is_empty());
        assert_eq!(view.start_date, NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(view.selected_product_id.as_deref(), Some("p1"));

        // Re-selecting the same kind is a no-op.
        let ticket = view.begin_fetch();
        view.apply_rows(ticket, vec![row("Sugar 1kg", 5000, 2)]);
        view.set_kind(ReportKind::Item);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn test_grand_total_sums_subtotals() {
        let mut view = ReportView::new();
        let ticket = view.begin_fetch();
        view.apply_rows(
            ticket,
            vec![row("Sugar 1kg", 5000, 2), row("Tea 500g", 3000, 1)],
        );

        // 2 x 50.00 + 1 x 30.00
        assert_eq!(view.grand_total(), Decimal::new(13000, 2));
    }
}
