//! # atlas-core: Pure Domain Logic for Atlas Retail
//!
//! This crate is the **heart** of Atlas Retail. It contains all client-side
//! domain logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Atlas Retail Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Rendering Shell                             │   │
//! │  │   Customer UI ──► Product UI ──► Billing UI ──► Reports UI     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command calls                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   atlas-desk (commands + state)                 │   │
//! │  └──────┬─────────────────────┬────────────────────────┬──────────┘   │
//! │         │                     │                        │               │
//! │  ┌──────▼───────┐   ┌─────────▼─────────┐   ┌──────────▼──────────┐   │
//! │  │ atlas-client │   │ ★ atlas-core ★    │   │    atlas-export     │   │
//! │  │  REST + TOML │   │                   │   │    PDF + XLSX       │   │
//! │  └──────────────┘   │  types • money    │   └─────────────────────┘   │
//! │                     │  validation       │                              │
//! │                     │  report math      │                              │
//! │                     │                   │                              │
//! │                     │  NO I/O • PURE    │                              │
//! │                     └───────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire-accurate domain types (Customer, Product, LineItem, ...)
//! - [`money`] - Decimal amount parsing, arithmetic, and formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Form-input validation rules
//! - [`report`] - Report pagination and totals
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and environment access are FORBIDDEN here
//! 3. **Exact Amounts**: All monetary math uses `rust_decimal::Decimal`
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atlas_core::money::{format_amount, line_subtotal};
//! use atlas_core::validation::validate_price_input;
//!
//! // Validate a price field the way the form rule states it:
//! // "not a number, or <= 0, is rejected"
//! let price = validate_price_input("price", "19.999").unwrap();
//!
//! // Exact subtotal, two-decimal display
//! let subtotal = line_subtotal(price, 3);
//! assert_eq!(format_amount(subtotal), "60.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atlas_core::Customer` instead of
// `use atlas_core::types::Customer`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_amount, line_subtotal, parse_amount};
pub use report::{grand_total, page_totals, paginate, PageTotals, ROWS_PER_PAGE};
pub use types::*;
