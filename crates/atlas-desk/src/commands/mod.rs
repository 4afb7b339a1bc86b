//! # Commands Module
//!
//! All commands exposed to the rendering shell.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports + shared types)
//! ├── auth.rs     ◄─── Sign-up, sign-in, sign-out
//! ├── customer.rs ◄─── Customer list, CRUD, search
//! ├── product.rs  ◄─── Product list, CRUD, search
//! ├── billing.rs  ◄─── Bill assembly and submission
//! └── report.rs   ◄─── Report fetch and file export
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Flow                                      │
//! │                                                                         │
//! │  Rendering shell                                                        │
//! │  ───────────────                                                        │
//! │  await commands.createCustomer({ name, address, phone })                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust command                                                           │
//! │  ────────────                                                           │
//! │  pub async fn create_customer(                                          │
//! │      client: &ApiClient,          ◄── one shared HTTP client            │
//! │      customers: &CustomersState,  ◄── cache the command mutates         │
//! │      name: &str, ...              ◄── raw form inputs                   │
//! │  ) -> Result<Customer, ApiError>                                        │
//! │         │                                                               │
//! │         │  1. validate inputs (failure: no request leaves the app)      │
//! │         │  2. await the API call                                        │
//! │         │  3. apply the confirmed change to local state                 │
//! │         ▼                                                               │
//! │  Shell receives the created entity or a serialized ApiError             │
//! │                                                                         │
//! │  LOCK DISCIPLINE: state locks are taken before and after the await,     │
//! │  never across it.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod billing;
pub mod customer;
pub mod product;
pub mod report;

// =============================================================================
// Shared Command Types
// =============================================================================

/// The operator's answer to a destructive-action dialog.
///
/// The shell shows the dialog and passes the verdict in; the command only
/// issues the request for [`Confirmation::Confirmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// What a delete command actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeleteOutcome {
    /// The server confirmed the delete and the cache was updated.
    Deleted,
    /// The operator declined; nothing was sent.
    Cancelled,
}
