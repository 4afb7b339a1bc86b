//! # State Module
//!
//! Application state for the desktop shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can exercise individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐                 │
//! │  │   AuthState   │ │ CustomersState│ │ ProductsState │                 │
//! │  │               │ │               │ │               │                 │
//! │  │  session +    │ │  EntityCache  │ │  EntityCache  │                 │
//! │  │  disk store   │ │  + search     │ │  + search     │                 │
//! │  └───────────────┘ └───────────────┘ └───────────────┘                 │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐                                   │
//! │  │ BillingState  │ │ ReportsState  │                                   │
//! │  │               │ │               │                                   │
//! │  │  cart + entry │ │  rows + fetch │                                   │
//! │  │  form inputs  │ │  generation   │                                   │
//! │  └───────────────┘ └───────────────┘                                   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Every holder wraps its data in Arc<Mutex<T>>                        │
//! │  • Commands take the lock through with_* closures and release fast     │
//! │  • No await happens while a lock is held                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod billing;
mod cache;
mod customers;
mod products;
mod reports;

pub use auth::AuthState;
pub use billing::{BillDraft, BillingCart, BillingState};
pub use cache::{Entity, EntityCache};
pub use customers::{CustomerDirectory, CustomersState};
pub use products::{ProductCatalog, ProductsState};
pub use reports::{FetchTicket, ReportView, ReportsState};
