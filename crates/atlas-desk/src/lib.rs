//! # Atlas Desk
//!
//! Application layer for the Atlas Retail desktop client: shared state,
//! commands, and routing for the rendering shell.
//!
//! ## Module Organization
//! ```text
//! atlas_desk/
//! ├── lib.rs          ◄─── You are here (Desk bundle & startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── auth.rs     ◄─── Session + disk store
//! │   ├── cache.rs    ◄─── Entity cache transitions
//! │   ├── customers.rs◄─── Customer directory
//! │   ├── products.rs ◄─── Product catalog
//! │   ├── billing.rs  ◄─── Pending bill
//! │   └── reports.rs  ◄─── Report view + fetch generations
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── auth.rs     ◄─── Sign-up/in/out
//! │   ├── customer.rs ◄─── Customer CRUD + search
//! │   ├── product.rs  ◄─── Product CRUD + search
//! │   ├── billing.rs  ◄─── Bill assembly + submit
//! │   └── report.rs   ◄─── Report fetch + export
//! ├── routes.rs       ◄─── Route table + auth guard
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## How the Shell Uses This
//! ```rust,ignore
//! let desk = atlas_desk::Desk::bootstrap()?;
//!
//! // Anywhere a screen needs data or a mutation:
//! let customers = commands::customer::fetch_customers(&desk.client, &desk.customers).await?;
//! commands::billing::set_bill_quantity(&desk.billing, "2");
//! ```

pub mod commands;
pub mod error;
pub mod routes;
pub mod state;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use atlas_client::{ApiClient, AppConfig, SessionStore};

pub use error::{ApiError, ErrorCode};
pub use routes::{resolve, Route, RouteAccess};

use state::{AuthState, BillingState, CustomersState, ProductsState, ReportsState};

/// Everything one running app instance owns.
///
/// The shell constructs this once at startup and passes the pieces to
/// commands. Cloning is deliberately not offered: one client, one cookie
/// jar, one set of states.
#[derive(Debug)]
pub struct Desk {
    pub config: AppConfig,
    pub client: ApiClient,
    pub auth: AuthState,
    pub customers: CustomersState,
    pub products: ProductsState,
    pub billing: BillingState,
    pub reports: ReportsState,
}

impl Desk {
    /// Builds a desk from explicit parts.
    pub fn new(config: AppConfig, session_store: SessionStore) -> Result<Self, ApiError> {
        config.validate()?;
        let client = ApiClient::new(&config)?;
        let auth = AuthState::from_store(session_store);

        Ok(Desk {
            config,
            client,
            auth,
            customers: CustomersState::new(),
            products: ProductsState::new(),
            billing: BillingState::new(),
            reports: ReportsState::new(),
        })
    }

    /// Standard startup path.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  1. Load Configuration ───────────────────────────────────────────► │
    /// │     • defaults ← config.toml ← ATLAS_API_URL / ATLAS_EXPORT_DIR     │
    /// │     • unreadable file: fall back to defaults, keep running          │
    /// │                                                                     │
    /// │  2. Build HTTP Client ────────────────────────────────────────────► │
    /// │     • cookie jar on, so sign-in credentials persist per run         │
    /// │                                                                     │
    /// │  3. Restore Session ──────────────────────────────────────────────► │
    /// │     • read session.toml from the platform data directory            │
    /// │     • missing or corrupt: start logged out                          │
    /// │                                                                     │
    /// │  4. Initialize State Objects ─────────────────────────────────────► │
    /// │     • empty caches, empty bill, empty report view                   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn bootstrap() -> Result<Self, ApiError> {
        let config = AppConfig::load_or_default(None);
        let store = SessionStore::at_default_path()?;

        let desk = Self::new(config, store)?;
        info!(
            base_url = %desk.client.base_url(),
            logged_in = desk.auth.is_logged_in(),
            "Desk initialized"
        );
        Ok(desk)
    }

    /// The route the shell should land on after startup.
    pub fn initial_route(&self) -> Route {
        match routes::resolve(Route::Dashboard, &self.auth.current()) {
            RouteAccess::Granted => Route::Dashboard,
            RouteAccess::RedirectToSignIn => Route::SignIn,
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=atlas=trace` - Show trace for atlas crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atlas=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
