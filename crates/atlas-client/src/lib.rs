//! # Atlas Client
//!
//! Remote-store access for the Atlas Retail desk: REST API client,
//! client configuration, and the persisted auth session.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       atlas-client                          │
//! │                                                             │
//! │  ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//! │  │  config  │──►│   api    │   │ session  │   │   dto    │  │
//! │  │ (toml +  │   │ (reqwest │   │ (state + │   │ (wire    │  │
//! │  │  env)    │   │  client) │   │  store)  │   │  shapes) │  │
//! │  └──────────┘   └──────────┘   └──────────┘   └──────────┘  │
//! │                       │                                     │
//! └───────────────────────┼─────────────────────────────────────┘
//!                         ▼
//!              remote REST service (/api/user/*)
//! ```
//!
//! The crate owns no business rules: validation and billing math live in
//! `atlas-core`, and screen state lives in the desk layer above.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod session;

pub use api::ApiClient;
pub use config::{ApiSettings, AppConfig, ExportSettings};
pub use dto::{
    CustomerPayload, GenerateBillRequest, ProductPayload, SigninRequest, SignupRequest,
};
pub use error::{ClientError, ClientResult};
pub use session::{AuthSession, SessionStore};
