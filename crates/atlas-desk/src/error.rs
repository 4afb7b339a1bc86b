//! # API Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Atlas Retail                           │
//! │                                                                         │
//! │  Rendering Shell                 Desk Commands                          │
//! │  ───────────────                 ─────────────                          │
//! │                                                                         │
//! │  add_bill_item()                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Input invalid? ──── ValidationError ───────────────┐            │  │
//! │  │         │                                           │            │  │
//! │  │         ▼                                           ▼            │  │
//! │  │  Server refused? ─── ClientError::Rejected ───── ApiError ─────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The shell renders `message` as a toast and can branch on `code`.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is terminal for that user action: no command retries, and
//! state is left exactly as it was before the attempt.

use serde::Serialize;

use atlas_client::ClientError;
use atlas_core::{CoreError, ValidationError};
use atlas_export::ExportError;

/// Error returned from desk commands.
///
/// ## Serialization
/// This is what the shell receives when a command fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Only 3 units available for Sugar 1kg"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found in the local cache
    NotFound,

    /// Input validation failed; no request was issued
    ValidationError,

    /// The server could not be reached
    NetworkError,

    /// The server answered but refused the operation
    ApiRejected,

    /// Bill accumulator rule violation
    BillingError,

    /// Requested quantity exceeds cached stock
    InsufficientStock,

    /// Persisted session could not be read or written
    SessionError,

    /// Artifact generation or write failed
    ExportError,

    /// Unexpected internal failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a billing error.
    pub fn billing(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BillingError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::NoProductSelected
            | CoreError::NoCustomerSelected
            | CoreError::EmptyBill
            | CoreError::LineItemOutOfBounds { .. } => ApiError::billing(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts input validation failures to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts transport and envelope failures to API errors.
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::Rejected(_) | ClientError::Api { .. } => {
                ApiError::new(ErrorCode::ApiRejected, err.user_message())
            }
            ClientError::Network(_) => {
                tracing::error!("Request failed: {}", err);
                ApiError::new(ErrorCode::NetworkError, err.user_message())
            }
            ClientError::Decode(e) | ClientError::Encode(e) => {
                tracing::error!("Wire format failure: {}", e);
                ApiError::internal("Unexpected response from the server")
            }
            ClientError::SessionLoadFailed(_) | ClientError::SessionSaveFailed(_) => {
                ApiError::new(ErrorCode::SessionError, err.to_string())
            }
            ClientError::InvalidConfig(_)
            | ClientError::InvalidUrl(_)
            | ClientError::ConfigLoadFailed(_)
            | ClientError::ConfigSaveFailed(_) => ApiError::internal(err.to_string()),
        }
    }
}

/// Converts export failures to API errors.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match &err {
            ExportError::EmptyReport => ApiError::new(ErrorCode::ExportError, err.to_string()),
            ExportError::Pdf(e) | ExportError::Xlsx(e) => {
                tracing::error!("Artifact build failed: {}", e);
                ApiError::new(ErrorCode::ExportError, err.to_string())
            }
            ExportError::Io(e) => {
                tracing::error!("Artifact write failed: {}", e);
                ApiError::new(ErrorCode::ExportError, "Could not write the report file")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
