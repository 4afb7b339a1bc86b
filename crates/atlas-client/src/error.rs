//! # Client Error Types
//!
//! Error types for remote API and persistence operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Protocol            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Network        │  │  Decode                 │ │
//! │  │  InvalidUrl     │  │  Api (status)   │  │  Encode                 │ │
//! │  │  ConfigLoad/Save│  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────────────────────────────────┐ │
//! │  │    Rejection    │  │     Session                                 │ │
//! │  │                 │  │                                             │ │
//! │  │  Rejected       │  │  SessionLoad                                │ │
//! │  │  (success:false)│  │  SessionSave                                │ │
//! │  └─────────────────┘  └─────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No variant is retryable: every failure is terminal for the user action
//! that raised it.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type covering configuration, transport, and API failures.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid base or endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request never produced an HTTP response (DNS, refused, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // =========================================================================
    // Protocol Errors
    // =========================================================================
    /// Response body did not match the expected envelope.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    // =========================================================================
    // Rejection
    // =========================================================================
    /// The server answered 2xx but the envelope carried success=false.
    #[error("{0}")]
    Rejected(String),

    // =========================================================================
    // Session Errors
    // =========================================================================
    /// Failed to read the persisted session record.
    #[error("Failed to load session: {0}")]
    SessionLoadFailed(String),

    /// Failed to write or clear the persisted session record.
    #[error("Failed to save session: {0}")]
    SessionSaveFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }

    /// Returns true if the request failed before any API answer arrived.
    pub fn is_network_error(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Returns true if the API itself turned the request down
    /// (HTTP error status or a success=false envelope).
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Api { .. } | ClientError::Rejected(_))
    }

    /// The message a view should surface for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected(message) => message.clone(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Network(_) => "Could not reach the server".to_string(),
            other => other.to_string(),
        }
    }
}
