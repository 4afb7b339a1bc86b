//! # Error Types
//!
//! Domain-specific error types for atlas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atlas-core errors (this file)                                         │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  atlas-client errors (separate crate)                                  │
//! │  └── ClientError      - Transport and API envelope failures            │
//! │                                                                         │
//! │  atlas-desk errors (app layer)                                         │
//! │  └── ApiError         - What the rendering shell sees (serialized)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These errors represent business rule violations in the pending bill or
/// report pipeline. They are caught by the app layer and translated to
/// user-facing notifications.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product is selected for the attempted operation.
    #[error("No product selected")]
    NoProductSelected,

    /// Product cannot be found in the cached list.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds the product's cached available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Add line item (qty: 5)
    ///      │
    ///      ▼
    /// Check cached stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Sugar 1kg", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 units available for Sugar 1kg"
    /// ```
    #[error("Only {available} units available for {name}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A bill cannot be submitted without an active customer.
    #[error("No customer selected")]
    NoCustomerSelected,

    /// A bill cannot be submitted with an empty line-item collection.
    #[error("No products added to the bill")]
    EmptyBill,

    /// Line-item index is out of bounds.
    #[error("No line item at position {index} (bill has {len} items)")]
    LineItemOutOfBounds { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
/// Used for early validation before any request is issued.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Phone numbers are exactly ten ASCII digits.
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,

    /// Value could not be read as a number.
    #[error("{field} must be a valid number")]
    NotANumber { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Value must be a whole number.
    #[error("{field} must be a whole number")]
    NotAWholeNumber { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Sugar 1kg".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(err.to_string(), "Only 3 units available for Sugar 1kg");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidPhone;
        assert_eq!(err.to_string(), "Phone number must be exactly 10 digits");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
