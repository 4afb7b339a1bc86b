//! # Validation Module
//!
//! Form-input validation for Atlas Retail.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rendering shell                                              │
//! │  ├── Input widgets constrain what can be typed                         │
//! │  └── Immediate visual feedback                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Desk commands (Rust)                                         │
//! │  └── THIS MODULE: every rule checked before a request is issued        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote API                                                   │
//! │  └── Server-side constraints (authoritative)                           │
//! │                                                                         │
//! │  A validation failure never issues a request; the view keeps its       │
//! │  pre-attempt state.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Literal Numeric Rule
//! Quantity and price inputs follow the acceptance rule "not a number, or
//! ≤ 0, is rejected". A price of 19.999 therefore passes; a quantity of
//! "2.5" fails only because quantities are whole numbers by the data model.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::parse_amount;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Exact length of a valid phone number.
pub const PHONE_DIGITS: usize = 10;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text field is present.
///
/// ## Example
/// ```rust
/// use atlas_core::validation::validate_required;
///
/// assert!(validate_required("name", "Bob").is_ok());
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Exactly 10 characters
/// - ASCII digits only
///
/// ## Example
/// ```rust
/// use atlas_core::validation::validate_phone;
///
/// assert!(validate_phone("9876543210").is_ok());
/// assert!(validate_phone("987654321").is_err());   // nine digits
/// assert!(validate_phone("987654321O").is_err());  // letter O
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// Validates an email's basic shape.
///
/// Only the coarse structure is checked; the server is authoritative.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@'".to_string(),
        });
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Input Validators
// =============================================================================

/// Validates a quantity input string and returns the parsed value.
///
/// ## Rules
/// - Must parse as a number ("not a number" is rejected)
/// - Must be a whole number (quantities are integers by the data model)
/// - Must be strictly positive
pub fn validate_quantity_input(field: &str, input: &str) -> ValidationResult<i64> {
    let Some(value) = parse_amount(input) else {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    };

    if value <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value.fract() != Decimal::ZERO {
        return Err(ValidationError::NotAWholeNumber {
            field: field.to_string(),
        });
    }

    value.to_i64().ok_or_else(|| ValidationError::NotANumber {
        field: field.to_string(),
    })
}

/// Validates a price input string and returns the parsed value.
///
/// ## Rules
/// The literal rule only: "not a number, or ≤ 0, is rejected". Values with
/// more than two decimal places (19.999) are accepted and survive unrounded.
pub fn validate_price_input(field: &str, input: &str) -> ValidationResult<Decimal> {
    let Some(value) = parse_amount(input) else {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    };

    if value <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
