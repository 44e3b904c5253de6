//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with contact records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field value failed its format check
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not on the record
    #[error("Old phone number not found: {0}")]
    PhoneNotFound(String),

    /// The record has no birthday set
    #[error("No birthday set for contact: {0}")]
    MissingBirthday(String),

    /// Next birthday falls outside the representable date range
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Old phone number not found: 1234567890");

        let err = ContactError::MissingBirthday("John".to_string());
        assert_eq!(err.to_string(), "No birthday set for contact: John");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PAGE_SIZE: Must be greater than zero"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ContactError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(
            err,
            ContactError::Validation(ValidationError::InvalidPhone("123".to_string()))
        );
        assert_eq!(err.to_string(), "Invalid phone number format: 123");
    }
}
