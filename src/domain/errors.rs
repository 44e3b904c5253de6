//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` calendar date.
    InvalidBirthday(String),

    /// A page size of zero was requested.
    InvalidPageSize(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number format: {}", phone),
            Self::InvalidBirthday(date) => write!(f, "Invalid birthday format: {}", date),
            Self::InvalidPageSize(size) => {
                write!(f, "Page size must be greater than zero, got: {}", size)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
