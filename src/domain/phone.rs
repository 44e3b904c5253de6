//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::{Field, Validator};

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Validator for ten-digit phone numbers.
///
/// # Validation Rules
///
/// - Exactly 10 characters
/// - Every character is an ASCII digit `0-9`
///
/// No formatting characters are accepted: a leading `+`, spaces,
/// hyphens and parentheses are all rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TenDigits;

impl TenDigits {
    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Validator for TenDigits {
    fn validate(value: &str) -> Result<(), ValidationError> {
        if !Self::is_valid(value) {
            return Err(ValidationError::InvalidPhone(value.to_string()));
        }
        Ok(())
    }
}

/// A type-safe wrapper for phone numbers.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert!(PhoneNumber::new("+1-555-1234").is_err());
/// ```
pub type PhoneNumber = Field<TenDigits>;
