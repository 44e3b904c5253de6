//! Generic validated field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A format rule applied to a field value before it is stored.
pub trait Validator {
    /// Check `value`, returning the error to report if it is rejected.
    fn validate(value: &str) -> Result<(), ValidationError>;
}

/// Validator that accepts any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoValidation;

impl Validator for NoValidation {
    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A string value that always satisfies its validator `V`.
///
/// Both construction and [`Field::set`] validate before storing, so a
/// rejected update leaves the previous value in place.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let mut phone = PhoneNumber::new("1234567890").unwrap();
/// assert!(phone.set("not a phone").is_err());
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<V> {
    value: String,
    validator: PhantomData<V>,
}

impl<V: Validator> Field<V> {
    /// Create a new field, validating the value.
    ///
    /// # Errors
    ///
    /// Returns the validator's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        V::validate(&value)?;

        Ok(Self {
            value,
            validator: PhantomData,
        })
    }

    /// Replace the value. On error the current value is kept.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        V::validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

/// Contact names carry no format rule.
pub type ContactName = Field<NoValidation>;

// Serde support - serialize as string
impl<V> Serialize for Field<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, V: Validator> Deserialize<'de> for Field<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}

impl<V> fmt::Display for Field<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct NonEmpty;

    impl Validator for NonEmpty {
        fn validate(value: &str) -> Result<(), ValidationError> {
            if value.is_empty() {
                return Err(ValidationError::InvalidPhone(value.to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_field_without_validation_accepts_anything() {
        let name = ContactName::new("").unwrap();
        assert_eq!(name.as_str(), "");

        let name = ContactName::new("John").unwrap();
        assert_eq!(name.to_string(), "John");
    }

    #[test]
    fn test_field_rejects_invalid_on_construction() {
        assert!(Field::<NonEmpty>::new("").is_err());
        assert!(Field::<NonEmpty>::new("x").is_ok());
    }

    #[test]
    fn test_field_set_keeps_old_value_on_error() {
        let mut field = Field::<NonEmpty>::new("first").unwrap();

        let result = field.set("");
        assert!(result.is_err());
        assert_eq!(field.as_str(), "first");

        field.set("second").unwrap();
        assert_eq!(field.as_str(), "second");
    }

    #[test]
    fn test_field_deserialization_validates() {
        let ok: Field<NonEmpty> = serde_json::from_str("\"value\"").unwrap();
        assert_eq!(ok.into_inner(), "value");

        let err: Result<Field<NonEmpty>, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }
}
