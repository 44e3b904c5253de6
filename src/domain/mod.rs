//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. These value objects validate at
//! construction and on every update, so invalid data cannot be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{ContactName, Field, NoValidation, Validator};
pub use phone::{PhoneNumber, TenDigits};
