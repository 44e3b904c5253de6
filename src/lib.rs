//! Address Book - an in-memory contact directory.
//!
//! Contacts hold a name, any number of ten-digit phone numbers and an
//! optional birthday. The directory supports lookup by name, deletion,
//! paginated listing and "days until next birthday" queries.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: Contact records and the address book that owns them
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{AddressBook, Pages, Record};
