//! Contact record: a name, phone numbers and an optional birthday.

use crate::domain::birthday::next_occurrence;
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// Every field is validated on the way in, and a failed update leaves the
/// record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    /// Phone numbers in insertion order (duplicates allowed)
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Birthday,
}

impl Record {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` if `birthday` is not a valid
    /// `YYYY-MM-DD` date.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> ContactResult<Self> {
        let birthday = Birthday::new(birthday)?;
        let name = ContactName::new(name)?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// All phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday (may be unset).
    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone number equal to `phone`. Does nothing if absent.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position(phone) {
            let removed = self.phones.remove(index);
            tracing::debug!(contact = %self.name, phone = %removed, "Removed phone");
        }
    }

    /// Replace the first phone number equal to `old` with `new`.
    ///
    /// `new` is validated before the search, so an invalid replacement is
    /// reported even when `old` is missing.
    ///
    /// # Errors
    ///
    /// - `ContactError::Validation` if `new` is not a valid phone number
    /// - `ContactError::PhoneNotFound` if `old` is not on the record
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let replacement = PhoneNumber::new(new)?;

        let index = self
            .position(old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;

        tracing::debug!(contact = %self.name, old = %old, new = %new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the first phone number equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the birthday. On error the current birthday is kept.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> ContactResult<()> {
        self.birthday.set(birthday)?;
        Ok(())
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// Returns 0 when the birthday is today.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingBirthday` if no birthday is set.
    pub fn days_to_birthday(&self) -> ContactResult<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// A birthday is "passed" only when `today`'s month/day is strictly after
    /// it. Feb 29 birthdays are observed on Feb 28 in non-leap years, so the
    /// result is always in `0..=365`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> ContactResult<i64> {
        let birthday = self
            .birthday
            .date()
            .ok_or_else(|| ContactError::MissingBirthday(self.name.to_string()))?;

        let next = next_occurrence(birthday, today)
            .ok_or_else(|| ContactError::DateOutOfRange(today.to_string()))?;

        Ok((next - today).num_days())
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, self.birthday
        )
    }
}
