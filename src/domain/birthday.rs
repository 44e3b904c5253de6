//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Strict `YYYY-MM-DD` shape. Calendar validity is checked separately.
static ISO_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")
        .expect("Failed to compile ISO date regex")
});

/// Date format used for parsing and rendering birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// An optional, validated birthday.
///
/// An absent birthday is valid and means "unknown". A present birthday is
/// always a real calendar date that was written as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new(Some("1990-05-15")).unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-15");
///
/// assert!(Birthday::new(Some("2021-02-30")).is_err());
/// assert!(!Birthday::new(None).unwrap().is_set());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Create a new Birthday, validating the format when a value is given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for malformed strings
    /// (wrong separators, missing zero padding, non-numeric fields) and for
    /// impossible dates such as `2021-02-30`.
    pub fn new(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            None => Ok(Self(None)),
            Some(raw) => Self::parse(raw)
                .map(|date| Self(Some(date)))
                .ok_or_else(|| ValidationError::InvalidBirthday(raw.to_string())),
        }
    }

    /// Replace the birthday. On error the current value is kept.
    pub fn set(&mut self, value: Option<&str>) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    /// Validate birthday format.
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        let caps = ISO_DATE_REGEX.captures(value)?;
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;

        if year < 1 {
            return None;
        }

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The stored date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Whether a birthday has been recorded.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Date on which a birthday is observed in `year`.
///
/// Feb 29 birthdays are observed on Feb 28 in non-leap years.
pub fn observed_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// First observance of `birthday` on or after `today`.
///
/// Returns `None` only when the result would fall outside chrono's
/// representable date range.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = observed_in(birthday, today.year())?;

    if this_year < today {
        observed_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

// Serde support - serialize as an optional string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0
            .map(|date| date.format(BIRTHDAY_FORMAT).to_string())
            .serialize(serializer)
    }
}

// Serde support - deserialize from optional string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Birthday::new(s.as_deref()).map_err(serde::de::Error::custom)
    }
}

// Absent birthdays render as an empty string
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(BIRTHDAY_FORMAT)),
            None => Ok(()),
        }
    }
}
