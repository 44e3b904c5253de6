//! Shared fixtures for integration tests.

use address_book::{AddressBook, Record};

/// Create a record with a birthday and the given phone numbers.
pub fn sample_record(name: &str, birthday: Option<&str>, phones: &[&str]) -> Record {
    let mut record = Record::new(name, birthday).expect("valid birthday");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    record
}

/// The two-contact address book used by the scenario tests.
pub fn john_and_jane() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "John",
        Some("1990-05-15"),
        &["1234567890", "5555555555"],
    ));
    book.add_record(sample_record("Jane", Some("1985-08-20"), &["9876543210"]));
    book
}
