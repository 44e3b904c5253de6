//! Address book: contact records keyed by name.

use super::record::Record;
use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

/// A directory of contact records keyed by name.
///
/// Records keep the order in which their names were first added. Adding a
/// record under an existing name replaces the old record in place.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John", Some("1990-05-15")).unwrap());
/// book.add_record(Record::new("Jane", None).unwrap());
///
/// let pages: Vec<_> = book.iterator(1).unwrap().collect();
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0][0].name(), "John");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: HashMap<String, Record>,

    /// Names in insertion order; always the same set as `records` keys
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().to_string();
        let previous = self.records.insert(name.clone(), record);

        if previous.is_none() {
            tracing::debug!(contact = %name, "Added record");
            self.order.push(name);
        } else {
            tracing::debug!(contact = %name, "Replaced record");
        }

        previous
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Does nothing if the name is unknown.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|n| n != name);
        tracing::debug!(contact = %name, "Deleted record");
        Some(removed)
    }

    /// Split the records into pages of at most `page_size`, in insertion order.
    ///
    /// The last page may be shorter. Each call starts a fresh pass over the
    /// current contents.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` if `page_size` is zero.
    pub fn iterator(&self, page_size: usize) -> Result<Pages<'_>, ValidationError> {
        if page_size == 0 {
            return Err(ValidationError::InvalidPageSize(page_size));
        }

        Ok(Pages {
            chunks: self.order.chunks(page_size),
            records: &self.records,
        })
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// All names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Whether a record with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the address book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Pages of records produced by [`AddressBook::iterator`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: std::slice::Chunks<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let names = self.chunks.next()?;
        let records = self.records;
        Some(names.iter().filter_map(|name| records.get(name)).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(mut book: AddressBook) -> Self {
        book.order
            .iter()
            .filter_map(|name| book.records.remove(name))
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name, None).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));
        book.add_record(record("Bob", "2222222222"));
        book.add_record(record("Carol", "3333333333"));
        book
    }

    fn page_names(page: &[&Record]) -> Vec<String> {
        page.iter().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let book = sample_book();
        assert_eq!(book.len(), 3);
        assert_eq!(book.find("Bob").unwrap().name(), "Bob");
        assert!(book.find("Dave").is_none());
        assert!(book.contains("Carol"));
    }

    #[test]
    fn test_add_record_last_write_wins() {
        let mut book = sample_book();
        let previous = book.add_record(record("Alice", "9999999999"));

        assert_eq!(previous.unwrap().phones()[0].as_str(), "1111111111");
        assert_eq!(book.len(), 3);

        let alice = book.find("Alice").unwrap();
        assert!(alice.find_phone("9999999999").is_some());
        assert!(alice.find_phone("1111111111").is_none());

        // Replacing keeps the original position
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_find_mut() {
        let mut book = sample_book();
        book.find_mut("Bob")
            .unwrap()
            .edit_phone("2222222222", "2223334444")
            .unwrap();
        assert!(book.find("Bob").unwrap().find_phone("2223334444").is_some());
    }

    #[test]
    fn test_delete() {
        let mut book = sample_book();
        let removed = book.delete("Bob");
        assert_eq!(removed.unwrap().name(), "Bob");
        assert!(book.find("Bob").is_none());
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice", "Carol"]);

        // Unknown names are a no-op
        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_iterator_page_size_one() {
        let book = sample_book();
        let pages: Vec<_> = book.iterator(1).unwrap().collect();

        assert_eq!(pages.len(), 3);
        assert_eq!(page_names(&pages[0]), vec!["Alice"]);
        assert_eq!(page_names(&pages[1]), vec!["Bob"]);
        assert_eq!(page_names(&pages[2]), vec!["Carol"]);
    }

    #[test]
    fn test_iterator_short_last_page() {
        let book = sample_book();
        let sizes: Vec<usize> = book.iterator(2).unwrap().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![2, 1]);
    }

    #[test]
    fn test_iterator_large_page() {
        let book = sample_book();
        let mut pages = book.iterator(10).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.next().unwrap().len(), 3);
        assert!(pages.next().is_none());
        assert!(pages.next().is_none());
    }

    #[test]
    fn test_iterator_empty_book() {
        let book = AddressBook::new();
        assert_eq!(book.iterator(3).unwrap().count(), 0);
    }

    #[test]
    fn test_iterator_zero_page_size() {
        let book = sample_book();
        assert_eq!(
            book.iterator(0).unwrap_err(),
            ValidationError::InvalidPageSize(0)
        );
    }

    #[test]
    fn test_iterator_reflects_current_contents() {
        let mut book = sample_book();
        assert_eq!(book.iterator(1).unwrap().count(), 3);

        book.delete("Alice");
        book.add_record(record("Dave", "4444444444"));

        let pages: Vec<_> = book.iterator(2).unwrap().collect();
        assert_eq!(page_names(&pages[0]), vec!["Bob", "Carol"]);
        assert_eq!(page_names(&pages[1]), vec!["Dave"]);
    }

    #[test]
    fn test_display() {
        let book = sample_book();
        assert_eq!(
            book.to_string(),
            "Contact name: Alice, phones: 1111111111, birthday: \n\
             Contact name: Bob, phones: 2222222222, birthday: \n\
             Contact name: Carol, phones: 3333333333, birthday: "
        );
        assert_eq!(AddressBook::new().to_string(), "");
    }

    #[test]
    fn test_serde_preserves_order() {
        let book = sample_book();
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with(r#"[{"name":"Alice""#));

        let parsed: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
        assert_eq!(parsed.names().collect::<Vec<_>>(), vec!["Alice", "Bob", "Carol"]);
    }
}
