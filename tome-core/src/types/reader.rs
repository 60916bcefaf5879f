//! Readers and their per-book ratings

use super::{Book, Email, Rating};
use crate::error::{NoOpError, Result, TomeError, ValidationError};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Someone who reads and rates books
///
/// Each book appears at most once in the reading map, keyed by title. A book
/// that was read without being rated maps to `None`.
#[derive(Debug, Clone)]
pub struct Reader {
    name: String,
    email: Email,
    books: BTreeMap<String, Option<Rating>>,
}

impl Reader {
    pub fn new(name: impl Into<String>, email: Email) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        Ok(Self {
            name,
            email,
            books: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Record that `book` was read, overwriting any earlier entry for it
    ///
    /// Returns the rating previously stored for the book, if any.
    pub fn record_reading(&mut self, book: &Book, rating: Option<Rating>) -> Option<Rating> {
        self.books
            .insert(book.title().to_string(), rating)
            .flatten()
    }

    /// Whether this reader has read the book with the given title
    pub fn has_read(&self, title: &str) -> bool {
        self.books.contains_key(title)
    }

    /// The rating given to a book, `None` if unread or unrated
    pub fn rating_for(&self, title: &str) -> Option<Rating> {
        self.books.get(title).copied().flatten()
    }

    /// Number of distinct books read
    pub fn books_read(&self) -> usize {
        self.books.len()
    }

    /// Books read, ordered by title, with the rating given if any
    pub fn readings(&self) -> impl Iterator<Item = (&str, Option<Rating>)> + '_ {
        self.books.iter().map(|(title, rating)| (title.as_str(), *rating))
    }

    /// Mean of the ratings this reader has given; unrated books are not counted
    pub fn average_rating(&self) -> Result<f64> {
        super::rating::mean(self.books.values().flatten().copied())
            .ok_or_else(|| TomeError::EmptyHistory(format!("reader '{}'", self.name)))
    }

    /// Change the contact address
    ///
    /// Fails without mutating when the address is malformed or unchanged.
    pub fn update_contact(&mut self, address: &str) -> Result<()> {
        let email = Email::parse(address)?;
        if email == self.email {
            return Err(NoOpError::ContactUnchanged(email.into()).into());
        }

        tracing::debug!(reader = %self.name, from = %self.email, to = %email, "contact updated");
        self.email = email;
        Ok(())
    }

    /// Replace the contact address, keeping the reading map
    pub(crate) fn replace_details(&mut self, email: Email) -> Email {
        std::mem::replace(&mut self.email, email)
    }
}

impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for Reader {}

impl Hash for Reader {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.email.hash(state);
    }
}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reader: {}, email: {}, books read: {}",
            self.name,
            self.email,
            self.books.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Isbn;

    fn reader(name: &str, email: &str) -> Reader {
        Reader::new(name, Email::parse(email).unwrap()).unwrap()
    }

    fn book(title: &str, isbn: &str) -> Book {
        Book::new(title, Isbn::parse(isbn).unwrap()).unwrap()
    }

    fn rating(value: i64) -> Option<Rating> {
        Some(Rating::new(value).unwrap())
    }

    #[test]
    fn test_record_reading_upserts() {
        let mut alice = reader("Alice", "alice@example.com");
        let dune = book("Dune", "111");

        assert_eq!(alice.record_reading(&dune, rating(2)), None);
        assert_eq!(alice.record_reading(&dune, rating(4)), rating(2));
        assert_eq!(alice.books_read(), 1);
        assert_eq!(alice.rating_for("Dune"), rating(4));
    }

    #[test]
    fn test_unrated_books_are_read_but_not_averaged() {
        let mut alice = reader("Alice", "alice@example.com");
        alice.record_reading(&book("Dune", "111"), rating(4));
        alice.record_reading(&book("Clean Code", "222"), None);

        assert_eq!(alice.books_read(), 2);
        assert!(alice.has_read("Clean Code"));
        assert_eq!(alice.rating_for("Clean Code"), None);
        assert_eq!(alice.average_rating().unwrap(), 4.0);
    }

    #[test]
    fn test_average_without_ratings() {
        let mut bob = reader("Bob", "bob@example.com");
        assert!(matches!(
            bob.average_rating(),
            Err(TomeError::EmptyHistory(_))
        ));

        bob.record_reading(&book("Dune", "111"), None);
        assert!(matches!(
            bob.average_rating(),
            Err(TomeError::EmptyHistory(_))
        ));
    }

    #[test]
    fn test_update_contact() {
        let mut alice = reader("Alice", "alice@example.com");

        let err = alice.update_contact("alice@example.com").unwrap_err();
        assert!(matches!(
            err,
            TomeError::NoOp(NoOpError::ContactUnchanged(_))
        ));

        let err = alice.update_contact("not-an-email").unwrap_err();
        assert!(matches!(
            err,
            TomeError::Validation(ValidationError::InvalidEmail(_))
        ));
        assert_eq!(alice.email().as_str(), "alice@example.com");

        alice.update_contact("alice@work.example").unwrap();
        assert_eq!(alice.email().as_str(), "alice@work.example");
    }

    #[test]
    fn test_equality_is_name_and_email() {
        let a = reader("Alice", "alice@example.com");
        let mut b = reader("Alice", "alice@example.com");
        b.record_reading(&book("Dune", "111"), None);

        assert_eq!(a, b);
        assert_ne!(a, reader("Alice", "other@example.com"));
        assert_ne!(a, reader("Alicia", "alice@example.com"));
    }

    #[test]
    fn test_display() {
        let mut alice = reader("Alice", "alice@example.com");
        alice.record_reading(&book("Dune", "111"), rating(3));
        assert_eq!(
            alice.to_string(),
            "Reader: Alice, email: alice@example.com, books read: 1"
        );
    }
}
