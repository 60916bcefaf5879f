//! The catalog: the single owner of every book and reader
//!
//! Books are keyed by title and readers by name. All mutations that touch
//! both sides of the reader/book relationship go through [`Catalog`], which
//! validates everything up front so a failed call never leaves a partial
//! update behind.

mod ranking;

pub use ranking::{CatalogSummary, RatedTitle, Ranked, Standing};

use crate::error::{LookupError, Result, ValidationError};
use crate::types::{Book, BookKind, Email, Isbn, Proficiency, Rating, Reader};
use std::collections::BTreeMap;

/// Outcome of registering a book or reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// No entry existed under the key
    Created,

    /// An entry existed; its details were replaced and its history kept
    Replaced,
}

/// Aggregates books, readers and the ratings linking them
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: BTreeMap<String, Book>,
    readers: BTreeMap<String, Reader>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book, or replace the details of the book with the same title
    ///
    /// The catalog builds the book itself, so its rating history starts empty
    /// and only grows through [`Catalog::record_reading`]. A replaced book
    /// keeps its rating history so that readers who already read it stay
    /// consistent with it. Fails if another title already holds the ISBN.
    pub fn register_book(&mut self, title: &str, isbn: Isbn, kind: BookKind) -> Result<Registration> {
        self.ensure_isbn_free(title, &isbn)?;

        if let Some(existing) = self.books.get_mut(title) {
            let previous = existing.replace_details(isbn, kind);
            tracing::warn!(
                title = %title,
                previous_isbn = %previous,
                isbn = %existing.isbn(),
                "replaced existing book entry"
            );
            return Ok(Registration::Replaced);
        }

        let book = Book::with_kind(title, isbn, kind)?;
        tracing::debug!(title = %book.title(), isbn = %book.isbn(), "registered book");
        self.books.insert(book.title().to_string(), book);
        Ok(Registration::Created)
    }

    /// Register a general book
    pub fn create_book(&mut self, title: &str, isbn: &str) -> Result<Registration> {
        self.register_book(title, Isbn::parse(isbn)?, BookKind::General)
    }

    /// Register a narrative (fiction) book
    pub fn create_novel(&mut self, title: &str, author: &str, isbn: &str) -> Result<Registration> {
        let kind = BookKind::Narrative {
            author: author.to_string(),
        };
        self.register_book(title, Isbn::parse(isbn)?, kind)
    }

    /// Register an instructional (non-fiction) book
    pub fn create_non_fiction(
        &mut self,
        title: &str,
        subject: &str,
        level: Proficiency,
        isbn: &str,
    ) -> Result<Registration> {
        let kind = BookKind::Instructional {
            subject: subject.to_string(),
            level,
        };
        self.register_book(title, Isbn::parse(isbn)?, kind)
    }

    /// ISBNs are unique across titles; a title may keep its own ISBN
    fn ensure_isbn_free(&self, title: &str, isbn: &Isbn) -> Result<()> {
        match self
            .books
            .values()
            .find(|book| book.isbn() == isbn && book.title() != title)
        {
            Some(holder) => Err(ValidationError::DuplicateIsbn {
                isbn: isbn.to_string(),
                title: holder.title().to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Add a reader, or update the address of the reader with the same name
    ///
    /// A replaced reader keeps the books already read.
    pub fn register_reader(&mut self, name: &str, email: &str) -> Result<Registration> {
        let email = Email::parse(email)?;

        if let Some(existing) = self.readers.get_mut(name) {
            let previous = existing.replace_details(email);
            tracing::warn!(
                reader = %name,
                previous_email = %previous,
                email = %existing.email(),
                "replaced existing reader entry"
            );
            return Ok(Registration::Replaced);
        }

        let reader = Reader::new(name, email)?;
        tracing::debug!(reader = %name, email = %reader.email(), "registered reader");
        self.readers.insert(name.to_string(), reader);
        Ok(Registration::Created)
    }

    /// Register a reader together with books already read
    ///
    /// Every title and rating is checked before the reader is registered, so
    /// an unknown title or bad rating leaves the catalog untouched.
    pub fn register_reader_with_books(
        &mut self,
        name: &str,
        email: &str,
        books: &[(&str, Option<i64>)],
    ) -> Result<Registration> {
        let email = Email::parse(email)?;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let readings = books
            .iter()
            .map(|(title, rating)| -> Result<(String, Option<Rating>)> {
                let rating = rating.map(Rating::new).transpose()?;
                let title = self.book(title)?.title().to_string();
                Ok((title, rating))
            })
            .collect::<Result<Vec<_>>>()?;

        let registration = self.register_reader(name, email.as_str())?;
        for (title, rating) in readings {
            self.link(name, &title, rating)?;
        }

        Ok(registration)
    }

    /// Record that a reader has read a book, optionally with a rating
    ///
    /// Updates the reader's reading map and, when a rating is given, the
    /// book's rating history. Fails with no changes if the rating is out of
    /// range or either key is unknown.
    pub fn record_reading(&mut self, reader: &str, title: &str, rating: Option<i64>) -> Result<()> {
        let rating = rating.map(Rating::new).transpose()?;
        self.link(reader, title, rating)
    }

    fn link(&mut self, reader: &str, title: &str, rating: Option<Rating>) -> Result<()> {
        let Some(entry) = self.readers.get_mut(reader) else {
            return Err(LookupError::UnknownReader(reader.to_string()).into());
        };
        let Some(book) = self.books.get_mut(title) else {
            return Err(LookupError::UnknownBook(title.to_string()).into());
        };

        entry.record_reading(book, rating);
        if let Some(rating) = rating {
            book.push_rating(rating);
        }

        tracing::debug!(
            reader = %reader,
            title = %title,
            rating = ?rating.map(Rating::value),
            "recorded reading"
        );
        Ok(())
    }

    /// Give a book a new catalog identifier, returning the old one
    pub fn reassign_isbn(&mut self, title: &str, isbn: &str) -> Result<Isbn> {
        let isbn = Isbn::parse(isbn)?;
        self.book(title)?;
        self.ensure_isbn_free(title, &isbn)?;

        let book = self
            .books
            .get_mut(title)
            .ok_or_else(|| LookupError::UnknownBook(title.to_string()))?;
        Ok(book.set_isbn(isbn))
    }

    /// Change a reader's contact address
    pub fn update_reader_contact(&mut self, name: &str, email: &str) -> Result<()> {
        self.readers
            .get_mut(name)
            .ok_or_else(|| LookupError::UnknownReader(name.to_string()))?
            .update_contact(email)
    }

    /// Look up a book by title
    pub fn book(&self, title: &str) -> Result<&Book> {
        self.books
            .get(title)
            .ok_or_else(|| LookupError::UnknownBook(title.to_string()).into())
    }

    /// Look up a reader by name
    pub fn reader(&self, name: &str) -> Result<&Reader> {
        self.readers
            .get(name)
            .ok_or_else(|| LookupError::UnknownReader(name.to_string()).into())
    }

    /// All books, ordered by title
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }

    /// All readers, ordered by name
    pub fn readers(&self) -> impl Iterator<Item = &Reader> + '_ {
        self.readers.values()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.readers.is_empty()
    }
}
