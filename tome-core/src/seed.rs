//! Seed documents: JSON descriptions of a catalog to replay at startup
//!
//! ```json
//! {
//!   "books": [
//!     { "title": "Dune", "isbn": "111", "kind": "narrative", "author": "Frank Herbert" },
//!     { "title": "Clean Code", "isbn": "222", "kind": "general" }
//!   ],
//!   "readers": [
//!     { "name": "Alice", "email": "alice@example.com", "books": [{ "title": "Dune", "rating": 4 }] }
//!   ],
//!   "readings": [{ "reader": "Alice", "book": "Clean Code" }]
//! }
//! ```
//!
//! Every book entry must carry a `kind` of `general`, `narrative` (with
//! `author`) or `instructional` (with `subject` and `level`).
//!
//! Validation happens when the seed is applied, through the same catalog
//! operations a caller would use, so a seed can never bypass them.

use crate::catalog::{Catalog, Registration};
use crate::error::Result;
use crate::types::{BookKind, Isbn};
use serde::Deserialize;

/// A whole catalog description
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogSeed {
    #[serde(default)]
    pub books: Vec<BookSeed>,

    #[serde(default)]
    pub readers: Vec<ReaderSeed>,

    #[serde(default)]
    pub readings: Vec<ReadingSeed>,
}

/// One book; the `kind` tag is required
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BookSeed {
    pub title: String,
    pub isbn: String,
    #[serde(flatten)]
    pub kind: BookKind,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReaderSeed {
    pub name: String,
    pub email: String,

    /// Books already read at registration
    #[serde(default)]
    pub books: Vec<ShelfEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ShelfEntry {
    pub title: String,
    #[serde(default)]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReadingSeed {
    pub reader: String,
    pub book: String,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Counts of what applying a seed did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub replaced: usize,
    pub readings: usize,
}

impl SeedReport {
    fn count(&mut self, registration: Registration) {
        match registration {
            Registration::Created => self.created += 1,
            Registration::Replaced => self.replaced += 1,
        }
    }
}

impl CatalogSeed {
    /// Parse a seed from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay books, then readers, then readings into `catalog`
    ///
    /// Stops at the first failing entry; entries before it stay applied.
    pub fn apply(&self, catalog: &mut Catalog) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        for seed in &self.books {
            let isbn = Isbn::parse(&seed.isbn)?;
            report.count(catalog.register_book(&seed.title, isbn, seed.kind.clone())?);
        }

        for seed in &self.readers {
            let shelf: Vec<(&str, Option<i64>)> = seed
                .books
                .iter()
                .map(|entry| (entry.title.as_str(), entry.rating))
                .collect();
            report.count(catalog.register_reader_with_books(&seed.name, &seed.email, &shelf)?);
            report.readings += shelf.len();
        }

        for seed in &self.readings {
            catalog.record_reading(&seed.reader, &seed.book, seed.rating)?;
            report.readings += 1;
        }

        tracing::info!(
            created = report.created,
            replaced = report.replaced,
            readings = report.readings,
            "applied catalog seed"
        );
        Ok(report)
    }

    /// Build a fresh catalog from this seed
    pub fn build(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        self.apply(&mut catalog)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LookupError, TomeError, ValidationError};
    use crate::types::Proficiency;

    const SEED: &str = r#"{
        "books": [
            { "title": "Dune", "isbn": "111", "kind": "narrative", "author": "Frank Herbert" },
            { "title": "Clean Code", "isbn": "222", "kind": "instructional",
              "subject": "software", "level": "intermediate" }
        ],
        "readers": [
            { "name": "Alice", "email": "alice@example.com",
              "books": [{ "title": "Dune", "rating": 4 }] },
            { "name": "Bob", "email": "bob@example.com" }
        ],
        "readings": [
            { "reader": "Bob", "book": "Dune", "rating": 3 },
            { "reader": "Alice", "book": "Clean Code" }
        ]
    }"#;

    #[test]
    fn test_parse_seed() {
        let seed = CatalogSeed::from_json(SEED).unwrap();
        assert_eq!(seed.books.len(), 2);
        assert_eq!(
            seed.books[1].kind,
            BookKind::Instructional {
                subject: "software".to_string(),
                level: Proficiency::Intermediate,
            }
        );
        assert_eq!(seed.readers[1].books, Vec::new());
        assert_eq!(seed.readings[1].rating, None);
    }

    #[test]
    fn test_build_catalog() {
        let seed = CatalogSeed::from_json(SEED).unwrap();
        let mut catalog = Catalog::new();
        let report = seed.apply(&mut catalog).unwrap();

        assert_eq!(
            report,
            SeedReport {
                created: 4,
                replaced: 0,
                readings: 3
            }
        );
        assert_eq!(catalog.highest_rated_book().unwrap().title(), "Dune");
        assert_eq!(catalog.top_n_readers(1)[0].item.name(), "Alice");
    }

    #[test]
    fn test_empty_seed() {
        let catalog = CatalogSeed::from_json("{}").unwrap().build().unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CatalogSeed::from_json("{ \"books\": 3 }"),
            Err(TomeError::Seed(_))
        ));
    }

    #[test]
    fn test_book_kind_is_required() {
        let missing_kind = r#"{ "books": [{ "title": "Dune", "isbn": "111" }] }"#;
        assert!(matches!(
            CatalogSeed::from_json(missing_kind),
            Err(TomeError::Seed(_))
        ));
    }

    #[test]
    fn test_duplicate_isbn_in_seed() {
        let seed = r#"{ "books": [
            { "title": "Dune", "isbn": "111", "kind": "general" },
            { "title": "Emma", "isbn": "111", "kind": "general" }
        ] }"#;
        assert!(matches!(
            CatalogSeed::from_json(seed).unwrap().build(),
            Err(TomeError::Validation(ValidationError::DuplicateIsbn { .. }))
        ));
    }

    #[test]
    fn test_invalid_entries_are_reported() {
        let bad_isbn = r#"{ "books": [{ "title": "Dune", "isbn": "abc", "kind": "general" }] }"#;
        assert!(matches!(
            CatalogSeed::from_json(bad_isbn).unwrap().build(),
            Err(TomeError::Validation(ValidationError::InvalidIsbn(_)))
        ));

        let unknown = r#"{ "readings": [{ "reader": "Zed", "book": "Dune" }] }"#;
        assert!(matches!(
            CatalogSeed::from_json(unknown).unwrap().build(),
            Err(TomeError::Lookup(LookupError::UnknownReader(_)))
        ));
    }
}
