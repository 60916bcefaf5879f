//! Tome Core Library
//!
//! This crate provides the data model and ranking logic for Tome: a catalog of
//! books, the readers who read them and the ratings they give. The [`Catalog`]
//! owns every book and reader and answers aggregate queries such as most-read
//! and highest-rated book.

pub mod catalog;
pub mod error;
pub mod seed;
pub mod types;

pub use catalog::{Catalog, CatalogSummary, RatedTitle, Ranked, Registration, Standing};
pub use error::{LookupError, NoOpError, Result, TomeError, ValidationError};
pub use seed::{CatalogSeed, SeedReport};
pub use types::{Book, BookKind, Email, Isbn, Proficiency, Rating, Reader};
