//! Core domain types: books, readers and the values they carry

mod book;
mod identifier;
mod rating;
mod reader;

pub use book::{Book, BookKind, Proficiency};
pub use identifier::{Email, Isbn};
pub use rating::Rating;
pub use reader::Reader;
