//! Books and their rating histories

use super::{Isbn, Rating};
use crate::error::{Result, TomeError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// How demanding an instructional book is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
        };
        f.write_str(label)
    }
}

/// What sort of book this is, with the attributes specific to that sort
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookKind {
    /// A book with no further classification
    #[default]
    General,

    /// Fiction, credited to an author
    Narrative { author: String },

    /// Non-fiction teaching material
    Instructional { subject: String, level: Proficiency },
}

/// A catalog book
///
/// Identity is the ISBN together with the kind of book; the title is fixed at
/// creation and the rating history only ever grows.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    title: String,
    isbn: Isbn,
    #[serde(flatten)]
    kind: BookKind,
    ratings: Vec<Rating>,
}

impl Book {
    /// Create a general book
    pub fn new(title: impl Into<String>, isbn: Isbn) -> Result<Self> {
        Self::with_kind(title, isbn, BookKind::General)
    }

    /// Create a narrative (fiction) book
    pub fn narrative(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: Isbn,
    ) -> Result<Self> {
        Self::with_kind(
            title,
            isbn,
            BookKind::Narrative {
                author: author.into(),
            },
        )
    }

    /// Create an instructional (non-fiction) book
    pub fn instructional(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: Proficiency,
        isbn: Isbn,
    ) -> Result<Self> {
        Self::with_kind(
            title,
            isbn,
            BookKind::Instructional {
                subject: subject.into(),
                level,
            },
        )
    }

    /// Create a book of any kind
    pub fn with_kind(title: impl Into<String>, isbn: Isbn, kind: BookKind) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }

        Ok(Self {
            title,
            isbn,
            kind,
            ratings: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    /// Author of a narrative book
    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            BookKind::Narrative { author } => Some(author),
            _ => None,
        }
    }

    /// Subject of an instructional book
    pub fn subject(&self) -> Option<&str> {
        match &self.kind {
            BookKind::Instructional { subject, .. } => Some(subject),
            _ => None,
        }
    }

    /// Proficiency level of an instructional book
    pub fn level(&self) -> Option<Proficiency> {
        match &self.kind {
            BookKind::Instructional { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Ratings in the order they were recorded
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Replace the catalog identifier, returning the old one
    pub fn set_isbn(&mut self, isbn: Isbn) -> Isbn {
        mem::replace(&mut self.isbn, isbn)
    }

    /// Validate and append a rating
    ///
    /// Out-of-range values leave the history untouched.
    pub fn add_rating(&mut self, value: i64) -> Result<Rating> {
        let rating = Rating::new(value)?;
        self.push_rating(rating);
        Ok(rating)
    }

    pub(crate) fn push_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    /// Mean of all recorded ratings
    pub fn average_rating(&self) -> Result<f64> {
        super::rating::mean(self.ratings.iter().copied())
            .ok_or_else(|| TomeError::EmptyHistory(format!("book '{}'", self.title)))
    }

    /// Swap in new descriptive attributes, keeping the rating history
    ///
    /// Returns the previous identifier.
    pub(crate) fn replace_details(&mut self, isbn: Isbn, kind: BookKind) -> Isbn {
        self.kind = kind;
        mem::replace(&mut self.isbn, isbn)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn && mem::discriminant(&self.kind) == mem::discriminant(&other.kind)
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
        mem::discriminant(&self.kind).hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BookKind::General => write!(f, "{} (ISBN {})", self.title, self.isbn),
            BookKind::Narrative { author } => write!(f, "{} by {}", self.title, author),
            BookKind::Instructional { subject, level } => {
                let article = match level {
                    Proficiency::Beginner => "a",
                    Proficiency::Intermediate | Proficiency::Advanced => "an",
                };
                write!(f, "{}, {} {} manual on {}", self.title, article, level, subject)
            }
        }
    }
}
