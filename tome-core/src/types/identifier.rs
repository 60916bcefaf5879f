//! Validated identifiers: catalog ISBNs and reader contact addresses

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier for a book
///
/// Accepts digits with optional `-` separators; the final character may be an
/// `X` check digit (ISBN-10). The value is kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let digits: Vec<char> = value.chars().filter(|c| *c != '-').collect();

        let valid = match digits.split_last() {
            None => false,
            Some((last, rest)) => {
                rest.iter().all(|c| c.is_ascii_digit())
                    && (last.is_ascii_digit() || *last == 'X' || *last == 'x')
            }
        };

        if valid {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidIsbn(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Isbn {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reader contact address: exactly one `@` between two non-empty parts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let parts: Vec<&str> = value.split('@').collect();

        match parts.as_slice() {
            [local, domain] if !local.is_empty() && !domain.is_empty() => Ok(Self(value)),
            _ => Err(ValidationError::InvalidEmail(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
