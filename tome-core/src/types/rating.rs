//! Ratings a reader can assign to a book

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rating in the closed range `0..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating
    pub const MIN: u8 = 0;

    /// Highest accepted rating
    pub const MAX: u8 = 4;

    /// Validate a raw value
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arithmetic mean of a set of ratings, `None` when there are none
pub(crate) fn mean<I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = Rating>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), r| (sum + r.0 as u64, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(4).unwrap().value(), 4);
        assert_eq!(
            Rating::new(5),
            Err(ValidationError::RatingOutOfRange(5))
        );
        assert_eq!(
            Rating::new(-1),
            Err(ValidationError::RatingOutOfRange(-1))
        );
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(Vec::new()), None);

        let ratings = [4, 3].map(|v| Rating::new(v).unwrap());
        assert_eq!(mean(ratings), Some(3.5));
    }

    #[test]
    fn test_rating_deserialization_validates() {
        let rating: Rating = serde_json::from_str("3").unwrap();
        assert_eq!(rating.value(), 3);
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}
