//! Rating types for marketplace loans.
//!
//! A rating is a discrete risk/return category assigned to a loan by the
//! marketplace. The set of ratings is not hard-coded: it is supplied as an
//! ordered [`RatingScale`] so that policies can be checked for totality and
//! iterated in a stable, explicit order.
//!
//! - [`Rating`]: Opaque, hashable rating key
//! - [`RatingScale`]: Ordered enumeration of ratings (best to worst)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Codes of the marketplace's standard scale, best to worst.
const STANDARD_CODES: [&str; 8] = ["AAAAA", "AAAA", "AAA", "AA", "A", "B", "C", "D"];

/// An opaque rating key.
///
/// Ratings compare by their code only. Ordering between ratings is a property
/// of the [`RatingScale`] they belong to, not of the key itself.
///
/// # Examples
///
/// ```
/// use lendline_core::types::Rating;
///
/// let rating = Rating::new("AAA").unwrap();
/// assert_eq!(rating.code(), "AAA");
/// assert_eq!(rating.to_string(), "AAA");
/// assert!(Rating::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rating(String);

impl Rating {
    /// Creates a rating from its code.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRatingCode` if the code is blank.
    pub fn new(code: impl AsRef<str>) -> CoreResult<Self> {
        let trimmed = code.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoreError::invalid_rating_code(code.as_ref()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the rating code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Rating {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// An ordered, duplicate-free enumeration of ratings.
///
/// The order is the scale's canonical iteration order (conventionally best
/// to worst). Policies must cover every member of the scale.
///
/// # Examples
///
/// ```
/// use lendline_core::types::RatingScale;
///
/// let scale = RatingScale::new(["A", "B", "C"]).unwrap();
/// assert_eq!(scale.len(), 3);
///
/// let b = scale.parse("B").unwrap();
/// assert_eq!(scale.position(&b), Some(1));
/// assert!(scale.parse("Z").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rating>", into = "Vec<Rating>")]
pub struct RatingScale {
    ratings: Vec<Rating>,
}

impl RatingScale {
    /// Creates a scale from rating codes, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a code is blank, or a code
    /// appears more than once.
    pub fn new<I, S>(codes: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ratings = codes
            .into_iter()
            .map(Rating::new)
            .collect::<CoreResult<Vec<_>>>()?;
        Self::from_ratings(ratings)
    }

    /// Creates a scale from already constructed ratings, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains duplicates.
    pub fn from_ratings(ratings: Vec<Rating>) -> CoreResult<Self> {
        if ratings.is_empty() {
            return Err(CoreError::EmptyScale);
        }
        let mut seen = HashSet::with_capacity(ratings.len());
        for rating in &ratings {
            if !seen.insert(rating.code()) {
                return Err(CoreError::duplicate_rating(rating.code()));
            }
        }
        Ok(Self { ratings })
    }

    /// Returns the marketplace's standard eight-grade scale.
    ///
    /// `AAAAA` is the lowest risk grade and `D` the highest.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            ratings: STANDARD_CODES
                .iter()
                .map(|code| Rating((*code).to_string()))
                .collect(),
        }
    }

    /// Returns the number of ratings on the scale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Always false; a scale holds at least one rating.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Iterates the ratings in scale order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rating> {
        self.ratings.iter()
    }

    /// Returns the ratings as a slice, in scale order.
    #[must_use]
    pub fn as_slice(&self) -> &[Rating] {
        &self.ratings
    }

    /// Returns true if the rating is a member of this scale.
    #[must_use]
    pub fn contains(&self, rating: &Rating) -> bool {
        self.ratings.contains(rating)
    }

    /// Returns the zero-based position of the rating on the scale.
    #[must_use]
    pub fn position(&self, rating: &Rating) -> Option<usize> {
        self.ratings.iter().position(|r| r == rating)
    }

    /// Looks up a rating on this scale by its code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownRating` if no member has this code.
    pub fn parse(&self, code: &str) -> CoreResult<Rating> {
        let code = code.trim();
        self.ratings
            .iter()
            .find(|r| r.code() == code)
            .cloned()
            .ok_or_else(|| CoreError::unknown_rating(code))
    }
}

impl<'a> IntoIterator for &'a RatingScale {
    type Item = &'a Rating;
    type IntoIter = std::slice::Iter<'a, Rating>;

    fn into_iter(self) -> Self::IntoIter {
        self.ratings.iter()
    }
}

impl TryFrom<Vec<Rating>> for RatingScale {
    type Error = CoreError;

    fn try_from(ratings: Vec<Rating>) -> CoreResult<Self> {
        Self::from_ratings(ratings)
    }
}

impl From<RatingScale> for Vec<Rating> {
    fn from(scale: RatingScale) -> Self {
        scale.ratings
    }
}
