//! Error types for the Lendline domain model.
//!
//! This module defines the errors raised while constructing ratings, rating
//! scales, loans and portfolio snapshots.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core domain operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core domain construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A rating code was empty or whitespace only.
    #[error("Invalid rating code: '{code}'")]
    InvalidRatingCode {
        /// The rejected code.
        code: String,
    },

    /// A rating scale was built without any ratings.
    #[error("Rating scale must contain at least one rating")]
    EmptyScale,

    /// The same rating code appeared twice in a scale.
    #[error("Duplicate rating in scale: {code}")]
    DuplicateRating {
        /// The repeated code.
        code: String,
    },

    /// A rating code is not a member of the scale.
    #[error("Unknown rating: {code}")]
    UnknownRating {
        /// The unrecognised code.
        code: String,
    },

    /// A currency amount violated its constraints.
    #[error("Invalid {field}: {value} - {reason}")]
    InvalidAmount {
        /// Name of the offending field.
        field: String,
        /// The offending value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid rating code error.
    #[must_use]
    pub fn invalid_rating_code(code: impl Into<String>) -> Self {
        Self::InvalidRatingCode { code: code.into() }
    }

    /// Creates a duplicate rating error.
    #[must_use]
    pub fn duplicate_rating(code: impl Into<String>) -> Self {
        Self::DuplicateRating { code: code.into() }
    }

    /// Creates an unknown rating error.
    #[must_use]
    pub fn unknown_rating(code: impl Into<String>) -> Self {
        Self::UnknownRating { code: code.into() }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(field: impl Into<String>, value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid amount error for a value that must not be negative.
    #[must_use]
    pub fn negative_amount(field: impl Into<String>, value: Decimal) -> Self {
        Self::invalid_amount(field, value, "must not be negative")
    }
}
