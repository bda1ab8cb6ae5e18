//! Error types for strategy construction.
//!
//! Only configuration problems are errors. Runtime no-match outcomes (gate
//! closed, loan not acceptable, amount below minimum) resolve to empty
//! selections or zero amounts instead.

use lendline_core::error::CoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for strategy operations.
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Errors that can occur while building a strategy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// A rating on the scale has no policy entry.
    #[error("Missing strategy for rating {rating}")]
    MissingRatingPolicy {
        /// The uncovered rating code.
        rating: String,
    },

    /// A policy entry or override names a rating that is not on the scale.
    #[error("Rating {rating} is not on the rating scale")]
    UnknownRating {
        /// The unrecognised rating code.
        rating: String,
    },

    /// The investment increment is not positive.
    #[error("Investment increment must be positive, got {value}")]
    InvalidIncrement {
        /// The rejected increment.
        value: Decimal,
    },

    /// A configured share lies outside `[0, 1]`.
    #[error("Invalid {field} for rating {rating}: {value} (expected a fraction in [0, 1])")]
    InvalidShare {
        /// The rating the share belongs to.
        rating: String,
        /// The share field name.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A required per-rating field was set neither in the override nor in the defaults.
    #[error("Missing field '{field}' for rating {rating}")]
    MissingField {
        /// The rating being resolved.
        rating: String,
        /// The missing field name.
        field: String,
    },

    /// Configuration text could not be parsed.
    #[error("Failed to parse {format} strategy configuration: {reason}")]
    Parse {
        /// Source format (`toml` or `json`).
        format: String,
        /// Parser message.
        reason: String,
    },

    /// Configuration file could not be read.
    #[error("Failed to read strategy configuration '{path}': {reason}")]
    Io {
        /// The file path.
        path: String,
        /// The underlying IO error message.
        reason: String,
    },

    /// Invalid domain value.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StrategyError {
    /// Create a missing rating policy error.
    #[must_use]
    pub fn missing_rating_policy(rating: impl Into<String>) -> Self {
        Self::MissingRatingPolicy {
            rating: rating.into(),
        }
    }

    /// Create an unknown rating error.
    #[must_use]
    pub fn unknown_rating(rating: impl Into<String>) -> Self {
        Self::UnknownRating {
            rating: rating.into(),
        }
    }

    /// Create an invalid share error.
    #[must_use]
    pub fn invalid_share(rating: impl Into<String>, field: impl Into<String>, value: Decimal) -> Self {
        Self::InvalidShare {
            rating: rating.into(),
            field: field.into(),
            value,
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(rating: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            rating: rating.into(),
            field: field.into(),
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(format: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            format: format.into(),
            reason: reason.to_string(),
        }
    }
}
