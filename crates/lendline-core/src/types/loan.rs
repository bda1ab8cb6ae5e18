//! Marketplace loan offered for investment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Rating;
use crate::error::{CoreError, CoreResult};

/// A loan offered on the marketplace.
///
/// Loans are immutable for the duration of a recommendation cycle. Two loans
/// are equal when every field is equal.
///
/// # Example
///
/// ```rust
/// use lendline_core::types::{Loan, Rating};
/// use rust_decimal_macros::dec;
///
/// let loan = Loan::new(42, Rating::new("A").unwrap(), 36, dec!(100000), dec!(25000));
/// assert_eq!(loan.term_in_months(), 36);
/// assert!(loan.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Loan {
    id: u64,
    rating: Rating,
    term_in_months: u32,
    /// Total amount the borrower asked for.
    amount: Decimal,
    /// Amount still open for investment.
    remaining_investment: Decimal,
}

impl Loan {
    /// Creates a new loan.
    #[must_use]
    pub fn new(
        id: u64,
        rating: Rating,
        term_in_months: u32,
        amount: Decimal,
        remaining_investment: Decimal,
    ) -> Self {
        Self {
            id,
            rating,
            term_in_months,
            amount,
            remaining_investment,
        }
    }

    /// Validates that the loan amounts are non-negative.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAmount` naming the first negative field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.amount < Decimal::ZERO {
            return Err(CoreError::negative_amount("amount", self.amount));
        }
        if self.remaining_investment < Decimal::ZERO {
            return Err(CoreError::negative_amount(
                "remaining_investment",
                self.remaining_investment,
            ));
        }
        Ok(())
    }

    /// Returns the marketplace identifier.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the loan's rating.
    #[must_use]
    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    /// Returns the loan term in months.
    #[must_use]
    pub fn term_in_months(&self) -> u32 {
        self.term_in_months
    }

    /// Returns the total amount asked for.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount still open for investment.
    #[must_use]
    pub fn remaining_investment(&self) -> Decimal {
        self.remaining_investment
    }
}
