//! Rule-based acceptance and sizing for a single rating.

use lendline_core::types::Loan;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InvestmentRange;

/// Term, ask and sizing limits applied to loans of one rating.
///
/// A loan is acceptable when its term and its total ask fall inside every
/// configured (inclusive) bound. Acceptable loans get an investment range of
/// `minimum_investment` up to the smaller of `maximum_investment` and
/// `maximum_loan_share` of the loan's total ask.
///
/// # Examples
///
/// ```
/// use lendline_core::types::{Loan, Rating};
/// use lendline_strategy::types::{InvestmentRange, RatingRule};
/// use rust_decimal_macros::dec;
///
/// let rule = RatingRule::new(dec!(200), dec!(5000))
///     .with_term_range(Some(12), Some(60))
///     .with_maximum_loan_share(dec!(0.01));
///
/// let loan = Loan::new(1, Rating::new("B").unwrap(), 36, dec!(200000), dec!(150000));
/// assert!(rule.is_acceptable(&loan));
/// assert_eq!(rule.recommend_range(&loan), Some(InvestmentRange::new(dec!(200), dec!(2000))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRule {
    /// Shortest acceptable term in months.
    pub minimum_term: Option<u32>,
    /// Longest acceptable term in months.
    pub maximum_term: Option<u32>,
    /// Smallest acceptable total ask.
    pub minimum_ask: Option<Decimal>,
    /// Largest acceptable total ask.
    pub maximum_ask: Option<Decimal>,
    /// Smallest amount worth investing into one loan.
    pub minimum_investment: Decimal,
    /// Largest amount to invest into one loan.
    pub maximum_investment: Decimal,
    /// Largest fraction of the loan's total ask to invest.
    pub maximum_loan_share: Decimal,
}

impl RatingRule {
    /// Creates an unbounded rule with the given per-loan investment limits.
    #[must_use]
    pub fn new(minimum_investment: Decimal, maximum_investment: Decimal) -> Self {
        Self {
            minimum_term: None,
            maximum_term: None,
            minimum_ask: None,
            maximum_ask: None,
            minimum_investment,
            maximum_investment,
            maximum_loan_share: Decimal::ONE,
        }
    }

    /// Sets the inclusive term bounds.
    #[must_use]
    pub fn with_term_range(mut self, minimum: Option<u32>, maximum: Option<u32>) -> Self {
        self.minimum_term = minimum;
        self.maximum_term = maximum;
        self
    }

    /// Sets the inclusive total ask bounds.
    #[must_use]
    pub fn with_ask_range(mut self, minimum: Option<Decimal>, maximum: Option<Decimal>) -> Self {
        self.minimum_ask = minimum;
        self.maximum_ask = maximum;
        self
    }

    /// Sets the largest fraction of a loan's ask to invest.
    #[must_use]
    pub fn with_maximum_loan_share(mut self, share: Decimal) -> Self {
        self.maximum_loan_share = share;
        self
    }

    /// Returns true if the loan's term and ask are within bounds.
    #[must_use]
    pub fn is_acceptable(&self, loan: &Loan) -> bool {
        let term = loan.term_in_months();
        let ask = loan.amount();
        self.minimum_term.map_or(true, |min| term >= min)
            && self.maximum_term.map_or(true, |max| term <= max)
            && self.minimum_ask.map_or(true, |min| ask >= min)
            && self.maximum_ask.map_or(true, |max| ask <= max)
    }

    /// Returns the investment range for an acceptable loan.
    ///
    /// `None` when the loan is not acceptable, or when the loan share cap
    /// pushes the upper bound below the minimum investment.
    #[must_use]
    pub fn recommend_range(&self, loan: &Loan) -> Option<InvestmentRange> {
        if !self.is_acceptable(loan) {
            return None;
        }
        let by_share = loan.amount() * self.maximum_loan_share;
        let maximum = self.maximum_investment.min(by_share);
        if maximum < self.minimum_investment {
            return None;
        }
        Some(InvestmentRange::new(self.minimum_investment, maximum))
    }
}
