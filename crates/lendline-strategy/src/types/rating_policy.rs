//! Per-rating investment policy.
//!
//! A [`RatingPolicy`] holds the share targets for one rating plus two
//! injected capabilities: an acceptability predicate and an investment range
//! recommender. Both are plain shared closures so callers (and tests) can
//! substitute any behaviour per rating.

use lendline_core::types::Loan;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::RatingRule;

/// Predicate deciding whether a loan is acceptable under a rating policy.
pub type AcceptanceFn = Arc<dyn Fn(&Loan) -> bool + Send + Sync>;

/// Capability recommending an investment range for a loan, if it matches.
pub type RangeFn = Arc<dyn Fn(&Loan) -> Option<InvestmentRange> + Send + Sync>;

/// Inclusive investment bounds recommended for a single loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentRange {
    /// Smallest amount worth investing.
    pub minimum: Decimal,
    /// Largest amount to invest.
    pub maximum: Decimal,
}

impl InvestmentRange {
    /// Creates a new range.
    #[must_use]
    pub fn new(minimum: Decimal, maximum: Decimal) -> Self {
        Self { minimum, maximum }
    }
}

/// Investment policy for a single rating.
///
/// # Examples
///
/// ```
/// use lendline_core::types::{Loan, Rating};
/// use lendline_strategy::types::{InvestmentRange, RatingPolicy};
/// use rust_decimal_macros::dec;
///
/// let policy = RatingPolicy::new(dec!(0.2), dec!(0.3))
///     .with_prefer_longer_terms(true)
///     .with_acceptance(|loan: &Loan| loan.term_in_months() <= 60)
///     .with_range(|_: &Loan| Some(InvestmentRange::new(dec!(200), dec!(1000))));
///
/// let loan = Loan::new(1, Rating::new("A").unwrap(), 36, dec!(50000), dec!(50000));
/// assert!(policy.is_acceptable(&loan));
/// assert_eq!(policy.recommend_range(&loan), Some(InvestmentRange::new(dec!(200), dec!(1000))));
/// ```
#[derive(Clone)]
pub struct RatingPolicy {
    target_share: Decimal,
    maximum_share: Decimal,
    prefer_longer_terms: bool,
    acceptance: AcceptanceFn,
    range: RangeFn,
}

impl RatingPolicy {
    /// Creates a policy with the given shares.
    ///
    /// Until capabilities are injected the policy accepts every loan but
    /// recommends no investment range, so no amount is ever committed.
    #[must_use]
    pub fn new(target_share: Decimal, maximum_share: Decimal) -> Self {
        Self {
            target_share,
            maximum_share,
            prefer_longer_terms: false,
            acceptance: Arc::new(|_: &Loan| true),
            range: Arc::new(|_: &Loan| None),
        }
    }

    /// Creates a policy whose capabilities are backed by a [`RatingRule`].
    #[must_use]
    pub fn from_rule(target_share: Decimal, maximum_share: Decimal, rule: RatingRule) -> Self {
        let rule = Arc::new(rule);
        let for_range = Arc::clone(&rule);
        Self::new(target_share, maximum_share)
            .with_acceptance(move |loan: &Loan| rule.is_acceptable(loan))
            .with_range(move |loan: &Loan| for_range.recommend_range(loan))
    }

    /// Sets whether longer loans are preferred over shorter ones.
    #[must_use]
    pub fn with_prefer_longer_terms(mut self, prefer: bool) -> Self {
        self.prefer_longer_terms = prefer;
        self
    }

    /// Injects the acceptability predicate.
    #[must_use]
    pub fn with_acceptance<F>(mut self, acceptance: F) -> Self
    where
        F: Fn(&Loan) -> bool + Send + Sync + 'static,
    {
        self.acceptance = Arc::new(acceptance);
        self
    }

    /// Injects the investment range recommender.
    #[must_use]
    pub fn with_range<F>(mut self, range: F) -> Self
    where
        F: Fn(&Loan) -> Option<InvestmentRange> + Send + Sync + 'static,
    {
        self.range = Arc::new(range);
        self
    }

    /// Returns the desired share of the portfolio for this rating.
    #[must_use]
    pub fn target_share(&self) -> Decimal {
        self.target_share
    }

    /// Returns the share ceiling for this rating.
    #[must_use]
    pub fn maximum_share(&self) -> Decimal {
        self.maximum_share
    }

    /// Returns true if longer terms are preferred.
    #[must_use]
    pub fn prefers_longer_terms(&self) -> bool {
        self.prefer_longer_terms
    }

    /// Returns true if the loan satisfies this rating's rule.
    #[must_use]
    pub fn is_acceptable(&self, loan: &Loan) -> bool {
        (self.acceptance)(loan)
    }

    /// Returns the recommended investment range, or `None` if the loan does
    /// not match this rating's rule.
    #[must_use]
    pub fn recommend_range(&self, loan: &Loan) -> Option<InvestmentRange> {
        (self.range)(loan)
    }
}

impl fmt::Debug for RatingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingPolicy")
            .field("target_share", &self.target_share)
            .field("maximum_share", &self.maximum_share)
            .field("prefer_longer_terms", &self.prefer_longer_terms)
            .finish_non_exhaustive()
    }
}
