//! Investment strategy facade.
//!
//! [`InvestmentStrategy`] is the seam an executor programs against: it asks
//! for the loans to pursue and, per loan, for the amount to commit.
//! [`SimpleStrategy`] implements it over a [`Policy`].

use lendline_core::types::{Loan, PortfolioOverview};
use rust_decimal::Decimal;
use std::path::Path;

use crate::amount::recommend_amount;
use crate::selection::select_matching_loans;
use crate::types::StrategyConfig;
use crate::{Policy, StrategyResult};

/// A loan paired with the amount recommended for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation<'a> {
    /// The loan to invest into.
    pub loan: &'a Loan,
    /// The recommended amount, always positive.
    pub amount: Decimal,
}

/// Decides which loans to invest into and how much.
///
/// Implementations are pure: the same inputs always give the same outputs
/// and nothing is retained between calls.
pub trait InvestmentStrategy: Send + Sync {
    /// Returns the loans worth pursuing, in priority order.
    fn matching_loans<'a>(&self, loans: &'a [Loan], portfolio: &PortfolioOverview)
        -> Vec<&'a Loan>;

    /// Returns the amount to invest into `loan`, or zero.
    fn recommend_amount(&self, loan: &Loan, portfolio: &PortfolioOverview) -> Decimal;

    /// Pairs every matching loan with its non-zero recommended amount.
    ///
    /// Each amount is computed against the same snapshot; amounts are not
    /// deducted from the balance between loans.
    fn recommendations<'a>(
        &self,
        loans: &'a [Loan],
        portfolio: &PortfolioOverview,
    ) -> Vec<Recommendation<'a>> {
        self.matching_loans(loans, portfolio)
            .into_iter()
            .filter_map(|loan| {
                let amount = self.recommend_amount(loan, portfolio);
                (amount > Decimal::ZERO).then_some(Recommendation { loan, amount })
            })
            .collect()
    }
}

/// Strategy driven entirely by a per-rating [`Policy`].
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    policy: Policy,
}

impl SimpleStrategy {
    /// Creates a strategy over a policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Creates a strategy from a parsed configuration.
    pub fn from_config(config: StrategyConfig) -> StrategyResult<Self> {
        Ok(Self::new(config.into_policy()?))
    }

    /// Creates a strategy from a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> StrategyResult<Self> {
        Self::from_config(StrategyConfig::from_file(path)?)
    }

    /// Returns the underlying policy.
    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl InvestmentStrategy for SimpleStrategy {
    fn matching_loans<'a>(
        &self,
        loans: &'a [Loan],
        portfolio: &PortfolioOverview,
    ) -> Vec<&'a Loan> {
        select_matching_loans(loans, portfolio, &self.policy)
    }

    fn recommend_amount(&self, loan: &Loan, portfolio: &PortfolioOverview) -> Decimal {
        recommend_amount(loan, portfolio, &self.policy)
    }
}
