//! Portfolio admission gate.
//!
//! A closed gate suppresses every recommendation for the cycle. It is an
//! expected operating state, not an error.

use lendline_core::types::PortfolioOverview;
use tracing::debug;

use crate::Policy;

/// Returns true if the portfolio may receive new investments.
///
/// The gate is closed when the available balance is below the policy's
/// minimum balance, or when the total invested exceeds the investment
/// ceiling. Both bounds are inclusive on the admissible side.
#[must_use]
pub fn is_admissible(portfolio: &PortfolioOverview, policy: &Policy) -> bool {
    let balance = portfolio.available_balance();
    if balance < policy.minimum_balance() {
        debug!(
            balance = %balance,
            minimum_balance = %policy.minimum_balance(),
            "Balance is less than minimum, not recommending any loans"
        );
        return false;
    }
    let invested = portfolio.total_invested();
    if invested > policy.investment_ceiling() {
        debug!(
            invested = %invested,
            investment_ceiling = %policy.investment_ceiling(),
            "Total investment exceeds ceiling, not recommending any loans"
        );
        return false;
    }
    true
}
