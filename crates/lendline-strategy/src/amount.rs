//! Investment amount recommendation.
//!
//! Sizes a single investment from the rating policy's recommended range,
//! the available balance and the policy's investment increment.

use lendline_core::types::{Loan, PortfolioOverview};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::gate::is_admissible;
use crate::Policy;

/// Recommends how much to invest into a loan.
///
/// Returns zero when the admission gate is closed, the loan does not match
/// its rating's rule, or the range minimum exceeds either the available
/// balance or the loan's remaining investment. Otherwise the smaller of the
/// balance and the range maximum is rounded down to the policy increment;
/// if that falls below the range minimum the result is zero.
///
/// The result is always zero or a non-negative multiple of the increment.
///
/// # Example
///
/// ```rust
/// use lendline_core::types::{Loan, PortfolioOverview, RatingScale, RatingShares};
/// use lendline_strategy::amount::recommend_amount;
/// use lendline_strategy::policy::Policy;
/// use lendline_strategy::types::{InvestmentRange, RatingPolicy};
/// use rust_decimal_macros::dec;
///
/// let scale = RatingScale::new(["R"]).unwrap();
/// let r = scale.parse("R").unwrap();
/// let policy = Policy::builder(scale)
///     .minimum_balance(dec!(200))
///     .investment_ceiling(dec!(100000))
///     .investment_increment(dec!(200))
///     .rating_policy(
///         r.clone(),
///         RatingPolicy::new(dec!(0.2), dec!(0.3))
///             .with_range(|_: &Loan| Some(InvestmentRange::new(dec!(600), dec!(2500)))),
///     )
///     .build()
///     .unwrap();
///
/// let portfolio = PortfolioOverview::new(
///     dec!(5000),
///     dec!(10000),
///     RatingShares::new().with_share(r.clone(), dec!(0.1)),
/// );
/// let loan = Loan::new(1, r, 36, dec!(100000), dec!(3000));
///
/// assert_eq!(recommend_amount(&loan, &portfolio, &policy), dec!(2400));
/// ```
#[must_use]
pub fn recommend_amount(loan: &Loan, portfolio: &PortfolioOverview, policy: &Policy) -> Decimal {
    if !is_admissible(portfolio, policy) {
        return Decimal::ZERO;
    }

    let Some(rating_policy) = policy.rating_policy(loan.rating()) else {
        warn!(
            loan_id = loan.id(),
            rating = %loan.rating(),
            "Loan rating is outside the policy scale"
        );
        return Decimal::ZERO;
    };

    let Some(range) = rating_policy.recommend_range(loan) else {
        debug!(loan_id = loan.id(), "Loan does not match the rating policy");
        return Decimal::ZERO;
    };
    debug!(
        loan_id = loan.id(),
        minimum = %range.minimum,
        maximum = %range.maximum,
        "Recommended investment range"
    );

    let balance = portfolio.available_balance();
    if range.minimum > balance || range.minimum > loan.remaining_investment() {
        return Decimal::ZERO;
    }

    let candidate = balance.min(range.maximum);
    let rounded = round_down_to_increment(candidate, policy.investment_increment());
    if rounded < range.minimum {
        return Decimal::ZERO;
    }
    debug!(loan_id = loan.id(), amount = %rounded, "Recommended investment amount");
    rounded
}

/// Rounds `amount` down to the nearest multiple of `increment`.
///
/// Non-positive amounts round to zero, and so does everything when
/// `increment` is not positive.
#[must_use]
pub fn round_down_to_increment(amount: Decimal, increment: Decimal) -> Decimal {
    if amount <= Decimal::ZERO || increment <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount - amount % increment
}
