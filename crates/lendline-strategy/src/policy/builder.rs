//! Policy builder for fluent construction.

use lendline_core::types::{Rating, RatingScale};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::warn;

use super::policy::MINIMAL_INVESTMENT_INCREMENT;
use crate::types::RatingPolicy;
use crate::{Policy, StrategyError, StrategyResult};

/// Builder for constructing a [`Policy`].
///
/// # Example
///
/// ```rust
/// use lendline_core::types::RatingScale;
/// use lendline_strategy::policy::Policy;
/// use lendline_strategy::types::RatingPolicy;
/// use rust_decimal_macros::dec;
///
/// let scale = RatingScale::new(["A", "B"]).unwrap();
/// let policy = Policy::builder(scale.clone())
///     .minimum_balance(dec!(200))
///     .investment_ceiling(dec!(100000))
///     .rating_policy(scale.parse("A").unwrap(), RatingPolicy::new(dec!(0.6), dec!(0.8)))
///     .rating_policy(scale.parse("B").unwrap(), RatingPolicy::new(dec!(0.4), dec!(0.5)))
///     .build()
///     .unwrap();
///
/// assert_eq!(policy.investment_increment(), dec!(200));
/// ```
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    scale: RatingScale,
    minimum_balance: Decimal,
    investment_ceiling: Decimal,
    investment_increment: Decimal,
    rating_policies: Vec<(Rating, RatingPolicy)>,
}

impl PolicyBuilder {
    /// Creates a new builder with no limits and the standard increment.
    #[must_use]
    pub fn new(scale: RatingScale) -> Self {
        Self {
            scale,
            minimum_balance: Decimal::ZERO,
            investment_ceiling: Decimal::MAX,
            investment_increment: Decimal::from(MINIMAL_INVESTMENT_INCREMENT),
            rating_policies: Vec::new(),
        }
    }

    /// Sets the balance below which nothing is recommended.
    #[must_use]
    pub fn minimum_balance(mut self, amount: Decimal) -> Self {
        self.minimum_balance = amount;
        self
    }

    /// Sets the total investment above which nothing is recommended.
    #[must_use]
    pub fn investment_ceiling(mut self, amount: Decimal) -> Self {
        self.investment_ceiling = amount;
        self
    }

    /// Sets the step to which recommended amounts are rounded down.
    #[must_use]
    pub fn investment_increment(mut self, increment: Decimal) -> Self {
        self.investment_increment = increment;
        self
    }

    /// Sets the policy for a rating, replacing any earlier one.
    #[must_use]
    pub fn rating_policy(mut self, rating: Rating, policy: RatingPolicy) -> Self {
        self.rating_policies.retain(|(r, _)| *r != rating);
        self.rating_policies.push((rating, policy));
        self
    }

    /// Sets several rating policies at once.
    #[must_use]
    pub fn rating_policies(
        mut self,
        policies: impl IntoIterator<Item = (Rating, RatingPolicy)>,
    ) -> Self {
        for (rating, policy) in policies {
            self = self.rating_policy(rating, policy);
        }
        self
    }

    /// Builds the policy.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the increment is not positive
    /// - a policy is keyed by a rating that is not on the scale
    /// - any rating on the scale has no policy (the first one in scale order is reported)
    pub fn build(self) -> StrategyResult<Policy> {
        if self.investment_increment <= Decimal::ZERO {
            return Err(StrategyError::InvalidIncrement {
                value: self.investment_increment,
            });
        }

        if let Some((rating, _)) = self
            .rating_policies
            .iter()
            .find(|(rating, _)| !self.scale.contains(rating))
        {
            return Err(StrategyError::unknown_rating(rating.code()));
        }

        let rating_policies: HashMap<Rating, RatingPolicy> =
            self.rating_policies.into_iter().collect();

        if let Some(missing) = self
            .scale
            .iter()
            .find(|rating| !rating_policies.contains_key(*rating))
        {
            return Err(StrategyError::missing_rating_policy(missing.code()));
        }

        for (rating, policy) in &rating_policies {
            if policy.target_share() > policy.maximum_share() {
                warn!(
                    rating = %rating,
                    target_share = %policy.target_share(),
                    maximum_share = %policy.maximum_share(),
                    "Target share exceeds maximum share"
                );
            }
        }

        Ok(Policy {
            scale: self.scale,
            minimum_balance: self.minimum_balance,
            investment_ceiling: self.investment_ceiling,
            investment_increment: self.investment_increment,
            rating_policies,
        })
    }
}
