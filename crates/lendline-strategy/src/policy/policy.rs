//! Policy struct and core methods.

use lendline_core::types::{Rating, RatingScale};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::types::RatingPolicy;

/// Smallest step in which investments can be made.
pub const MINIMAL_INVESTMENT_INCREMENT: u32 = 200;

/// An immutable investment policy.
///
/// Holds the global admission limits, the investment increment and one
/// [`RatingPolicy`] for every rating on the scale. A `Policy` can only be
/// obtained through [`PolicyBuilder::build`](super::PolicyBuilder::build),
/// which guarantees it is total over its scale.
#[derive(Debug, Clone)]
pub struct Policy {
    pub(super) scale: RatingScale,
    pub(super) minimum_balance: Decimal,
    pub(super) investment_ceiling: Decimal,
    pub(super) investment_increment: Decimal,
    pub(super) rating_policies: HashMap<Rating, RatingPolicy>,
}

impl Policy {
    /// Creates a new policy builder over the given scale.
    #[must_use]
    pub fn builder(scale: RatingScale) -> super::PolicyBuilder {
        super::PolicyBuilder::new(scale)
    }

    /// Returns the rating scale the policy covers.
    #[must_use]
    pub fn scale(&self) -> &RatingScale {
        &self.scale
    }

    /// Returns the balance below which nothing is recommended.
    #[must_use]
    pub fn minimum_balance(&self) -> Decimal {
        self.minimum_balance
    }

    /// Returns the total investment above which nothing is recommended.
    #[must_use]
    pub fn investment_ceiling(&self) -> Decimal {
        self.investment_ceiling
    }

    /// Returns the step to which recommended amounts are rounded down.
    #[must_use]
    pub fn investment_increment(&self) -> Decimal {
        self.investment_increment
    }

    /// Returns the policy for a rating, or `None` if the rating is not on the scale.
    #[must_use]
    pub fn rating_policy(&self, rating: &Rating) -> Option<&RatingPolicy> {
        self.rating_policies.get(rating)
    }

    /// Iterates the rating policies in scale order.
    pub fn rating_policies(&self) -> impl Iterator<Item = (&Rating, &RatingPolicy)> + '_ {
        self.scale
            .iter()
            .filter_map(|rating| self.rating_policies.get(rating).map(|p| (rating, p)))
    }
}
