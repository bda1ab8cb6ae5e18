//! Portfolio composition snapshot.
//!
//! A [`PortfolioOverview`] is captured once per recommendation cycle and
//! treated as immutable. It carries the available balance, the total amount
//! invested and the share of that investment held in each rating.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Rating;
use crate::error::{CoreError, CoreResult};

/// Insertion-ordered mapping from rating to share of total investment.
///
/// Iteration order is the order in which ratings were first inserted.
/// Re-inserting a rating replaces its share but keeps its position.
/// Shares need not sum to one.
///
/// Serialized as a list of `[rating, share]` pairs. Deserializing goes
/// through [`RatingShares::insert`], so a repeated rating keeps its first
/// position and its last share.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(Rating, Decimal)>", into = "Vec<(Rating, Decimal)>")]
pub struct RatingShares {
    entries: Vec<(Rating, Decimal)>,
}

impl RatingShares {
    /// Creates an empty share map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the share for a rating, returning the previous share if any.
    pub fn insert(&mut self, rating: Rating, share: Decimal) -> Option<Decimal> {
        match self.entries.iter_mut().find(|(r, _)| *r == rating) {
            Some((_, existing)) => Some(std::mem::replace(existing, share)),
            None => {
                self.entries.push((rating, share));
                None
            }
        }
    }

    /// Sets the share for a rating.
    #[must_use]
    pub fn with_share(mut self, rating: Rating, share: Decimal) -> Self {
        self.insert(rating, share);
        self
    }

    /// Returns the share recorded for a rating, if any.
    #[must_use]
    pub fn get(&self, rating: &Rating) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(r, _)| r == rating)
            .map(|(_, share)| *share)
    }

    /// Returns the share for a rating, or zero when absent.
    #[must_use]
    pub fn share(&self, rating: &Rating) -> Decimal {
        self.get(rating).unwrap_or(Decimal::ZERO)
    }

    /// Iterates `(rating, share)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Rating, Decimal)> + '_ {
        self.entries.iter().map(|(r, share)| (r, *share))
    }

    /// Returns the number of ratings recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no ratings are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Rating, Decimal)> for RatingShares {
    fn from_iter<T: IntoIterator<Item = (Rating, Decimal)>>(iter: T) -> Self {
        let mut shares = Self::new();
        for (rating, share) in iter {
            shares.insert(rating, share);
        }
        shares
    }
}

impl From<Vec<(Rating, Decimal)>> for RatingShares {
    fn from(entries: Vec<(Rating, Decimal)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<RatingShares> for Vec<(Rating, Decimal)> {
    fn from(shares: RatingShares) -> Self {
        shares.entries
    }
}

/// Snapshot of the investor's portfolio.
///
/// # Example
///
/// ```rust
/// use lendline_core::types::{PortfolioOverview, Rating};
/// use rust_decimal_macros::dec;
///
/// let a = Rating::new("A").unwrap();
/// let b = Rating::new("B").unwrap();
///
/// let portfolio = PortfolioOverview::from_investments(
///     dec!(5000),
///     [(a.clone(), dec!(3000)), (b.clone(), dec!(1000))],
/// )
/// .unwrap();
///
/// assert_eq!(portfolio.total_invested(), dec!(4000));
/// assert_eq!(portfolio.shares().share(&a), dec!(0.75));
/// assert_eq!(portfolio.shares().share(&b), dec!(0.25));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    available_balance: Decimal,
    total_invested: Decimal,
    shares: RatingShares,
}

impl PortfolioOverview {
    /// Creates a snapshot from precomputed shares.
    #[must_use]
    pub fn new(available_balance: Decimal, total_invested: Decimal, shares: RatingShares) -> Self {
        Self {
            available_balance,
            total_invested,
            shares,
        }
    }

    /// Creates a snapshot from the amount invested in each rating.
    ///
    /// The total invested is the sum of all amounts. Each rating's share is
    /// its amount divided by that total; when nothing is invested every
    /// listed rating has a share of zero.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAmount` if any invested amount is negative.
    pub fn from_investments<I>(available_balance: Decimal, invested_by_rating: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Rating, Decimal)>,
    {
        let mut invested = RatingShares::new();
        for (rating, amount) in invested_by_rating {
            if amount < Decimal::ZERO {
                return Err(CoreError::negative_amount(
                    format!("invested amount for rating {rating}"),
                    amount,
                ));
            }
            let previous = invested.share(&rating);
            invested.insert(rating, previous + amount);
        }

        let total: Decimal = invested.iter().map(|(_, amount)| amount).sum();
        let shares = invested
            .iter()
            .map(|(rating, amount)| {
                let share = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    amount / total
                };
                (rating.clone(), share)
            })
            .collect();

        Ok(Self::new(available_balance, total, shares))
    }

    /// Returns the balance available for new investments.
    #[must_use]
    pub fn available_balance(&self) -> Decimal {
        self.available_balance
    }

    /// Returns the total amount currently invested.
    #[must_use]
    pub fn total_invested(&self) -> Decimal {
        self.total_invested
    }

    /// Returns the per-rating shares of total investment.
    #[must_use]
    pub fn shares(&self) -> &RatingShares {
        &self.shares
    }
}
