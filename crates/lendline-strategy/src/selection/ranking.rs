//! Demand ranking of ratings.
//!
//! Orders ratings by how badly the portfolio needs more of them. The ranking
//! is built in two tiers from the gap ("undershare") between a configured
//! share and the current share:
//!
//! 1. Ratings below their target share, largest gap first.
//! 2. Ratings below their maximum share, smallest gap first.
//!
//! The second tier is the descending under-maximum ranking reversed, so
//! ratings closest to their maximum come before ratings with more headroom.
//! Ratings already in the first tier keep their first position. Ratings at
//! or above their maximum share are never ranked.

use lendline_core::types::{Rating, RatingShares};
use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

use crate::types::RatingPolicy;
use crate::Policy;

/// Ranks ratings by demand, most wanted first.
///
/// Only ratings present in `shares` are considered. Ties on the exact
/// undershare keep the order in which ratings appear in `shares`. Share
/// entries for ratings outside the policy's scale are ignored.
///
/// # Example
///
/// ```rust
/// use lendline_core::types::{RatingScale, RatingShares};
/// use lendline_strategy::policy::Policy;
/// use lendline_strategy::selection::rank_by_demand;
/// use lendline_strategy::types::RatingPolicy;
/// use rust_decimal_macros::dec;
///
/// let scale = RatingScale::new(["A", "B", "C"]).unwrap();
/// let [a, b, c] = [0, 1, 2].map(|i| scale.as_slice()[i].clone());
/// let policy = Policy::builder(scale)
///     .rating_policy(a.clone(), RatingPolicy::new(dec!(0.3), dec!(0.5)))
///     .rating_policy(b.clone(), RatingPolicy::new(dec!(0.2), dec!(0.3)))
///     .rating_policy(c.clone(), RatingPolicy::new(dec!(0.1), dec!(0.2)))
///     .build()
///     .unwrap();
///
/// let shares = RatingShares::new()
///     .with_share(a.clone(), dec!(0.1))   // under target
///     .with_share(b.clone(), dec!(0.25))  // under maximum only
///     .with_share(c.clone(), dec!(0.2));  // at maximum
///
/// assert_eq!(rank_by_demand(&shares, &policy), vec![a, b]);
/// ```
#[must_use]
pub fn rank_by_demand(shares: &RatingShares, policy: &Policy) -> Vec<Rating> {
    for (rating, _) in shares.iter() {
        if policy.rating_policy(rating).is_none() {
            warn!(rating = %rating, "Ignoring share of rating outside the policy scale");
        }
    }

    let under_target = rank_by_undershare(shares, policy, RatingPolicy::target_share);
    let mut under_maximum = rank_by_undershare(shares, policy, RatingPolicy::maximum_share);
    under_maximum.reverse();

    first_occurrences(under_target.into_iter().chain(under_maximum))
}

/// Ranks ratings whose current share is below `metric`, largest gap first.
///
/// Ratings are bucketed by their exact undershare; buckets are visited in
/// decreasing order and each bucket keeps the scan order of `shares`.
fn rank_by_undershare<F>(shares: &RatingShares, policy: &Policy, metric: F) -> Vec<Rating>
where
    F: Fn(&RatingPolicy) -> Decimal,
{
    let mut buckets: BTreeMap<Reverse<Decimal>, Vec<Rating>> = BTreeMap::new();
    for (rating, current) in shares.iter() {
        let Some(rating_policy) = policy.rating_policy(rating) else {
            continue;
        };
        let undershare = metric(rating_policy) - current;
        if undershare <= Decimal::ZERO {
            continue;
        }
        buckets
            .entry(Reverse(undershare))
            .or_default()
            .push(rating.clone());
    }
    buckets.into_values().flatten().collect()
}

/// Drops repeated ratings, keeping the first occurrence.
fn first_occurrences(ratings: impl Iterator<Item = Rating>) -> Vec<Rating> {
    let mut seen = HashSet::new();
    ratings.filter(|r| seen.insert(r.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendline_core::types::RatingScale;
    use rust_decimal_macros::dec;

    fn r(code: &str) -> Rating {
        Rating::new(code).unwrap()
    }

    /// Builds a policy over `A..E` from `(target, maximum)` pairs.
    fn policy(limits: [(Decimal, Decimal); 5]) -> Policy {
        let scale = RatingScale::new(["A", "B", "C", "D", "E"]).unwrap();
        let policies: Vec<_> = scale
            .iter()
            .zip(limits)
            .map(|(rating, (target, max))| (rating.clone(), RatingPolicy::new(target, max)))
            .collect();
        Policy::builder(scale).rating_policies(policies).build().unwrap()
    }

    fn uniform_policy() -> Policy {
        policy([(dec!(0.2), dec!(0.3)); 5])
    }

    #[test]
    fn test_empty_shares_rank_nothing() {
        assert!(rank_by_demand(&RatingShares::new(), &uniform_policy()).is_empty());
    }

    #[test]
    fn test_under_target_largest_gap_first() {
        let shares = RatingShares::new()
            .with_share(r("A"), dec!(0.15))
            .with_share(r("B"), dec!(0.0))
            .with_share(r("C"), dec!(0.1));

        let ranked = rank_by_demand(&shares, &uniform_policy());
        assert_eq!(ranked, vec![r("B"), r("C"), r("A")]);
    }

    #[test]
    fn test_under_maximum_tier_is_reversed() {
        // All between target 0.2 and maximum 0.3.
        let shares = RatingShares::new()
            .with_share(r("A"), dec!(0.21))
            .with_share(r("B"), dec!(0.29))
            .with_share(r("C"), dec!(0.25));

        // Descending room: A (0.09), C (0.05), B (0.01); reversed.
        let ranked = rank_by_demand(&shares, &uniform_policy());
        assert_eq!(ranked, vec![r("B"), r("C"), r("A")]);
    }

    #[test]
    fn test_target_tier_precedes_maximum_tier() {
        let shares = RatingShares::new()
            .with_share(r("A"), dec!(0.25))
            .with_share(r("B"), dec!(0.05))
            .with_share(r("C"), dec!(0.1));

        // Tier A: B (0.15), C (0.1). Tier B descending: B (0.25), C (0.2), A (0.05);
        // reversed: A, C, B. Dedup keeps B, C from tier A.
        let ranked = rank_by_demand(&shares, &uniform_policy());
        assert_eq!(ranked, vec![r("B"), r("C"), r("A")]);
    }

    #[test]
    fn test_at_or_over_maximum_excluded() {
        let shares = RatingShares::new()
            .with_share(r("A"), dec!(0.3))
            .with_share(r("B"), dec!(0.45))
            .with_share(r("C"), dec!(0.29));

        let ranked = rank_by_demand(&shares, &uniform_policy());
        assert_eq!(ranked, vec![r("C")]);
    }

    #[test]
    fn test_ties_keep_scan_order() {
        let shares = RatingShares::new()
            .with_share(r("D"), dec!(0.1))
            .with_share(r("A"), dec!(0.1))
            .with_share(r("C"), dec!(0.1));

        let ranked = rank_by_demand(&shares, &uniform_policy());
        assert_eq!(ranked, vec![r("D"), r("A"), r("C")]);
    }

    #[test]
    fn test_ties_compare_exact_values() {
        // 0.10 and 0.1 are the same undershare.
        let shares = RatingShares::new()
            .with_share(r("B"), dec!(0.10))
            .with_share(r("A"), dec!(0.1));

        let ranked = rank_by_demand(&shares, &uniform_policy());
        assert_eq!(ranked, vec![r("B"), r("A")]);
    }

    #[test]
    fn test_reversal_flips_ties_in_maximum_tier() {
        // A and B tie in the maximum tier only; reversal flips their scan order.
        let shares = RatingShares::new()
            .with_share(r("A"), dec!(0.25))
            .with_share(r("B"), dec!(0.25));

        let ranked = rank_by_demand(&shares, &uniform_policy());
        assert_eq!(ranked, vec![r("B"), r("A")]);
    }

    #[test]
    fn test_per_rating_limits() {
        let policy = policy([
            (dec!(0.05), dec!(0.1)),
            (dec!(0.4), dec!(0.5)),
            (dec!(0.2), dec!(0.6)),
            (dec!(0.0), dec!(0.0)),
            (dec!(0.1), dec!(0.1)),
        ]);
        let shares = RatingShares::new()
            .with_share(r("A"), dec!(0.08))
            .with_share(r("B"), dec!(0.3))
            .with_share(r("C"), dec!(0.3))
            .with_share(r("D"), dec!(0.0))
            .with_share(r("E"), dec!(0.0));

        // Tier A: B (0.1), E (0.1). Tier B descending: C (0.3), B (0.2), E (0.1), A (0.02);
        // reversed: A, E, B, C.
        let ranked = rank_by_demand(&shares, &policy);
        assert_eq!(ranked, vec![r("B"), r("E"), r("A"), r("C")]);
    }

    #[test]
    fn test_unknown_rating_ignored() {
        let shares = RatingShares::new()
            .with_share(r("X"), dec!(0.0))
            .with_share(r("A"), dec!(0.1));

        assert_eq!(rank_by_demand(&shares, &uniform_policy()), vec![r("A")]);
    }

    #[test]
    fn test_loaded_snapshot_with_repeated_rating() {
        // The later A entry puts it over its maximum.
        let shares: RatingShares =
            serde_json::from_str(r#"[["A", 0.0], ["B", 0.1], ["A", 0.35]]"#).unwrap();

        assert_eq!(rank_by_demand(&shares, &uniform_policy()), vec![r("B")]);
    }

    #[test]
    fn test_ratings_absent_from_shares_not_ranked() {
        let shares = RatingShares::new().with_share(r("C"), dec!(0.0));
        assert_eq!(rank_by_demand(&shares, &uniform_policy()), vec![r("C")]);
    }
}
