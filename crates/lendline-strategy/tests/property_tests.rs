//! Property-based tests for selection invariants.
//!
//! These tests verify properties that should hold for any snapshot:
//! - Saturated ratings are never ranked
//! - The demand ranking has no duplicates
//! - Ratings under target are ordered by undershare
//! - Partitioning keeps every loan in its own rating bucket
//! - A closed gate selects nothing, whether by balance or by ceiling
//! - Amounts are zero or a multiple of the increment
//! - Selection and sizing are idempotent

use lendline_core::prelude::*;
use lendline_strategy::prelude::*;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use std::collections::HashSet;

const CODES: [&str; 6] = ["AAA", "AA", "A", "B", "C", "D"];

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// A share in [0, 1] with two decimal places.
fn arb_share() -> impl Strategy<Value = Decimal> {
    (0u32..=100).prop_map(|n| Decimal::new(i64::from(n), 2))
}

/// Target and maximum share per rating, in scale order, target never above maximum.
fn arb_bounds() -> impl Strategy<Value = Vec<(Decimal, Decimal)>> {
    prop::collection::vec(
        (arb_share(), arb_share()).prop_map(|(a, b)| (a.min(b), a.max(b))),
        CODES.len(),
    )
}

/// Current share per rating, in scale order.
fn arb_shares() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(arb_share(), CODES.len())
}

fn arb_loan() -> impl Strategy<Value = Loan> {
    (0u64..50, 0..CODES.len(), 1u32..=84, 1u32..=2000, 0u32..=2000).prop_map(
        |(id, rating, term, amount, remaining)| {
            Loan::new(
                id,
                Rating::new(CODES[rating]).unwrap(),
                term,
                Decimal::from(amount) * dec!(100),
                Decimal::from(remaining) * dec!(100),
            )
        },
    )
}

fn arb_loans() -> impl Strategy<Value = Vec<Loan>> {
    prop::collection::vec(arb_loan(), 0..40)
}

fn scale() -> RatingScale {
    RatingScale::new(CODES).unwrap()
}

fn build_policy(bounds: &[(Decimal, Decimal)], increment: Decimal) -> Policy {
    let scale = scale();
    let rule = RatingRule::new(dec!(200), dec!(5000))
        .with_term_range(Some(6), Some(72))
        .with_maximum_loan_share(dec!(0.05));
    let policies: Vec<(Rating, RatingPolicy)> = scale
        .iter()
        .zip(bounds)
        .enumerate()
        .map(|(i, (rating, &(target, maximum)))| {
            let policy = RatingPolicy::from_rule(target, maximum, rule.clone())
                .with_prefer_longer_terms(i % 2 == 0);
            (rating.clone(), policy)
        })
        .collect();

    Policy::builder(scale)
        .minimum_balance(dec!(200))
        .investment_ceiling(dec!(1000000))
        .investment_increment(increment)
        .rating_policies(policies)
        .build()
        .unwrap()
}

fn build_shares(shares: &[Decimal]) -> RatingShares {
    CODES
        .iter()
        .zip(shares)
        .map(|(code, &share)| (Rating::new(code).unwrap(), share))
        .collect()
}

fn arb_increment() -> impl Strategy<Value = Decimal> {
    prop_oneof![Just(dec!(200)), Just(dec!(25)), Just(dec!(0.01))]
}

// =============================================================================
// DEMAND RANKING
// =============================================================================

proptest! {
    /// A rating at or above its maximum share never appears in the ranking.
    #[test]
    fn saturated_ratings_never_ranked(bounds in arb_bounds(), current in arb_shares()) {
        let policy = build_policy(&bounds, dec!(200));
        let order = rank_by_demand(&build_shares(&current), &policy);

        for (i, code) in CODES.iter().enumerate() {
            if current[i] >= bounds[i].1 {
                prop_assert!(!order.contains(&Rating::new(code).unwrap()));
            }
        }
    }

    /// The ranking never contains the same rating twice.
    #[test]
    fn ranking_has_no_duplicates(bounds in arb_bounds(), current in arb_shares()) {
        let policy = build_policy(&bounds, dec!(200));
        let order = rank_by_demand(&build_shares(&current), &policy);

        let unique: HashSet<&Rating> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len());
    }

    /// Ratings under target lead the ranking, largest undershare first.
    #[test]
    fn under_target_ordered_by_undershare(bounds in arb_bounds(), current in arb_shares()) {
        let policy = build_policy(&bounds, dec!(200));
        let order = rank_by_demand(&build_shares(&current), &policy);

        let undershare = |rating: &Rating| {
            let i = CODES.iter().position(|c| *c == rating.code()).unwrap();
            bounds[i].0 - current[i]
        };
        let tier_a: Vec<&Rating> = order
            .iter()
            .take_while(|&rating| undershare(rating) > Decimal::ZERO)
            .collect();

        let expected = (0..CODES.len()).filter(|&i| bounds[i].0 > current[i]).count();
        prop_assert_eq!(tier_a.len(), expected);
        for pair in tier_a.windows(2) {
            prop_assert!(undershare(pair[0]) >= undershare(pair[1]));
        }
    }

    // =========================================================================
    // PARTITIONING
    // =========================================================================

    /// Every distinct loan lands in exactly its own rating's bucket.
    #[test]
    fn partition_is_complete_and_correct(loans in arb_loans()) {
        let grouped = partition_by_rating(&loans);

        for (rating, bucket) in &grouped {
            prop_assert!(bucket.iter().all(|loan| loan.rating() == rating));
        }
        let distinct: HashSet<&Loan> = loans.iter().collect();
        let total: usize = grouped.values().map(Vec::len).sum();
        prop_assert_eq!(total, distinct.len());
    }

    // =========================================================================
    // SELECTION AND SIZING
    // =========================================================================

    /// A balance under the minimum closes the gate for any loans.
    #[test]
    fn closed_gate_selects_nothing(
        bounds in arb_bounds(),
        current in arb_shares(),
        loans in arb_loans(),
        balance in 0u32..200,
    ) {
        let policy = build_policy(&bounds, dec!(200));
        let portfolio = PortfolioOverview::new(
            Decimal::from(balance),
            dec!(10000),
            build_shares(&current),
        );

        prop_assert!(select_matching_loans(&loans, &portfolio, &policy).is_empty());
        for loan in &loans {
            prop_assert_eq!(recommend_amount(loan, &portfolio, &policy), Decimal::ZERO);
        }
    }

    /// Investments above the ceiling close the gate even with ample balance.
    #[test]
    fn over_ceiling_selects_nothing(
        bounds in arb_bounds(),
        current in arb_shares(),
        loans in arb_loans(),
        balance in 200u32..20000,
        excess in 1u32..100000,
    ) {
        let policy = build_policy(&bounds, dec!(200));
        let portfolio = PortfolioOverview::new(
            Decimal::from(balance),
            policy.investment_ceiling() + Decimal::new(i64::from(excess), 2),
            build_shares(&current),
        );

        prop_assert!(select_matching_loans(&loans, &portfolio, &policy).is_empty());
        for loan in &loans {
            prop_assert_eq!(recommend_amount(loan, &portfolio, &policy), Decimal::ZERO);
        }
    }

    /// Amounts are zero or a positive multiple of the increment.
    #[test]
    fn amount_is_multiple_of_increment(
        bounds in arb_bounds(),
        current in arb_shares(),
        loans in arb_loans(),
        balance in 0u32..20000,
        increment in arb_increment(),
    ) {
        let policy = build_policy(&bounds, increment);
        let portfolio = PortfolioOverview::new(
            Decimal::from(balance),
            dec!(10000),
            build_shares(&current),
        );

        for loan in &loans {
            let amount = recommend_amount(loan, &portfolio, &policy);
            prop_assert!(amount >= Decimal::ZERO);
            prop_assert!(amount <= portfolio.available_balance());
            prop_assert_eq!(amount % increment, Decimal::ZERO);
        }
    }

    /// Selected loans come from ranked ratings and pass their rating's rule.
    #[test]
    fn selected_loans_are_ranked_and_acceptable(
        bounds in arb_bounds(),
        current in arb_shares(),
        loans in arb_loans(),
    ) {
        let policy = build_policy(&bounds, dec!(200));
        let portfolio = PortfolioOverview::new(dec!(5000), dec!(10000), build_shares(&current));

        let order = rank_by_demand(portfolio.shares(), &policy);
        let selected = select_matching_loans(&loans, &portfolio, &policy);

        let mut last_position = 0;
        for loan in selected {
            let position = order.iter().position(|r| r == loan.rating());
            prop_assert!(position.is_some());
            let position = position.unwrap();
            prop_assert!(position >= last_position);
            last_position = position;

            let rating_policy = policy.rating_policy(loan.rating()).unwrap();
            prop_assert!(rating_policy.is_acceptable(loan));
        }
    }

    /// Identical inputs give identical outputs.
    #[test]
    fn selection_and_sizing_are_idempotent(
        bounds in arb_bounds(),
        current in arb_shares(),
        loans in arb_loans(),
        balance in 0u32..20000,
    ) {
        let policy = build_policy(&bounds, dec!(200));
        let portfolio = PortfolioOverview::new(
            Decimal::from(balance),
            dec!(10000),
            build_shares(&current),
        );

        let first = select_matching_loans(&loans, &portfolio, &policy);
        let second = select_matching_loans(&loans, &portfolio, &policy);
        prop_assert_eq!(first, second);

        for loan in &loans {
            prop_assert_eq!(
                recommend_amount(loan, &portfolio, &policy),
                recommend_amount(loan, &portfolio, &policy)
            );
        }
    }
}
