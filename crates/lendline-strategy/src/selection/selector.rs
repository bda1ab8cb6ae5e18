//! Loan selection.
//!
//! Combines the admission gate, the demand ranking and the rating partition
//! into the final ordered list of loans worth pursuing.

use lendline_core::types::{Loan, PortfolioOverview, Rating};
use std::cmp::Reverse;
use tracing::{debug, info};

use super::{partition_by_rating, rank_by_demand};
use crate::gate::is_admissible;
use crate::Policy;

/// Selects the loans to pursue, in priority order.
///
/// Returns nothing when the admission gate is closed. Otherwise ratings are
/// visited in demand order; each rating's loans are sorted by term
/// (ascending, or descending when the rating prefers longer terms, ties in
/// offer order), filtered by the rating's acceptability predicate and
/// appended. Loans of ratings that are not in demand are left out.
///
/// The result order is the priority for allocating scarce balance.
#[must_use]
pub fn select_matching_loans<'a>(
    loans: &'a [Loan],
    portfolio: &PortfolioOverview,
    policy: &Policy,
) -> Vec<&'a Loan> {
    if !is_admissible(portfolio, policy) {
        return Vec::new();
    }

    let wanted = rank_by_demand(portfolio.shares(), policy);
    let codes: Vec<&str> = wanted.iter().map(Rating::code).collect();
    info!(ratings = ?codes, "Portfolio is low on ratings, most under-invested first");

    let mut by_rating = partition_by_rating(loans);
    let mut selected = Vec::with_capacity(loans.len());
    for rating in &wanted {
        let Some(mut candidates) = by_rating.remove(rating) else {
            continue;
        };
        let Some(rating_policy) = policy.rating_policy(rating) else {
            continue;
        };

        if rating_policy.prefers_longer_terms() {
            candidates.sort_by_key(|loan| Reverse(loan.term_in_months()));
        } else {
            candidates.sort_by_key(|loan| loan.term_in_months());
        }

        let offered = candidates.len();
        candidates.retain(|loan| rating_policy.is_acceptable(loan));
        debug!(
            rating = %rating,
            offered,
            accepted = candidates.len(),
            "Filtered loans by rating policy"
        );

        selected.extend(candidates);
    }
    selected
}
