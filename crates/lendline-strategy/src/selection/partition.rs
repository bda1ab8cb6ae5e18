//! Rating-based loan partitioning.
//!
//! Splits offered loans into per-rating buckets.

use lendline_core::types::{Loan, Rating};
use std::collections::{HashMap, HashSet};

/// Loans grouped by rating, each bucket in input order.
pub type LoansByRating<'a> = HashMap<Rating, Vec<&'a Loan>>;

/// Partitions loans by rating.
///
/// The input is iterated once. Within each bucket loans keep their relative
/// input order, and a loan equal to one already seen is dropped. Ratings with
/// no loans have no entry in the result.
///
/// # Arguments
///
/// * `loans` - Loans to partition, in offer order
///
/// # Returns
///
/// Mapping from rating to the loans of that rating.
#[must_use]
pub fn partition_by_rating<'a, I>(loans: I) -> LoansByRating<'a>
where
    I: IntoIterator<Item = &'a Loan>,
{
    let mut grouped: LoansByRating<'a> = HashMap::new();
    // Equal loans share a rating, so one set covers every bucket.
    let mut seen: HashSet<&'a Loan> = HashSet::new();
    for loan in loans {
        if !seen.insert(loan) {
            continue;
        }
        grouped.entry(loan.rating().clone()).or_default().push(loan);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn loan(id: u64, rating: &str, term: u32) -> Loan {
        Loan::new(id, Rating::new(rating).unwrap(), term, dec!(10000), dec!(10000))
    }

    fn ids(bucket: &[&Loan]) -> Vec<u64> {
        bucket.iter().map(|l| l.id()).collect()
    }

    #[test]
    fn test_partition_empty() {
        let loans: Vec<Loan> = vec![];
        assert!(partition_by_rating(&loans).is_empty());
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let loans = vec![
            loan(1, "A", 12),
            loan(2, "B", 24),
            loan(3, "A", 6),
            loan(4, "B", 36),
            loan(5, "A", 48),
        ];

        let grouped = partition_by_rating(&loans);

        assert_eq!(grouped.len(), 2);
        assert_eq!(ids(&grouped[&Rating::new("A").unwrap()]), vec![1, 3, 5]);
        assert_eq!(ids(&grouped[&Rating::new("B").unwrap()]), vec![2, 4]);
    }

    #[test]
    fn test_partition_collapses_equal_loans() {
        let loans = vec![loan(1, "A", 12), loan(2, "A", 12), loan(1, "A", 12)];

        let grouped = partition_by_rating(&loans);

        assert_eq!(ids(&grouped[&Rating::new("A").unwrap()]), vec![1, 2]);
    }

    #[test]
    fn test_partition_keeps_distinct_loans_with_same_id() {
        let first = loan(1, "A", 12);
        let changed = Loan::new(1, Rating::new("A").unwrap(), 12, dec!(10000), Decimal::ZERO);
        let loans = vec![first, changed];

        let grouped = partition_by_rating(&loans);

        assert_eq!(grouped[&Rating::new("A").unwrap()].len(), 2);
    }

    #[test]
    fn test_absent_ratings_have_no_bucket() {
        let loans = vec![loan(1, "C", 12)];
        let grouped = partition_by_rating(&loans);
        assert!(!grouped.contains_key(&Rating::new("A").unwrap()));
    }

    #[test]
    fn test_every_bucket_holds_its_own_rating() {
        let loans = vec![loan(1, "A", 12), loan(2, "B", 24), loan(3, "C", 6)];
        let grouped = partition_by_rating(&loans);
        for (rating, bucket) in &grouped {
            assert!(bucket.iter().all(|l| l.rating() == rating));
        }
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, 3);
    }
}
