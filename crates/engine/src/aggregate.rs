//! Grouped aggregation over a filtered selection.
//!
//! Groups are formed only from rows that are present, so a group with zero
//! members never appears in any result: no zero or NaN placeholder rows.
//! `BTreeMap` keeps group order deterministic.

use crate::rank::{Extreme, NumericField};
use catalog::CleanRecord;
use std::collections::BTreeMap;

/// Numeric aggregation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Mean,
    Sum,
}

/// Aggregate `field` per group.
pub fn group_aggregate<'a, K>(
    rows: &[&'a CleanRecord],
    group_key: K,
    field: NumericField,
    op: Aggregate,
) -> BTreeMap<String, f64>
where
    K: Fn(&CleanRecord) -> &str,
{
    let mut acc: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for &row in rows {
        let entry = acc.entry(group_key(row).to_string()).or_insert((0.0, 0));
        entry.0 += field.of(row);
        entry.1 += 1;
    }

    acc.into_iter()
        .map(|(key, (sum, count))| {
            let value = match op {
                Aggregate::Sum => sum,
                Aggregate::Mean => sum / count as f64,
            };
            (key, value)
        })
        .collect()
}

/// The record with the extreme `field` value per group.
///
/// Ties go to the first occurrence within the selection order.
pub fn group_extreme<'a, K>(
    rows: &[&'a CleanRecord],
    group_key: K,
    field: NumericField,
    extreme: Extreme,
) -> BTreeMap<String, &'a CleanRecord>
where
    K: Fn(&CleanRecord) -> &str,
{
    let mut best: BTreeMap<String, &'a CleanRecord> = BTreeMap::new();
    for &row in rows {
        best.entry(group_key(row).to_string())
            .and_modify(|current| {
                let replace = match extreme {
                    Extreme::Min => field.of(row) < field.of(current),
                    Extreme::Max => field.of(row) > field.of(current),
                };
                if replace {
                    *current = row;
                }
            })
            .or_insert(row);
    }
    best
}

/// Row count per group.
pub fn group_count<K>(rows: &[&CleanRecord], group_key: K) -> BTreeMap<String, usize>
where
    K: Fn(&CleanRecord) -> &str,
{
    let mut counts = BTreeMap::new();
    for &row in rows {
        *counts.entry(group_key(row).to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genre: &str, rating: f64, voting: u64, duration: f64) -> CleanRecord {
        CleanRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            rating,
            voting,
            duration,
            rating_norm: rating / 10.0,
            voting_norm: 0.5,
            score: rating / 10.0,
        }
    }

    #[test]
    fn test_mean_per_group() {
        let a = record("A", "action", 8.0, 100, 120.0);
        let b = record("B", "action", 6.0, 200, 100.0);
        let c = record("C", "drama", 9.0, 300, 180.0);

        let means = group_aggregate(
            &[&a, &b, &c],
            |r| r.genre.as_str(),
            NumericField::Rating,
            Aggregate::Mean,
        );

        assert_eq!(means["action"], 7.0);
        assert_eq!(means["drama"], 9.0);
    }

    #[test]
    fn test_sum_per_group() {
        let a = record("A", "action", 8.0, 100, 120.0);
        let b = record("B", "action", 6.0, 200, 100.0);

        let totals = group_aggregate(
            &[&a, &b],
            |r| r.genre.as_str(),
            NumericField::Voting,
            Aggregate::Sum,
        );

        assert_eq!(totals["action"], 300.0);
    }

    #[test]
    fn test_empty_groups_never_appear() {
        let a = record("A", "action", 8.0, 100, 120.0);

        let means = group_aggregate(
            &[&a],
            |r| r.genre.as_str(),
            NumericField::Rating,
            Aggregate::Mean,
        );

        assert_eq!(means.len(), 1);
        assert!(!means.contains_key("drama"));
    }

    #[test]
    fn test_extreme_record_per_group() {
        let a = record("A", "action", 8.0, 100, 120.0);
        let b = record("B", "action", 9.5, 200, 100.0);
        let c = record("C", "drama", 7.0, 300, 180.0);

        let best = group_extreme(
            &[&a, &b, &c],
            |r| r.genre.as_str(),
            NumericField::Rating,
            Extreme::Max,
        );

        assert_eq!(best["action"].title, "B");
        assert_eq!(best["drama"].title, "C");
    }

    #[test]
    fn test_extreme_tie_takes_first_occurrence() {
        let a = record("A", "action", 8.0, 100, 120.0);
        let b = record("B", "action", 8.0, 200, 100.0);

        let best = group_extreme(
            &[&a, &b],
            |r| r.genre.as_str(),
            NumericField::Rating,
            Extreme::Max,
        );

        assert_eq!(best["action"].title, "A");
    }

    #[test]
    fn test_group_count() {
        let a = record("A", "action", 8.0, 100, 120.0);
        let b = record("B", "action", 6.0, 200, 100.0);
        let c = record("C", "drama", 9.0, 300, 180.0);

        let counts = group_count(&[&a, &b, &c], |r| r.genre.as_str());
        assert_eq!(counts["action"], 2);
        assert_eq!(counts["drama"], 1);
    }

    #[test]
    fn test_empty_selection_yields_empty_maps() {
        let rows: Vec<&CleanRecord> = Vec::new();
        assert!(group_count(&rows, |r| r.genre.as_str()).is_empty());
        assert!(
            group_aggregate(&rows, |r| r.genre.as_str(), NumericField::Rating, Aggregate::Mean)
                .is_empty()
        );
    }
}
