// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Collection Operations

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use underbar::collection::{each, index_of, Key};
use underbar::reduce::{fold, reduce};
use underbar::transform::{
    difference, every, filter, intersection, map, reject, shuffle_with, some, sort_by, uniq,
    uniq_by, zip,
};

// ============================================================================
// Strategies
// ============================================================================

/// Small integers so duplicates are common
fn small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 0..40)
}

fn non_empty_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 1..40)
}

// ============================================================================
// Traversal and Reduction
// ============================================================================

proptest! {
    /// Property: each visits every index exactly once, in increasing order
    #[test]
    fn prop_each_visits_indices_in_order(values in small_values()) {
        let mut keys = Vec::new();
        each(&values, |_, key, _| keys.push(key));

        let expected: Vec<Key> = (0..values.len()).map(Key::Index).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Property: a seeded sum agrees with the iterator sum
    #[test]
    fn prop_seeded_reduce_matches_sum(values in small_values()) {
        let total = reduce(&values, |acc, n| acc + n, Some(0));
        prop_assert_eq!(total, Ok(values.iter().sum::<i32>()));
    }

    /// Property: unseeded reduce starts from the first element
    #[test]
    fn prop_unseeded_reduce_uses_first_element(values in non_empty_values()) {
        let seeded = reduce(&values[1..], |acc, n| acc.max(*n), Some(values[0]));
        let unseeded = reduce(&values, |acc, n| acc.max(*n), None);
        prop_assert_eq!(seeded, unseeded);
    }

    /// Property: fold with a counter counts the elements
    #[test]
    fn prop_fold_counts_elements(values in small_values()) {
        prop_assert_eq!(fold(&values, 0usize, |count, _| count + 1), values.len());
    }
}

// ============================================================================
// Transforms
// ============================================================================

proptest! {
    /// Property: filter and reject partition the input
    #[test]
    fn prop_filter_reject_partition(values in small_values(), divisor in 1i32..5) {
        let kept = filter(&values, |n, _, _| n % divisor == 0);
        let dropped = reject(&values, |n, _, _| n % divisor == 0);

        let expected_kept: Vec<i32> = values.iter().copied().filter(|n| n % divisor == 0).collect();
        let expected_dropped: Vec<i32> = values.iter().copied().filter(|n| n % divisor != 0).collect();
        prop_assert_eq!(&kept, &expected_kept);
        prop_assert_eq!(&dropped, &expected_dropped);

        // Merging the two halves back by the predicate rebuilds the input.
        let (mut kept, mut dropped) = (kept.into_iter(), dropped.into_iter());
        let rebuilt: Vec<i32> = values
            .iter()
            .filter_map(|n| if n % divisor == 0 { kept.next() } else { dropped.next() })
            .collect();
        prop_assert_eq!(rebuilt, values);
    }

    /// Property: map preserves length and order
    #[test]
    fn prop_map_preserves_order(values in small_values()) {
        let mapped = map(&values, |n, key, _| (key.to_string(), n * 3));
        let expected: Vec<(String, i32)> = values
            .iter()
            .enumerate()
            .map(|(index, n)| (index.to_string(), n * 3))
            .collect();
        prop_assert_eq!(mapped, expected);
    }

    /// Property: some(p) is the negation of every(not p)
    #[test]
    fn prop_some_every_duality(values in small_values(), threshold in -20i32..20) {
        prop_assert_eq!(
            some(&values, |n| *n > threshold),
            !every(&values, |n| *n <= threshold)
        );
    }

    /// Property: uniq is idempotent and leaves no duplicates
    #[test]
    fn prop_uniq_is_idempotent(values in small_values()) {
        let once = uniq(&values, false);
        prop_assert_eq!(uniq(&once, false), once.clone());
        for (position, value) in once.iter().enumerate() {
            prop_assert_eq!(index_of(&once, value), Some(position));
        }
    }

    /// Property: the sorted hint never changes the result, sorted or not
    #[test]
    fn prop_sorted_hint_agrees(mut values in small_values()) {
        prop_assert_eq!(uniq(&values, true), uniq(&values, false));
        values.sort();
        prop_assert_eq!(uniq(&values, true), uniq(&values, false));
    }

    /// Property: uniq_by with the identity mapping is uniq
    #[test]
    fn prop_uniq_by_identity(values in small_values()) {
        prop_assert_eq!(uniq_by(&values, false, |n| *n), uniq(&values, false));
    }

    /// Property: sort_by is a stable sort on the criterion
    #[test]
    fn prop_sort_by_is_stable(values in small_values()) {
        let tagged: Vec<(i32, usize)> = values.iter().copied().zip(0..).collect();
        let sorted = sort_by(&tagged, |(n, _)| n.abs());

        let mut expected = tagged.clone();
        expected.sort_by_key(|(n, _)| n.abs());
        prop_assert_eq!(sorted, expected);
    }

    /// Property: a shuffle is a permutation of its input
    #[test]
    fn prop_shuffle_is_permutation(values in small_values(), seed in any::<u64>()) {
        let mut shuffled = shuffle_with(&values, &mut StdRng::seed_from_u64(seed));
        let mut original = values.clone();
        shuffled.sort();
        original.sort();
        prop_assert_eq!(shuffled, original);
    }

    /// Property: zip produces one row per index of the longest input
    #[test]
    fn prop_zip_row_count(left in small_values(), right in small_values()) {
        let rows = zip(&[left.clone(), right.clone()]);

        prop_assert_eq!(rows.len(), left.len().max(right.len()));
        for (index, row) in rows.iter().enumerate() {
            prop_assert_eq!(row, &vec![left.get(index).copied(), right.get(index).copied()]);
        }
    }

    /// Property: intersection and difference split the first input
    #[test]
    fn prop_intersection_difference_split(left in small_values(), right in small_values()) {
        let shared = intersection(&[left.clone(), right.clone()]);
        let only_left = difference(&[left.clone(), right.clone()]);

        prop_assert_eq!(shared.len() + only_left.len(), left.len());
        prop_assert!(shared.iter().all(|n| right.contains(n)));
        prop_assert!(only_left.iter().all(|n| !right.contains(n)));
    }
}
