//! Property-based tests for the iteration vocabulary laws.
//!
//! These tests verify the order-independent properties the vocabulary
//! guarantees over arbitrary sets, without ever assuming a particular
//! traversal order.

use std::collections::HashSet;

use proptest::prelude::*;
use setkit::prelude::*;

// =============================================================================
// Partition Law
// Description: select(S, p) and reject(S, p) are disjoint and their
// union equals S
// =============================================================================

proptest! {
    #[test]
    fn prop_select_reject_partition_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50),
        modulus in 1..10i32
    ) {
        let set: HashSet<i32> = elements;
        let selected = set.select(|n| n % modulus == 0);
        let rejected = set.reject(|n| n % modulus == 0);

        prop_assert!(selected.is_disjoint(&rejected));
        let union: HashSet<i32> = selected.union(&rejected).copied().collect();
        prop_assert_eq!(union, set);
    }
}

// =============================================================================
// Match Law
// Description: match_with returns a member of S satisfying p, or None
// iff no element of S satisfies p
// =============================================================================

proptest! {
    #[test]
    fn prop_match_with_agrees_with_membership_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50),
        threshold: i32
    ) {
        let set: HashSet<i32> = elements;

        match set.match_with(|n| *n > threshold) {
            Some(found) => {
                prop_assert!(set.contains(found));
                prop_assert!(*found > threshold);
            }
            None => prop_assert!(set.iter().all(|n| *n <= threshold)),
        }
    }
}

// =============================================================================
// Match-Select Consistency Law
// Description: match_with finds an element exactly when select keeps one
// =============================================================================

proptest! {
    #[test]
    fn prop_match_with_none_iff_select_empty_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50),
        modulus in 1..10i32
    ) {
        let set: HashSet<i32> = elements;

        let found = set.match_with(|n| n % modulus == 0);
        let selected = set.select(|n| n % modulus == 0);

        prop_assert_eq!(found.is_none(), selected.is_empty());
    }
}

// =============================================================================
// Injective Map Law
// Description: an injective transform preserves cardinality
// =============================================================================

proptest! {
    #[test]
    fn prop_map_injective_preserves_cardinality_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50)
    ) {
        let set: HashSet<i32> = elements;
        let mapped = set.map(|n| i64::from(*n) * 2);

        prop_assert_eq!(mapped.len(), set.len());
    }
}

// =============================================================================
// Constant Map Law
// Description: a constant transform collapses any non-empty set to a
// singleton
// =============================================================================

proptest! {
    #[test]
    fn prop_map_constant_collapses_law(
        elements in prop::collection::hash_set(any::<i32>(), 1..50),
        constant: u8
    ) {
        let set: HashSet<i32> = elements;
        let mapped = set.map(|_| constant);

        prop_assert_eq!(mapped.len(), 1);
        prop_assert!(mapped.contains(&constant));
    }
}

// =============================================================================
// Coverage Law
// Description: each invokes its procedure exactly |S| times, covering
// every element of S
// =============================================================================

proptest! {
    #[test]
    fn prop_each_covers_every_element_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50)
    ) {
        let set: HashSet<i32> = elements;

        let mut seen: Vec<i32> = Vec::new();
        set.each(|n| seen.push(*n));

        prop_assert_eq!(seen.len(), set.len());
        let seen_set: HashSet<i32> = seen.into_iter().collect();
        prop_assert_eq!(seen_set, set);
    }
}

// =============================================================================
// Reduce Counting Law
// Description: counting via reduce agrees with cardinality
// =============================================================================

proptest! {
    #[test]
    fn prop_reduce_count_law(elements in prop::collection::hash_set(any::<i32>(), 0..50)) {
        let set: HashSet<i32> = elements;
        let count = set.reduce(0usize, |count, _| count + 1);

        prop_assert_eq!(count, set.len());
    }
}

// =============================================================================
// Reduce Order-Independence Law
// Description: an order-insensitive accumulator produces the same
// result as direct summation, whatever order the fold observed
// =============================================================================

proptest! {
    #[test]
    fn prop_reduce_sum_law(elements in prop::collection::hash_set(any::<i32>(), 0..50)) {
        let set: HashSet<i32> = elements;

        let total = set.reduce(0i64, |total, n| total + i64::from(*n));
        let expected: i64 = set.iter().map(|n| i64::from(*n)).sum();

        prop_assert_eq!(total, expected);
    }
}

// =============================================================================
// Select Idempotence Law
// Description: selecting twice under the same predicate changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_select_idempotence_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50),
        modulus in 1..10i32
    ) {
        let set: HashSet<i32> = elements;

        let once = set.select(|n| n % modulus == 0);
        let twice = once.select(|n| n % modulus == 0);

        prop_assert_eq!(twice, once);
    }
}

// =============================================================================
// Checked Equivalence Law
// Description: a present callable on the checked surface behaves
// exactly like the unchecked operation
// =============================================================================

proptest! {
    #[test]
    fn prop_checked_surface_equivalence_law(
        elements in prop::collection::hash_set(any::<i32>(), 0..50),
        modulus in 1..10i32
    ) {
        let set: HashSet<i32> = elements;

        let checked = set.try_select(Some(|n: &i32| n % modulus == 0));
        let unchecked = set.select(|n| n % modulus == 0);
        prop_assert_eq!(checked, Ok(unchecked));

        let checked_total = set.try_reduce(0i64, Some(|total: i64, n: &i32| total + i64::from(*n)));
        let unchecked_total = set.reduce(0i64, |total, n| total + i64::from(*n));
        prop_assert_eq!(checked_total, Ok(unchecked_total));
    }
}
