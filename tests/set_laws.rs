#![cfg(feature = "collection")]
//! Property-based tests for Set laws.
//!
//! These tests verify that Set satisfies the properties expected of a set
//! data structure, independent of insertion order.

use seqset::collection::Set;
use proptest::prelude::*;

// =============================================================================
// Size Law
// Description: size never exceeds the number of insertions, with equality
// exactly when every inserted value was distinct
// =============================================================================

proptest! {
    #[test]
    fn prop_size_bounded_by_insertions(elements in prop::collection::vec(0i32..20, 0..40)) {
        let mut set = Set::new();
        for element in &elements {
            set.insert(*element);
        }

        let mut distinct = elements.clone();
        distinct.sort_unstable();
        distinct.dedup();

        prop_assert!(set.len() <= elements.len());
        prop_assert_eq!(set.len() == elements.len(), distinct.len() == elements.len());
    }
}

// =============================================================================
// Insert-Contains Law
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        new_element: i32
    ) {
        let mut set: Set<i32> = elements.into_iter().collect();
        set.insert(new_element);

        prop_assert!(set.contains(&new_element));
    }
}

// =============================================================================
// Remove-Contains Law
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        element_to_remove: i32
    ) {
        let mut set: Set<i32> = elements.into_iter().collect();
        set.remove(&element_to_remove);

        prop_assert!(!set.contains(&element_to_remove));
    }
}

// =============================================================================
// Idempotence Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_idempotent(
        elements in prop::collection::vec(0i32..30, 0..30),
        element in 0i32..30
    ) {
        let mut once: Set<i32> = elements.iter().copied().collect();
        once.insert(element);

        let mut twice = once.duplicate();
        twice.insert(element);

        prop_assert_eq!(once.as_slice(), twice.as_slice());
    }

    #[test]
    fn prop_remove_missing_is_noop(
        elements in prop::collection::vec(0i32..30, 0..30),
        missing in 100i32..200
    ) {
        let mut set: Set<i32> = elements.into_iter().collect();
        let before = set.to_vec();
        set.remove(&missing);

        prop_assert_eq!(set.to_vec(), before);
    }
}

// =============================================================================
// Union Membership Law
// Description: e ∈ A ∪ B ⟺ e ∈ A ∨ e ∈ B
// =============================================================================

proptest! {
    #[test]
    fn prop_union_membership_law(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30),
        probe in 0i32..40
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let union = set_a.union(&set_b);

        prop_assert_eq!(union.contains(&probe), set_a.contains(&probe) || set_b.contains(&probe));
    }

    #[test]
    fn prop_union_commutes_as_sets(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert_eq!(set_a.union(&set_b), set_b.union(&set_a));
    }

    #[test]
    fn prop_union_starts_with_other(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let union = set_a.union(&set_b);

        prop_assert_eq!(&union.as_slice()[..set_b.len()], set_b.as_slice());
    }
}

// =============================================================================
// Intersection Membership Law
// Description: e ∈ A ∩ B ⟺ e ∈ A ∧ e ∈ B
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_membership_law(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30),
        probe in 0i32..40
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let intersection = set_a.intersection(&set_b);

        prop_assert_eq!(
            intersection.contains(&probe),
            set_a.contains(&probe) && set_b.contains(&probe)
        );
    }

    #[test]
    fn prop_intersection_size_bounded(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let intersection = set_a.intersection(&set_b);

        prop_assert!(intersection.len() <= set_a.len().min(set_b.len()));
    }
}

// =============================================================================
// Duplicate Independence Law
// =============================================================================

proptest! {
    #[test]
    fn prop_duplicate_independent(
        elements in prop::collection::vec(any::<i32>(), 0..30),
        extra: i32
    ) {
        let original: Set<i32> = elements.into_iter().collect();
        let snapshot = original.to_vec();

        let mut copy = original.duplicate();
        prop_assert_eq!(&copy, &original);

        copy.insert(extra);
        if let Some(first) = snapshot.first() {
            copy.remove(first);
        }

        prop_assert_eq!(original.to_vec(), snapshot);
    }
}
