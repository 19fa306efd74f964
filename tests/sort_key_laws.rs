//! Property-based tests for `SortKey` laws.
//!
//! This module verifies the synthesizer's contract with proptest: strict
//! betweenness, determinism, alphabet closure, and growth under pressure.

use orderq::key::SortKey;
use proptest::prelude::*;

/// Returns `true` if some key sorts strictly between `lower` and `upper`.
///
/// The only pairs with no room are `x` vs `x` plus a run of `'a'` (the
/// alphabet minimum): nothing can sort strictly inside that gap. Such pairs
/// never arise between minted keys, which never end in `'a'`.
fn has_room_between(lower: &str, upper: &str) -> bool {
    upper
        .strip_prefix(lower)
        .is_none_or(|suffix| suffix.bytes().any(|byte| byte != b'a'))
}

fn key(value: &str) -> SortKey {
    SortKey::new(value).unwrap()
}

proptest! {
    /// Betweenness Law: for ordered bounds with room, the minted key sorts
    /// strictly inside.
    #[test]
    fn prop_between_bounded_is_strictly_inside(
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}",
    ) {
        prop_assume!(first != second);
        let (lower, upper) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        prop_assume!(has_room_between(&lower, &upper));

        let lower = key(&lower);
        let upper = key(&upper);
        let minted = SortKey::between(Some(&lower), Some(&upper));

        prop_assert!(lower < minted, "{} < {} should hold", lower, minted);
        prop_assert!(minted < upper, "{} < {} should hold", minted, upper);
    }

    /// Open-End Law: an absent bound behaves as an open end.
    #[test]
    fn prop_between_open_ends_respect_the_present_bound(bound in "[a-z]{1,8}") {
        let bound = key(&bound);

        let above = SortKey::between(Some(&bound), None);
        prop_assert!(above > bound);

        // A bound of all-'a' prefixes leaves no room below; skip those.
        if has_room_between("", bound.as_str()) {
            let below = SortKey::between(None, Some(&bound));
            prop_assert!(below < bound);
        }
    }

    /// Determinism Law: identical bounds always mint the identical key.
    #[test]
    fn prop_between_is_deterministic(
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}",
    ) {
        prop_assume!(first < second);
        prop_assume!(has_room_between(&first, &second));

        let lower = key(&first);
        let upper = key(&second);

        prop_assert_eq!(
            SortKey::between(Some(&lower), Some(&upper)),
            SortKey::between(Some(&lower), Some(&upper))
        );
    }

    /// Closure Law: minted keys stay inside the alphabet and validate.
    #[test]
    fn prop_minted_keys_revalidate(
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}",
    ) {
        prop_assume!(first < second);
        prop_assume!(has_room_between(&first, &second));

        let minted = SortKey::between(Some(&key(&first)), Some(&key(&second)));
        prop_assert!(SortKey::new(minted.as_str()).is_ok());
    }

    /// Growth Law: repeatedly minting against the same upper bound produces
    /// a strictly increasing chain that never escapes the bound.
    #[test]
    fn prop_same_gap_chain_is_strictly_increasing(
        bound in "[b-z][a-z]{0,4}",
        steps in 1usize..30,
    ) {
        let upper = key(&bound);
        let mut lower: Option<SortKey> = None;

        for _ in 0..steps {
            let minted = SortKey::between(lower.as_ref(), Some(&upper));
            if let Some(previous) = &lower {
                prop_assert!(minted > *previous);
            }
            prop_assert!(minted < upper);
            lower = Some(minted);
        }
    }
}
