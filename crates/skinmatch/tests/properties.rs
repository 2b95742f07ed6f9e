//! Property-based tests for the bit primitives and the filter-and-rank engine.

use std::collections::HashSet;

use proptest::prelude::*;

use skinmatch::engine::tiebreak::catalog_order;
use skinmatch::engine::{count_matches, evaluate};
use skinmatch::{
    AttributeSpace, Mask, MatchPolicy, Tagged, UnknownNamePolicy, build_query_from_names,
    decode_query, filter_and_rank, has_overlap, popcount, preview_toggle_delta, toggle_bit,
};

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    mask: Mask,
}

impl Tagged for Entry {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute_mask(&self) -> Mask {
        self.mask
    }
}

fn naive_popcount(mut mask: Mask) -> u32 {
    let mut count = 0;
    while mask != 0 {
        count += mask & 1;
        mask >>= 1;
    }
    count
}

/// Catalogs over an eight-attribute space, ids `e0..eN` in catalog order.
fn arb_catalog() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(0u32..256, 0..24).prop_map(|masks| {
        masks
            .into_iter()
            .enumerate()
            .map(|(i, mask)| Entry {
                id: format!("e{i}"),
                mask,
            })
            .collect()
    })
}

fn arb_bit() -> impl Strategy<Value = Mask> {
    (0u32..8).prop_map(|shift| 1 << shift)
}

fn ids(ranked: &[&Entry]) -> HashSet<String> {
    ranked.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn popcount_matches_naive_count_below_2_pow_20() {
    for mask in 0..(1u32 << 20) {
        assert_eq!(popcount(mask), naive_popcount(mask), "mask {mask:#b}");
    }
}

proptest! {
    #[test]
    fn popcount_matches_naive_count(mask in any::<u32>()) {
        prop_assert_eq!(popcount(mask), naive_popcount(mask));
    }

    #[test]
    fn overlap_is_symmetric(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(has_overlap(a, b), has_overlap(b, a));
    }

    #[test]
    fn toggle_twice_is_identity(mask in any::<u32>(), shift in 0u32..32) {
        prop_assert_eq!(toggle_bit(toggle_bit(mask, 1 << shift), 1 << shift), mask);
    }

    #[test]
    fn any_overlap_is_monotonic(catalog in arb_catalog(), query in 0u32..256, bit in arb_bit()) {
        let narrow = query & !bit;
        let wide = query | bit;
        let narrow_ids = ids(&filter_and_rank(&catalog, narrow, MatchPolicy::AnyOverlap, catalog_order()));
        let query_ids = ids(&filter_and_rank(&catalog, query, MatchPolicy::AnyOverlap, catalog_order()));
        let wide_ids = ids(&filter_and_rank(&catalog, wide, MatchPolicy::AnyOverlap, catalog_order()));
        prop_assert!(narrow_ids.is_subset(&query_ids));
        prop_assert!(query_ids.is_subset(&wide_ids));
    }

    #[test]
    fn full_coverage_is_antitonic(catalog in arb_catalog(), query in 0u32..256, bit in arb_bit()) {
        let base = ids(&filter_and_rank(&catalog, query & !bit, MatchPolicy::FullCoverage, catalog_order()));
        let stricter = ids(&filter_and_rank(&catalog, query | bit, MatchPolicy::FullCoverage, catalog_order()));
        prop_assert!(stricter.is_subset(&base));
    }

    #[test]
    fn results_are_ranked(catalog in arb_catalog(), query in 1u32..256) {
        let ranked = filter_and_rank(&catalog, query, MatchPolicy::AnyOverlap, catalog_order());
        for pair in ranked.windows(2) {
            let a = evaluate(pair[0].mask, query);
            let b = evaluate(pair[1].mask, query);
            prop_assert!(a.matched_bits >= b.matched_bits);
            if a.matched_bits == b.matched_bits {
                prop_assert!(a.is_exact_coverage >= b.is_exact_coverage);
            }
            prop_assert!(a.matched_bits > 0 && b.matched_bits > 0);
        }
    }

    #[test]
    fn exact_entity_ranks_before_broader_one(query in 1u32..256, extra in 1u32..256) {
        let extra = extra & !query;
        prop_assume!(extra != 0);
        let catalog = vec![
            Entry { id: "broad".into(), mask: query | extra },
            Entry { id: "exact".into(), mask: query },
        ];
        let ranked = filter_and_rank(&catalog, query, MatchPolicy::AnyOverlap, catalog_order());
        let order: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(order, vec!["exact", "broad"]);
    }

    #[test]
    fn full_ties_keep_catalog_order(mask in 1u32..256, len in 1usize..20, query in 1u32..256) {
        prop_assume!(has_overlap(mask, query));
        let catalog: Vec<Entry> = (0..len)
            .map(|i| Entry { id: format!("e{i}"), mask })
            .collect();
        let ranked = filter_and_rank(&catalog, query, MatchPolicy::AnyOverlap, catalog_order());
        let order: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn names_round_trip(width in 1usize..=32, raw in any::<u32>()) {
        let space = AttributeSpace::define((0..width).map(|i| format!("ATTR_{i}"))).unwrap();
        let query = raw & space.full_mask();
        let names = decode_query(query, &space);
        let rebuilt = build_query_from_names(&names, &space, UnknownNamePolicy::Reject).unwrap();
        prop_assert_eq!(rebuilt, query);
    }

    #[test]
    fn toggle_delta_is_count_difference(
        catalog in arb_catalog(),
        current in 0u32..256,
        bit in arb_bit(),
    ) {
        for policy in [MatchPolicy::AnyOverlap, MatchPolicy::EmptyQueryReturnsAll, MatchPolicy::FullCoverage] {
            let before = count_matches(&catalog, current, policy) as i64;
            let after = count_matches(&catalog, toggle_bit(current, bit), policy) as i64;
            prop_assert_eq!(preview_toggle_delta(&catalog, current, bit, policy), after - before);
            prop_assert_eq!(
                filter_and_rank(&catalog, current, policy, catalog_order()).len() as i64,
                before
            );
        }

        let delta = preview_toggle_delta(&catalog, current, bit, MatchPolicy::AnyOverlap);
        if has_overlap(current, bit) {
            prop_assert!(delta <= 0);
        } else {
            prop_assert!(delta >= 0);
        }
    }
}
