//! "+3 / -5 matches" hints shown before a filter chip is toggled.
//!
//! Each preview re-filters the whole catalog twice, `O(n)` per chip. That is
//! fine for catalogs of a few hundred items; larger catalogs would want a
//! per-bit inverted index instead.

use serde::Serialize;

use super::{MatchPolicy, Tagged, count_matches};
use crate::attributes::AttributeSpace;
use crate::bits::{Mask, has_overlap, toggle_bit};

/// Change in result size if `candidate_bit` were toggled in `current`.
pub fn preview_toggle_delta<T: Tagged>(
    entities: &[T],
    current: Mask,
    candidate_bit: Mask,
    policy: MatchPolicy,
) -> i64 {
    let before = count_matches(entities, current, policy) as i64;
    let after = count_matches(entities, toggle_bit(current, candidate_bit), policy) as i64;
    after - before
}

/// Preview for one chip of the attribute space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleHint {
    pub name: String,
    pub bit: Mask,
    /// Whether the chip is currently part of the query (toggling removes it).
    pub active: bool,
    pub delta: i64,
}

/// One [`ToggleHint`] per attribute, in space definition order.
pub fn preview_all_toggles<T: Tagged>(
    entities: &[T],
    current: Mask,
    space: &AttributeSpace,
    policy: MatchPolicy,
) -> Vec<ToggleHint> {
    let before = count_matches(entities, current, policy) as i64;
    space
        .entries()
        .map(|(name, bit)| {
            let after = count_matches(entities, toggle_bit(current, bit), policy) as i64;
            ToggleHint {
                name: name.to_string(),
                bit,
                active: has_overlap(current, bit),
                delta: after - before,
            }
        })
        .collect()
}
