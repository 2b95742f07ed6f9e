//! # Filter-and-Rank Engine
//!
//! One generic implementation of the filter/score/sort triad that every
//! catalog in the storefront needs. Domains plug in two things only:
//!
//! - an [`AttributeSpace`](crate::attributes::AttributeSpace) their entities
//!   are tagged against (via [`Tagged::attribute_mask`]), and
//! - a tiebreak comparator (see [`tiebreak`]).
//!
//! ## Inclusion
//!
//! Which entities make it into the result is decided by an explicit
//! [`MatchPolicy`]. The caller always chooses; the engine never guesses
//! between "any overlap" and "full coverage".
//!
//! ## Ranking
//!
//! Included entities are ordered by, in precedence:
//!
//! 1. `matched_bits` = `popcount(mask & query)`, descending
//! 2. `is_exact_coverage` = `popcount(mask) == popcount(query)`, true first
//! 3. the caller's tiebreak comparator
//!
//! The sort is stable, so entities tied on all three keep catalog order.
//! Exact coverage only ever affects order, never inclusion.
//!
//! ## Cost
//!
//! The predicate is a couple of fixed-width bit operations per entity; the
//! sort is `O(n log n)`. Nothing is cached between calls, every call is a
//! pure function of its inputs.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bits::{Mask, covers_all, has_overlap, popcount};

pub mod preview;
pub mod tiebreak;


pub use preview::{ToggleHint, preview_all_toggles, preview_toggle_delta};

/// Anything that can be matched: a product, an ingredient, a dropshipper
/// profile, a user session.
pub trait Tagged {
    /// Stable identifier, unique within its catalog.
    fn id(&self) -> &str;

    /// Bitwise OR of the attributes this entity has or targets.
    fn attribute_mask(&self) -> Mask;
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn attribute_mask(&self) -> Mask {
        (**self).attribute_mask()
    }
}

/// Inclusion rule for [`filter_and_rank`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Include an entity iff it shares at least one bit with the query.
    /// The empty query therefore matches nothing.
    AnyOverlap,
    /// The empty query returns the whole catalog in catalog order, unranked.
    /// Any other query behaves as [`MatchPolicy::AnyOverlap`].
    #[default]
    EmptyQueryReturnsAll,
    /// Include an entity iff it has every bit of the query.
    /// The empty query is covered by everything and is ranked normally.
    FullCoverage,
}

impl MatchPolicy {
    /// Whether an entity with `mask` is included for `query`.
    pub fn admits(self, mask: Mask, query: Mask) -> bool {
        match self {
            MatchPolicy::EmptyQueryReturnsAll if query == 0 => true,
            MatchPolicy::AnyOverlap | MatchPolicy::EmptyQueryReturnsAll => {
                has_overlap(mask, query)
            }
            MatchPolicy::FullCoverage => covers_all(mask, query),
        }
    }

    fn short_circuits(self, query: Mask) -> bool {
        self == MatchPolicy::EmptyQueryReturnsAll && query == 0
    }
}

/// How a single entity scored against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched_bits: u32,
    pub is_exact_coverage: bool,
}

impl MatchResult {
    /// Primary ranking order: more matched bits first, then exact coverage.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .matched_bits
            .cmp(&self.matched_bits)
            .then(other.is_exact_coverage.cmp(&self.is_exact_coverage))
    }
}

/// Score `mask` against `query`.
pub fn evaluate(mask: Mask, query: Mask) -> MatchResult {
    MatchResult {
        matched_bits: popcount(mask & query),
        is_exact_coverage: popcount(mask) == popcount(query),
    }
}

/// An included entity together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch<'a, T> {
    pub entity: &'a T,
    pub result: MatchResult,
}

/// Filter `entities` by `policy` and rank what is left.
///
/// This is [`filter_and_rank`] with the scores kept.
pub fn filter_and_score<'a, T, F>(
    entities: &'a [T],
    query: Mask,
    policy: MatchPolicy,
    mut tiebreak: F,
) -> Vec<RankedMatch<'a, T>>
where
    T: Tagged,
    F: FnMut(&T, &T) -> Ordering,
{
    let score = |entity: &'a T| RankedMatch {
        entity,
        result: evaluate(entity.attribute_mask(), query),
    };

    if policy.short_circuits(query) {
        debug!(
            total = entities.len(),
            "empty query, returning catalog unranked"
        );
        return entities.iter().map(score).collect();
    }

    let mut matches: Vec<RankedMatch<'a, T>> = entities
        .iter()
        .filter(|entity| policy.admits(entity.attribute_mask(), query))
        .map(score)
        .collect();

    // `sort_by` is stable: full ties keep catalog order.
    matches.sort_by(|a, b| {
        a.result
            .rank_cmp(&b.result)
            .then_with(|| tiebreak(a.entity, b.entity))
    });

    debug!(
        query,
        ?policy,
        total = entities.len(),
        matched = matches.len(),
        "ranked catalog"
    );
    matches
}

/// Entities admitted by `policy` for `query`, best match first.
pub fn filter_and_rank<'a, T, F>(
    entities: &'a [T],
    query: Mask,
    policy: MatchPolicy,
    tiebreak: F,
) -> Vec<&'a T>
where
    T: Tagged,
    F: FnMut(&T, &T) -> Ordering,
{
    filter_and_score(entities, query, policy, tiebreak)
        .into_iter()
        .map(|m| m.entity)
        .collect()
}

/// Size of the [`filter_and_rank`] result, without sorting.
pub fn count_matches<T: Tagged>(entities: &[T], query: Mask, policy: MatchPolicy) -> usize {
    if policy.short_circuits(query) {
        return entities.len();
    }
    entities
        .iter()
        .filter(|entity| policy.admits(entity.attribute_mask(), query))
        .count()
}
