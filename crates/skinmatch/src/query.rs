//! Query construction from attribute names, and back again for display.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attributes::AttributeSpace;
use crate::bits::{Mask, has_overlap, toggle_bit};
use crate::error::UnknownAttributeError;

/// What to do with a selected name that the space does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownNamePolicy {
    /// Skip it. Matches the permissive chip toggling of a storefront UI.
    #[default]
    Ignore,
    /// Fail with [`UnknownAttributeError`].
    Reject,
}

/// OR together the bits of every selected name.
pub fn build_query_from_names<I, S>(
    selected: I,
    space: &AttributeSpace,
    unknown: UnknownNamePolicy,
) -> Result<Mask, UnknownAttributeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut query = 0;
    for name in selected {
        let name = name.as_ref();
        match (space.bit(name), unknown) {
            (Some(bit), _) => query |= bit,
            (None, UnknownNamePolicy::Ignore) => {
                debug!(attribute = name, "ignoring unknown attribute in query");
            }
            (None, UnknownNamePolicy::Reject) => {
                return Err(UnknownAttributeError(name.to_string()));
            }
        }
    }
    Ok(query)
}

/// Names whose bits are set in `query`, in space definition order.
///
/// Bits beyond the space are not attributes and are skipped.
pub fn decode_query(query: Mask, space: &AttributeSpace) -> Vec<&str> {
    space
        .entries()
        .filter(|&(_, bit)| has_overlap(query, bit))
        .map(|(name, _)| name)
        .collect()
}

/// Toggle a single chip by name.
pub fn toggle_name(
    query: Mask,
    name: &str,
    space: &AttributeSpace,
) -> Result<Mask, UnknownAttributeError> {
    space
        .bit(name)
        .map(|bit| toggle_bit(query, bit))
        .ok_or_else(|| UnknownAttributeError(name.to_string()))
}
