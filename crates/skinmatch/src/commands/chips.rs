//! Attribute space inspection: decode a raw mask, list every chip.

use crate::bits::{Mask, has_overlap};
use crate::catalog::CatalogStore;
use crate::commands::{AttributeEntry, CmdMessage, CmdResult, names_of};
use crate::error::Result;

/// Names of the bits set in `mask`.
pub fn decode<S: CatalogStore>(store: &S, mask: Mask) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_chips(names_of(store, mask));

    let stray = mask & !store.space().full_mask();
    if stray != 0 {
        result.add_message(CmdMessage::warning(format!(
            "Bits outside the attribute space ignored: {:#b}",
            stray
        )));
    }
    if result.chips.is_empty() {
        result.add_message(CmdMessage::info("No attributes selected"));
    }
    Ok(result)
}

/// Every attribute of the space with its bit and how many items carry it.
pub fn list<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_items()?;
    let mut result = CmdResult::default();
    result.attributes = store
        .space()
        .entries()
        .map(|(name, bit)| AttributeEntry {
            name: name.to_string(),
            bit,
            items: items
                .iter()
                .filter(|item| has_overlap(item.attributes, bit))
                .count(),
        })
        .collect();
    Ok(result)
}
