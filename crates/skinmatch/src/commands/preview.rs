//! Chip hints: how the result count would move if each attribute were toggled.

use crate::catalog::CatalogStore;
use crate::commands::{CmdMessage, CmdResult, names_of, plural, unknown_name_warnings};
use crate::engine::{MatchPolicy, count_matches, preview_all_toggles};
use crate::error::Result;
use crate::query::{UnknownNamePolicy, build_query_from_names};

pub fn run<S: CatalogStore, N: AsRef<str>>(
    store: &S,
    names: &[N],
    policy: MatchPolicy,
    unknown_names: UnknownNamePolicy,
) -> Result<CmdResult> {
    let query = build_query_from_names(names, store.space(), unknown_names)?;
    let items = store.list_items()?;
    let current = count_matches(&items, query, policy);
    let hints = preview_all_toggles(&items, query, store.space(), policy);

    let mut result = CmdResult::default()
        .with_chips(names_of(store, query))
        .with_hints(hints);

    if unknown_names == UnknownNamePolicy::Ignore {
        for warning in unknown_name_warnings(store, names) {
            result.add_message(warning);
        }
    }
    result.add_message(CmdMessage::info(format!(
        "{} match the current selection",
        plural(current, "item")
    )));
    Ok(result)
}
