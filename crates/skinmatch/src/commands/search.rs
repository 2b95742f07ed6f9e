//! Filter and rank the catalog for a set of selected attribute names.

use crate::catalog::{CatalogStore, TiebreakField};
use crate::commands::{CmdMessage, CmdResult, ListedItem, names_of, plural, unknown_name_warnings};
use crate::engine::{MatchPolicy, filter_and_score};
use crate::error::Result;
use crate::query::{UnknownNamePolicy, build_query_from_names};

/// Fully resolved search settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub policy: MatchPolicy,
    pub tiebreak: TiebreakField,
    pub unknown_names: UnknownNamePolicy,
    pub limit: Option<usize>,
}

pub fn run<S: CatalogStore, N: AsRef<str>>(
    store: &S,
    names: &[N],
    params: &SearchParams,
) -> Result<CmdResult> {
    let query = build_query_from_names(names, store.space(), params.unknown_names)?;
    let items = store.list_items()?;
    let tiebreak = params.tiebreak;

    let ranked = filter_and_score(&items, query, params.policy, |a, b| tiebreak.compare(a, b));
    let total = ranked.len();
    let limit = params.limit.unwrap_or(total);

    let listed: Vec<ListedItem> = ranked
        .into_iter()
        .take(limit)
        .map(|m| ListedItem::new(store, m.entity.clone(), m.result))
        .collect();
    let shown = listed.len();

    let mut result = CmdResult::default()
        .with_chips(names_of(store, query))
        .with_listed_items(listed);

    if params.unknown_names == UnknownNamePolicy::Ignore {
        for warning in unknown_name_warnings(store, names) {
            result.add_message(warning);
        }
    }

    if total == 0 {
        result.add_message(CmdMessage::info("No items match"));
    } else if shown < total {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {}",
            shown,
            plural(total, "item")
        )));
    }

    Ok(result)
}
