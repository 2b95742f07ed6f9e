//! # Command Layer
//!
//! The storefront operations built on top of the engine. Each command lives in
//! its own submodule as a plain function over a [`CatalogStore`].
//!
//! Commands:
//! - turn attribute names into query masks and hand catalog snapshots to the
//!   engine
//! - return a structured [`CmdResult`] with listed items, hints, and messages
//! - never print, prompt, or pick exit codes; that is the CLI's job
//!
//! ## Testing
//!
//! Command tests run against [`InMemoryCatalog`](crate::catalog::memory::InMemoryCatalog)
//! and check `CmdResult` contents, including the messages.
//!
//! ## Command Modules
//!
//! - [`search`]: filter and rank the catalog for a set of names
//! - [`preview`]: "+N / -M" hints for every chip
//! - [`chips`]: decode masks and list the attribute space
//! - [`stock`]: admin stock and price edits

use serde::Serialize;

use crate::bits::Mask;
use crate::catalog::{CatalogItem, CatalogStore};
use crate::engine::{MatchResult, ToggleHint};
use crate::query::decode_query;

pub mod chips;
pub mod preview;
pub mod search;
pub mod stock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A catalog item as shown in a result list: the item, its score, and its
/// attributes by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedItem {
    pub item: CatalogItem,
    pub result: MatchResult,
    pub attribute_names: Vec<String>,
}

impl ListedItem {
    pub fn new<S: CatalogStore + ?Sized>(store: &S, item: CatalogItem, result: MatchResult) -> Self {
        let attribute_names = names_of(store, item.attributes);
        Self {
            item,
            result,
            attribute_names,
        }
    }
}

/// One attribute of the catalog's space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeEntry {
    pub name: String,
    pub bit: Mask,
    /// Items tagged with this attribute.
    pub items: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub listed_items: Vec<ListedItem>,
    pub affected_items: Vec<CatalogItem>,
    pub hints: Vec<ToggleHint>,
    /// Active chip names, in attribute order.
    pub chips: Vec<String>,
    pub attributes: Vec<AttributeEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<ListedItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_affected_items(mut self, items: Vec<CatalogItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_hints(mut self, hints: Vec<ToggleHint>) -> Self {
        self.hints = hints;
        self
    }

    pub fn with_chips(mut self, chips: Vec<String>) -> Self {
        self.chips = chips;
        self
    }
}

/// Owned attribute names for `mask` in the store's space.
pub(crate) fn names_of<S: CatalogStore + ?Sized>(store: &S, mask: Mask) -> Vec<String> {
    decode_query(mask, store.space())
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Warnings for selected names the space does not know.
pub(crate) fn unknown_name_warnings<S, N>(store: &S, names: &[N]) -> Vec<CmdMessage>
where
    S: CatalogStore + ?Sized,
    N: AsRef<str>,
{
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !store.space().contains(name))
        .map(|name| CmdMessage::warning(format!("Ignoring unknown attribute '{}'", name)))
        .collect()
}

pub(crate) fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}
