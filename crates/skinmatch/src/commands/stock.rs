//! Admin edits to stock and price.
//!
//! Both fields only feed tiebreaks, so an edit can reorder search results but
//! never changes which items match.

use crate::catalog::CatalogStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn set_stock<S: CatalogStore>(store: &mut S, id: &str, stock: u32) -> Result<CmdResult> {
    let before = store.get_item(id)?.stock;
    let item = store.update_stock(id, stock)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stock of '{}' set to {} (was {})",
        item.id, stock, before
    )));
    if stock == 0 {
        result.add_message(CmdMessage::warning(format!("'{}' is out of stock", item.id)));
    }
    Ok(result.with_affected_items(vec![item]))
}

pub fn set_price<S: CatalogStore>(store: &mut S, id: &str, price_cents: u64) -> Result<CmdResult> {
    let before = store.get_item(id)?.price_cents;
    let item = store.update_price(id, price_cents)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Price of '{}' set to {} (was {})",
        item.id,
        format_cents(price_cents),
        format_cents(before)
    )));
    Ok(result.with_affected_items(vec![item]))
}

pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
