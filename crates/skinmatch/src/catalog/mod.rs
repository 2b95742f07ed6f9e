//! # Catalog Layer
//!
//! The engine never fetches or owns data; it is handed a slice. This module is
//! the collaborator that supplies that slice: a catalog of items tagged
//! against one attribute space, behind the [`CatalogStore`] trait.
//!
//! ## File Format
//!
//! Catalogs are exchanged as JSON, with attributes spelled by name:
//!
//! ```json
//! {
//!   "attributes": ["ACNE", "DULL", "DRY", "OILY"],
//!   "items": [
//!     { "id": "p1", "name": "Clarifying Serum", "attributes": ["ACNE", "DULL"],
//!       "stock": 12, "rating": 4.6, "price_cents": 2400 }
//!   ]
//! }
//! ```
//!
//! Loading is strict: an item naming an attribute outside `attributes`, or
//! two items sharing an id, is an error. Fixture data should be fixed, not
//! silently reinterpreted.
//!
//! ## Admin Edits
//!
//! Stock and price edits only touch tiebreak fields. They never change an
//! item's attribute mask, so they reorder results but never change which
//! items match.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryCatalog`]: fixtures and tests.
//! - [`fs::JsonCatalog`]: a catalog file on disk, optionally written back.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::attributes::AttributeSpace;
use crate::bits::Mask;
use crate::engine::Tagged;
use crate::engine::tiebreak::descending_by;
use crate::error::{Result, SkinmatchError};
use crate::query::{UnknownNamePolicy, build_query_from_names, decode_query};

pub mod fs;
pub mod memory;

fn default_kind() -> String {
    "product".to_string()
}

/// A single entry of a catalog file, attributes by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub price_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// On-disk catalog representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub attributes: Vec<String>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// A catalog entry with its attributes resolved to a mask.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub attributes: Mask,
    pub stock: u32,
    pub rating: f32,
    pub price_cents: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tagged for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute_mask(&self) -> Mask {
        self.attributes
    }
}

/// Which field orders items the engine ranks equally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiebreakField {
    /// Most stock first.
    #[default]
    Stock,
    /// Best rated first. Unrated (NaN) items go last.
    Rating,
    /// Cheapest first.
    Price,
    /// Leave ties in catalog order.
    Catalog,
}

impl TiebreakField {
    pub fn compare(self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            TiebreakField::Stock => b.stock.cmp(&a.stock),
            TiebreakField::Rating => {
                let mut by_rating = descending_by(|item: &CatalogItem| item.rating);
                by_rating(a, b)
            }
            TiebreakField::Price => a.price_cents.cmp(&b.price_cents),
            TiebreakField::Catalog => Ordering::Equal,
        }
    }
}

/// An attribute space plus the items tagged against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    space: AttributeSpace,
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(space: AttributeSpace) -> Self {
        Self {
            space,
            items: Vec::new(),
        }
    }

    /// Resolve a catalog file. Unknown attribute names and duplicate ids fail.
    pub fn from_file(file: CatalogFile) -> Result<Self> {
        let space = AttributeSpace::define_validated(file.attributes)?;
        let mut catalog = Self::new(space);
        for record in file.items {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Add one record, resolving its attribute names against the space.
    pub fn insert(&mut self, record: ItemRecord) -> Result<&CatalogItem> {
        if self.items.iter().any(|item| item.id == record.id) {
            return Err(SkinmatchError::DuplicateItem(record.id));
        }
        let attributes =
            build_query_from_names(&record.attributes, &self.space, UnknownNamePolicy::Reject)?;
        self.items.push(CatalogItem {
            id: record.id,
            name: record.name,
            kind: record.kind,
            attributes,
            stock: record.stock,
            rating: record.rating,
            price_cents: record.price_cents,
            updated_at: record.updated_at,
        });
        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            attributes: self.space.names().map(str::to_string).collect(),
            items: self
                .items
                .iter()
                .map(|item| ItemRecord {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    kind: item.kind.clone(),
                    attributes: decode_query(item.attributes, &self.space)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    stock: item.stock,
                    rating: item.rating,
                    price_cents: item.price_cents,
                    updated_at: item.updated_at,
                })
                .collect(),
        }
    }

    pub fn space(&self) -> &AttributeSpace {
        &self.space
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Result<&CatalogItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| SkinmatchError::ItemNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut CatalogItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| SkinmatchError::ItemNotFound(id.to_string()))
    }

    /// Put back a previously cloned item, undoing edits made since.
    pub(crate) fn restore(&mut self, item: CatalogItem) -> Result<()> {
        let slot = self.get_mut(&item.id)?;
        *slot = item;
        Ok(())
    }

    pub fn set_stock(&mut self, id: &str, stock: u32) -> Result<CatalogItem> {
        let item = self.get_mut(id)?;
        info!(id, from = item.stock, to = stock, "stock updated");
        item.stock = stock;
        item.updated_at = Some(Utc::now());
        Ok(item.clone())
    }

    pub fn set_price(&mut self, id: &str, price_cents: u64) -> Result<CatalogItem> {
        let item = self.get_mut(id)?;
        info!(id, from = item.price_cents, to = price_cents, "price updated");
        item.price_cents = price_cents;
        item.updated_at = Some(Utc::now());
        Ok(item.clone())
    }
}

/// Abstract interface for catalog storage.
///
/// Readers get an owned snapshot; the engine only ever sees that snapshot.
pub trait CatalogStore {
    fn space(&self) -> &AttributeSpace;

    /// Snapshot of every item, in catalog order.
    fn list_items(&self) -> Result<Vec<CatalogItem>>;

    fn get_item(&self, id: &str) -> Result<CatalogItem>;

    fn update_stock(&mut self, id: &str, stock: u32) -> Result<CatalogItem>;

    fn update_price(&mut self, id: &str, price_cents: u64) -> Result<CatalogItem>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;

    const FIXTURE: &str = r#"{
        "attributes": ["ACNE", "DULL", "DRY", "OILY"],
        "items": [
            { "id": "p1", "name": "Clarifying Serum", "attributes": ["ACNE", "DULL"], "stock": 12 },
            { "id": "p2", "name": "Oil Control Gel", "attributes": ["OILY", "ACNE"], "stock": 30 },
            { "id": "p3", "name": "Rich Cream", "attributes": ["DRY"], "kind": "brand" }
        ]
    }"#;

    #[test]
    fn parses_and_resolves_masks() {
        let catalog = Catalog::from_json(FIXTURE).unwrap();
        assert_eq!(catalog.space().len(), 4);
        let masks: Vec<Mask> = catalog.items().iter().map(|i| i.attributes).collect();
        assert_eq!(masks, vec![0b0011, 0b1001, 0b0100]);
        assert_eq!(catalog.get("p3").unwrap().kind, "brand");
        assert_eq!(catalog.get("p1").unwrap().kind, "product");
    }

    #[test]
    fn rejects_unknown_attribute_names() {
        let json = r#"{ "attributes": ["ACNE"], "items": [
            { "id": "p1", "name": "x", "attributes": ["GLOW"] } ] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, SkinmatchError::UnknownAttribute(ref e) if e.0 == "GLOW"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"{ "attributes": ["ACNE"], "items": [
            { "id": "p1", "name": "x" }, { "id": "p1", "name": "y" } ] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, SkinmatchError::DuplicateItem(ref id) if id == "p1"));
    }

    #[test]
    fn rejects_bad_attribute_space() {
        let json = r#"{ "attributes": ["ACNE", "ACNE"], "items": [] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, SkinmatchError::Configuration(_)));
    }

    #[test]
    fn rejects_malformed_attribute_names_in_files() {
        let json = r#"{ "attributes": ["ACNE", "DARK SPOTS"], "items": [] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SkinmatchError::Configuration(ConfigurationError::InvalidName { ref name, .. })
                if name == "DARK SPOTS"
        ));
    }

    #[test]
    fn to_file_round_trips() {
        let catalog = Catalog::from_json(FIXTURE).unwrap();
        let again = Catalog::from_file(catalog.to_file()).unwrap();
        assert_eq!(again, catalog);
        // Names come back in definition order, not the order they were written.
        assert_eq!(catalog.to_file().items[1].attributes, vec!["ACNE", "OILY"]);
    }

    #[test]
    fn edits_touch_tiebreak_fields_only() {
        let mut catalog = Catalog::from_json(FIXTURE).unwrap();
        let before = catalog.get("p2").unwrap().attributes;

        let updated = catalog.set_stock("p2", 0).unwrap();
        assert_eq!(updated.stock, 0);
        assert_eq!(updated.attributes, before);
        assert!(updated.updated_at.is_some());

        let updated = catalog.set_price("p2", 1_999).unwrap();
        assert_eq!(updated.price_cents, 1_999);

        assert!(matches!(
            catalog.set_stock("nope", 1),
            Err(SkinmatchError::ItemNotFound(_))
        ));
    }

    #[test]
    fn tiebreak_fields_order_items() {
        let catalog = Catalog::from_json(FIXTURE).unwrap();
        let p1 = catalog.get("p1").unwrap();
        let p2 = catalog.get("p2").unwrap();
        assert_eq!(TiebreakField::Stock.compare(p1, p2), Ordering::Greater);
        assert_eq!(TiebreakField::Catalog.compare(p1, p2), Ordering::Equal);
        assert_eq!(TiebreakField::Price.compare(p1, p2), Ordering::Equal);
    }

    #[test]
    fn nan_ratings_sort_after_rated_items() {
        let mut catalog = Catalog::from_json(FIXTURE).unwrap();
        catalog.items[0].rating = f32::NAN;
        catalog.items[1].rating = 4.1;
        catalog.items[2].rating = 4.8;

        let mut items = catalog.items().to_vec();
        items.sort_by(|a, b| TiebreakField::Rating.compare(a, b));
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p2", "p1"]);
    }
}
