use super::{Catalog, CatalogItem, CatalogStore};
use crate::attributes::AttributeSpace;
use crate::error::Result;

/// In-memory catalog for fixtures and tests.
///
/// Owns its data outright; writers take `&mut self`, so there is nothing to
/// lock.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Catalog::from_json(json).map(Self::new)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl CatalogStore for InMemoryCatalog {
    fn space(&self) -> &AttributeSpace {
        self.catalog.space()
    }

    fn list_items(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.catalog.items().to_vec())
    }

    fn get_item(&self, id: &str) -> Result<CatalogItem> {
        self.catalog.get(id).cloned()
    }

    fn update_stock(&mut self, id: &str, stock: u32) -> Result<CatalogItem> {
        self.catalog.set_stock(id, stock)
    }

    fn update_price(&mut self, id: &str, price_cents: u64) -> Result<CatalogItem> {
        self.catalog.set_price(id, price_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkinmatchError;

    fn store() -> InMemoryCatalog {
        InMemoryCatalog::from_json(
            r#"{ "attributes": ["ACNE", "DRY"], "items": [
                { "id": "a", "name": "A", "attributes": ["ACNE"], "stock": 1 },
                { "id": "b", "name": "B", "attributes": ["DRY"], "stock": 2 } ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn lists_items_in_catalog_order() {
        let ids: Vec<String> = store().list_items().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn snapshots_are_detached_from_later_edits() {
        let mut store = store();
        let snapshot = store.list_items().unwrap();
        store.update_stock("a", 99).unwrap();
        assert_eq!(snapshot[0].stock, 1);
        assert_eq!(store.get_item("a").unwrap().stock, 99);
    }

    #[test]
    fn missing_item_is_an_error() {
        let mut store = store();
        assert!(matches!(
            store.get_item("zzz"),
            Err(SkinmatchError::ItemNotFound(_))
        ));
        assert!(store.update_price("zzz", 1).is_err());
    }
}
