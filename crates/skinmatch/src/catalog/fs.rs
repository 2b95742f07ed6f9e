use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{Catalog, CatalogItem, CatalogStore};
use crate::attributes::AttributeSpace;
use crate::error::Result;

/// A catalog loaded from a JSON file.
///
/// Admin edits are applied in memory and, when `persist` is on, written back
/// to the same file after every edit.
#[derive(Debug)]
pub struct JsonCatalog {
    path: PathBuf,
    catalog: Catalog,
    persist: bool,
}

impl JsonCatalog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;
        let catalog = Catalog::from_json(&content)?;
        info!(
            path = %path.display(),
            attributes = catalog.space().len(),
            items = catalog.items().len(),
            "catalog loaded"
        );
        Ok(Self {
            path,
            catalog,
            persist: false,
        })
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if !self.persist {
            return Ok(());
        }
        let content = serde_json::to_string_pretty(&self.catalog.to_file())?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "catalog written");
        Ok(())
    }

    /// Apply an edit and flush it. A failed write undoes the edit so memory
    /// never drifts from the file.
    fn commit<F>(&mut self, id: &str, edit: F) -> Result<CatalogItem>
    where
        F: FnOnce(&mut Catalog) -> Result<CatalogItem>,
    {
        let previous = self.catalog.get(id)?.clone();
        let item = edit(&mut self.catalog)?;
        if let Err(e) = self.flush() {
            warn!(id, error = %e, "catalog write failed, edit rolled back");
            self.catalog.restore(previous)?;
            return Err(e);
        }
        Ok(item)
    }
}

impl CatalogStore for JsonCatalog {
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
        self.commit(id, |catalog| catalog.set_stock(id, stock))
    }

    fn update_price(&mut self, id: &str, price_cents: u64) -> Result<CatalogItem> {
        self.commit(id, |catalog| catalog.set_price(id, price_cents))
    }
}
