use std::collections::HashSet;

use crate::defaults::default_catalog;
use crate::error::{Error, StorageError, ValidationError};
use crate::models::{Catalog, Category, ServiceItem};
use crate::store::Store;

pub const CATALOG_KEY: &str = "catalog";

/// In-memory catalog synchronized with the store. Each page context loads
/// its own instance; the store is the single source of truth and the last
/// write wins.
pub struct CatalogRepository<'a> {
    store: &'a Store,
    catalog: Catalog,
    dirty: HashSet<i64>,
    next_id: i64,
}

impl<'a> CatalogRepository<'a> {
    /// Load the persisted catalog, seeding from defaults when nothing usable
    /// is stored. The in-memory catalog is always fully populated afterwards.
    pub fn load(store: &'a Store) -> Self {
        let catalog = match store.get::<Catalog>(CATALOG_KEY) {
            Some(catalog) => catalog,
            None => {
                log::info!("no stored catalog, seeding defaults");
                let catalog = default_catalog();
                if let Err(e) = store.put(CATALOG_KEY, &catalog) {
                    log::warn!("failed to persist seed catalog: {e}");
                }
                catalog
            }
        };

        let next_id = catalog
            .values()
            .flatten()
            .map(|item| item.id)
            .max()
            .unwrap_or(0)
            + 1;

        CatalogRepository {
            store,
            catalog,
            dirty: HashSet::new(),
            next_id,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Items of one category in display order.
    pub fn items_in(&self, category: Category) -> &[ServiceItem] {
        self.catalog
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn item_by_id(&self, id: i64) -> Option<&ServiceItem> {
        self.catalog.values().flatten().find(|item| item.id == id)
    }

    pub fn category_of(&self, id: i64) -> Option<Category> {
        self.catalog
            .iter()
            .find(|(_, items)| items.iter().any(|item| item.id == id))
            .map(|(category, _)| *category)
    }

    pub fn is_dirty(&self, id: i64) -> bool {
        self.dirty.contains(&id)
    }

    /// Ids with uncommitted edits. Never persisted; empty in a fresh load.
    pub fn dirty_ids(&self) -> &HashSet<i64> {
        &self.dirty
    }

    /// Change a price in memory and mark the item dirty until committed.
    /// Unknown ids are a no-op.
    pub fn set_price(&mut self, id: i64, new_price: i64) -> Result<(), ValidationError> {
        let price =
            u32::try_from(new_price).map_err(|_| ValidationError::InvalidPrice(new_price))?;

        if let Some(item) = self
            .catalog
            .values_mut()
            .flatten()
            .find(|item| item.id == id)
        {
            item.price = price;
            self.dirty.insert(id);
        }

        Ok(())
    }

    /// Persist the full catalog snapshot, then clear the dirty marking. A
    /// failed write keeps the marking.
    pub fn commit(&mut self, id: i64) -> Result<(), StorageError> {
        self.persist()?;
        self.dirty.remove(&id);
        Ok(())
    }

    pub fn commit_all(&mut self) -> Result<(), StorageError> {
        self.persist()?;
        self.dirty.clear();
        Ok(())
    }

    /// Create an item in `category` and persist immediately. The new id is
    /// strictly greater than every id seen this session, deletions included.
    pub fn add(
        &mut self,
        category: Category,
        name: &str,
        price: i64,
        description: Option<&str>,
    ) -> Result<ServiceItem, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let price = u32::try_from(price).map_err(|_| ValidationError::InvalidPrice(price))?;

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let item = ServiceItem {
            id: self.next_id,
            name: name.to_string(),
            price,
            description,
        };
        self.next_id += 1;

        self.catalog.entry(category).or_default().push(item.clone());
        self.persist()?;

        Ok(item)
    }

    /// Delete an item wherever it lives. Missing ids are a silent no-op.
    pub fn remove(&mut self, id: i64) -> Result<(), StorageError> {
        let category = match self.category_of(id) {
            Some(category) => category,
            None => return Ok(()),
        };

        if let Some(items) = self.catalog.get_mut(&category) {
            items.retain(|item| item.id != id);
        }
        self.dirty.remove(&id);

        self.persist()
    }

    /// Restore default prices by exact name match within the same category.
    /// Items without a default counterpart keep their price. Clears all
    /// dirty tracking.
    pub fn reset_to_defaults(&mut self) -> Result<(), StorageError> {
        let defaults = default_catalog();

        for (category, default_items) in &defaults {
            if let Some(items) = self.catalog.get_mut(category) {
                for default_item in default_items {
                    let found = items
                        .iter_mut()
                        .find(|item| item.name == default_item.name);
                    if let Some(item) = found {
                        item.price = default_item.price;
                    }
                }
            }
        }

        self.persist()?;
        self.dirty.clear();
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store.put(CATALOG_KEY, &self.catalog)
    }
}
