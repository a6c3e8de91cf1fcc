//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{Category, ItemKind},
        item::{Catalogued, Item},
        item_form::ItemFields,
    },
};

use super::{read, write, SharedRepository};

#[derive(Clone)]
pub struct CatalogService {
    repository: SharedRepository,
}

impl CatalogService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Every item: books, then magazines, then DVDs
    pub fn list_items(&self) -> AppResult<Vec<Item>> {
        Ok(read(&self.repository)?.get_all_items())
    }

    /// Get item by id
    pub fn get_item(&self, id: &str) -> AppResult<Item> {
        read(&self.repository)?
            .find_by_id(id.trim())
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id.trim())))
    }

    /// Validate the raw fields and add a new item.
    /// The id must not be used by any item of any kind.
    pub fn add_item(&self, kind: ItemKind, id: &str, fields: &ItemFields) -> AppResult<Item> {
        let item = fields.build(kind, id)?;
        write(&self.repository)?.add_item(item.clone())?;
        tracing::info!("Catalog add: {} {} \"{}\"", kind, item.id(), item.title());
        Ok(item)
    }

    /// Replace the editable fields of an existing item. The id, the kind and
    /// any running rental stay as they are.
    pub fn edit_item(&self, id: &str, fields: &ItemFields) -> AppResult<Item> {
        let id = id.trim();
        let mut repository = write(&self.repository)?;
        let existing = repository
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;

        let updated = fields.update(&existing)?;
        repository.replace_item(updated.clone())?;
        tracing::info!("Catalog edit: {} \"{}\"", id, updated.title());
        Ok(updated)
    }

    /// Delete an item. Rented items cannot be removed.
    pub fn remove_item(&self, id: &str) -> AppResult<()> {
        let id = id.trim();
        let mut repository = write(&self.repository)?;
        let item = repository
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;

        if let Some(renter) = item.rented_by() {
            tracing::warn!("Catalog remove refused: {} is rented by {}", id, renter);
            return Err(AppError::not_available(format!(
                "Item {} is currently rented by {} and cannot be removed",
                id, renter
            )));
        }

        repository.remove_item(id);
        tracing::info!("Catalog remove: {}", id);
        Ok(())
    }

    /// Free-text search over id, title and author/publisher/director.
    /// A blank query lists everything.
    pub fn search(&self, query: &str) -> AppResult<Vec<Item>> {
        let query = query.trim();
        let repository = read(&self.repository)?;
        if query.is_empty() {
            return Ok(repository.get_all_items());
        }
        let hits = repository.search_all(query);
        tracing::debug!("Catalog search \"{}\": {} hit(s)", query, hits.len());
        Ok(hits)
    }

    /// Items in a category, in listing order
    pub fn filter(&self, category: Category) -> AppResult<Vec<Item>> {
        let items = read(&self.repository)?
            .get_all_items()
            .into_iter()
            .filter(|item| match category {
                Category::All => true,
                Category::Kind(kind) => item.kind() == kind,
                Category::Available => item.is_available(),
                Category::Rented => !item.is_available(),
            })
            .collect();
        Ok(items)
    }
}
