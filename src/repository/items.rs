//! Per-kind item repository.
//!
//! An ordered, in-memory collection of one item kind. Insertion order is the
//! listing order. Ids are not checked here; catalog-wide uniqueness is the
//! job of [`super::Repository`].

use crate::models::item::Catalogued;

#[derive(Debug, Clone)]
pub struct ItemsRepository<T> {
    items: Vec<T>,
}

impl<T> Default for ItemsRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Catalogued + Clone> ItemsRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the first item with this id. Returns whether one was found.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Snapshot of all items in insertion order
    pub fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Snapshot of the items matching `query`, in insertion order
    pub fn search(&self, query: &str) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| item.matches(query))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
