//! Repository layer: the in-memory catalog.
//!
//! [`Repository`] owns one [`ItemsRepository`] per item kind and is the only
//! place catalog state is mutated. Lookups walk the kinds in a fixed order,
//! books then magazines then DVDs, and listings concatenate in that order.

pub mod items;
pub mod seed;

use crate::{
    error::{AppError, AppResult},
    models::{
        item::{Book, Catalogued, Dvd, Item, Magazine},
        stats::KindCounts,
    },
};

pub use items::ItemsRepository;

/// Main repository struct holding one collection per item kind
#[derive(Debug, Clone, Default)]
pub struct Repository {
    books: ItemsRepository<Book>,
    magazines: ItemsRepository<Magazine>,
    dvds: ItemsRepository<Dvd>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the collection of its kind.
    /// Fails if any kind already holds an item with the same id.
    pub fn add_item(&mut self, item: Item) -> AppResult<()> {
        if self.contains(item.id()) {
            return Err(AppError::duplicate(format!(
                "Item with id {} already exists",
                item.id()
            )));
        }
        match item {
            Item::Book(b) => self.books.add(b),
            Item::Magazine(m) => self.magazines.add(m),
            Item::Dvd(d) => self.dvds.add(d),
        }
        Ok(())
    }

    /// Remove the item with this id from whichever kind holds it.
    /// Rental state is not checked here.
    pub fn remove_item(&mut self, id: &str) -> bool {
        self.books.remove(id) || self.magazines.remove(id) || self.dvds.remove(id)
    }

    /// Snapshot of the item with this id
    pub fn find_by_id(&self, id: &str) -> Option<Item> {
        if let Some(b) = self.books.find_by_id(id) {
            return Some(b.clone().into());
        }
        if let Some(m) = self.magazines.find_by_id(id) {
            return Some(m.clone().into());
        }
        self.dvds.find_by_id(id).map(|d| d.clone().into())
    }

    /// Mutable access to the item with this id, whatever its kind.
    /// Services only touch rental state through it; ids stay as `add_item` checked them.
    pub(crate) fn find_by_id_mut(&mut self, id: &str) -> Option<&mut dyn Catalogued> {
        if let Some(b) = self.books.find_by_id_mut(id) {
            return Some(b as &mut dyn Catalogued);
        }
        if let Some(m) = self.magazines.find_by_id_mut(id) {
            return Some(m as &mut dyn Catalogued);
        }
        self.dvds.find_by_id_mut(id).map(|d| d as &mut dyn Catalogued)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.books.find_by_id(id).is_some()
            || self.magazines.find_by_id(id).is_some()
            || self.dvds.find_by_id(id).is_some()
    }

    /// Overwrite the stored item that has the same id and kind as `item`
    pub fn replace_item(&mut self, item: Item) -> AppResult<()> {
        let id = item.id().to_string();
        let replaced = match item {
            Item::Book(b) => self.books.find_by_id_mut(&id).map(|slot| *slot = b),
            Item::Magazine(m) => self.magazines.find_by_id_mut(&id).map(|slot| *slot = m),
            Item::Dvd(d) => self.dvds.find_by_id_mut(&id).map(|slot| *slot = d),
        };
        replaced.ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    /// Snapshot of every item: books, then magazines, then DVDs
    pub fn get_all_items(&self) -> Vec<Item> {
        let mut all = Vec::with_capacity(self.len());
        all.extend(self.books.get_all().into_iter().map(Item::from));
        all.extend(self.magazines.get_all().into_iter().map(Item::from));
        all.extend(self.dvds.get_all().into_iter().map(Item::from));
        all
    }

    /// Items matching `query` in each kind, concatenated in kind order
    pub fn search_all(&self, query: &str) -> Vec<Item> {
        let mut all = Vec::new();
        all.extend(self.books.search(query).into_iter().map(Item::from));
        all.extend(self.magazines.search(query).into_iter().map(Item::from));
        all.extend(self.dvds.search(query).into_iter().map(Item::from));
        all
    }

    pub fn counts(&self) -> KindCounts {
        KindCounts {
            books: self.books.len(),
            magazines: self.magazines.len(),
            dvds: self.dvds.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.counts().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_dispatch_by_kind() {
        let mut repo = Repository::new();
        repo.add_item(Dvd::new("D1", "Film", 2000, "Dir", 90).into()).unwrap();
        repo.add_item(Book::new("B1", "Novel", 2001, "Auth", 100).into()).unwrap();
        repo.add_item(Magazine::new("M1", "Mag", 2002, 1, "Pub").into()).unwrap();

        assert_eq!(repo.counts(), KindCounts { books: 1, magazines: 1, dvds: 1 });
        // listing order follows kinds, not insertion
        assert_eq!(ids(&repo.get_all_items()), vec!["B1", "M1", "D1"]);
    }

    #[test]
    fn test_duplicate_id_across_kinds() {
        let mut repo = Repository::new();
        repo.add_item(Book::new("X1", "Novel", 2001, "Auth", 100).into()).unwrap();

        let err = repo
            .add_item(Dvd::new("X1", "Film", 2000, "Dir", 90).into())
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(repo.len(), 1);
        assert!(repo.dvds.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut repo = seed::seeded();
        assert!(repo.remove_item("M002"));
        assert!(!repo.remove_item("M002"));
        assert_eq!(repo.len(), 6);
        assert!(repo.find_by_id("M002").is_none());
    }

    #[test]
    fn test_find_by_id_mut_reaches_every_kind() {
        let mut repo = seed::seeded();
        for id in ["B002", "M001", "D001"] {
            assert!(repo.find_by_id_mut(id).unwrap().rent("Alice"));
        }
        for id in ["B002", "M001", "D001"] {
            assert_eq!(repo.find_by_id(id).unwrap().rented_by(), Some("Alice"));
        }
        assert!(repo.find_by_id_mut("Z999").is_none());
    }

    #[test]
    fn test_replace_item() {
        let mut repo = seed::seeded();
        repo.replace_item(Book::new("B002", "Хрещений батько", 1969, "Маріо Пьюзо", 608).into())
            .unwrap();
        assert_eq!(repo.find_by_id("B002").unwrap().title(), "Хрещений батько");
        assert_eq!(ids(&repo.get_all_items())[1], "B002");

        let err = repo
            .replace_item(Book::new("B404", "Missing", 2000, "Nobody", 1).into())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_search_all_is_ordered_subset() {
        let repo = seed::seeded();
        let all = repo.get_all_items();
        let hits = repo.search_all("а");

        let mut cursor = all.iter();
        for hit in &hits {
            assert!(hit.matches("а"));
            assert!(cursor.any(|item| item == hit), "{} out of order", hit.id());
        }
    }
}
