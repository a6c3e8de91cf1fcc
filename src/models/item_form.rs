//! Raw item input as typed by a user, and its conversion into an [`Item`].
//!
//! Add and edit share this path: [`ItemFields::build`] creates a new item and
//! [`ItemFields::update`] rebuilds an existing one, keeping its kind, id and
//! rental.

use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::enums::ItemKind;
use super::item::{Book, Catalogued, Dvd, Item, ItemCore, Magazine};

/// Editable fields of an item. `field1`/`field2` are interpreted per kind:
/// book (author, pages), magazine (issue number, publisher),
/// DVD (director, duration in minutes).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ItemFields {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub year: String,
    pub field1: String,
    pub field2: String,
}

impl ItemFields {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        field1: impl Into<String>,
        field2: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            field1: field1.into(),
            field2: field2.into(),
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            year: self.year.trim().to_string(),
            field1: self.field1.trim().to_string(),
            field2: self.field2.trim().to_string(),
        }
    }

    /// Validate and build a fresh, available item
    pub fn build(&self, kind: ItemKind, id: &str) -> AppResult<Item> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::Validation("ID is required".to_string()));
        }

        let fields = self.trimmed();
        fields.validate()?;

        let year: i32 = parse_number(&fields.year, "Year")?;
        let core = ItemCore::new(id, fields.title, year);

        let item = match kind {
            ItemKind::Book => Item::Book(Book {
                core,
                author: fields.field1,
                pages: parse_number(&fields.field2, "Pages")?,
            }),
            ItemKind::Magazine => Item::Magazine(Magazine {
                core,
                issue_number: parse_number(&fields.field1, "Issue number")?,
                publisher: fields.field2,
            }),
            ItemKind::Dvd => Item::Dvd(Dvd {
                core,
                director: fields.field1,
                duration_minutes: parse_number(&fields.field2, "Duration")?,
            }),
        };
        Ok(item)
    }

    /// Rebuild `existing` from these fields. Kind, id and rental are kept.
    pub fn update(&self, existing: &Item) -> AppResult<Item> {
        let mut item = self.build(existing.kind(), existing.id())?;
        item.core_mut().rental = existing.rental().cloned();
        Ok(item)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> AppResult<T> {
    value
        .parse::<T>()
        .map_err(|_| AppError::Validation(format!("{} must be a whole number, got '{}'", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rental::Rental;

    #[test]
    fn test_build_book() {
        let fields = ItemFields::new(" Кобзар ", "1840", "Т. Шевченко", " 114 ");
        let item = fields.build(ItemKind::Book, " B010 ").unwrap();
        match item {
            Item::Book(book) => {
                assert_eq!(book.core.id, "B010");
                assert_eq!(book.core.title, "Кобзар");
                assert_eq!(book.core.year, 1840);
                assert_eq!(book.author, "Т. Шевченко");
                assert_eq!(book.pages, 114);
                assert!(book.core.rental.is_none());
            }
            other => panic!("expected a book, got {:?}", other),
        }
    }

    #[test]
    fn test_field_order_per_kind() {
        let magazine = ItemFields::new("Vogue", "2020", "12", "Condé Nast")
            .build(ItemKind::Magazine, "M010")
            .unwrap();
        assert!(matches!(magazine, Item::Magazine(ref m) if m.issue_number == 12 && m.publisher == "Condé Nast"));

        let dvd = ItemFields::new("Дюна", "2021", "Дені Вільнев", "155")
            .build(ItemKind::Dvd, "D010")
            .unwrap();
        assert!(matches!(dvd, Item::Dvd(ref d) if d.director == "Дені Вільнев" && d.duration_minutes == 155));
    }

    #[test]
    fn test_required_fields() {
        let fields = ItemFields::new("Title", "2000", "Author", "10");
        let err = fields.build(ItemKind::Book, "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "ID is required"));

        let fields = ItemFields::new("  ", "2000", "Author", "10");
        let err = fields.build(ItemKind::Book, "B010").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Title is required"));
    }

    #[test]
    fn test_non_numeric_fields() {
        let err = ItemFields::new("T", "twenty", "A", "10")
            .build(ItemKind::Book, "B010")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.starts_with("Year")));

        let err = ItemFields::new("T", "2000", "A", "-5")
            .build(ItemKind::Book, "B010")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.starts_with("Pages")));

        let err = ItemFields::new("T", "2000", "x", "P")
            .build(ItemKind::Magazine, "M010")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.starts_with("Issue number")));

        let err = ItemFields::new("T", "2000", "D", "long")
            .build(ItemKind::Dvd, "D010")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.starts_with("Duration")));
    }

    #[test]
    fn test_update_keeps_identity_and_rental() {
        let mut existing: Item = Book::new("B001", "Old", 2000, "Someone", 100).into();
        existing.start_rental(Rental::starting_today("Alice"));

        let updated = ItemFields::new("New", "2001", "Another", "200")
            .update(&existing)
            .unwrap();
        assert_eq!(updated.id(), "B001");
        assert_eq!(updated.kind(), ItemKind::Book);
        assert_eq!(updated.title(), "New");
        assert_eq!(updated.rented_by(), Some("Alice"));
    }
}
