//! Catalog item model: books, magazines and DVDs.
//!
//! Every kind embeds an [`ItemCore`] with the shared fields and implements
//! [`Catalogued`], which carries the rent/return lifecycle, free-text matching
//! and table rendering. [`Item`] is the closed union handed across the
//! repository and service boundaries.

use serde::{Deserialize, Serialize};

use super::enums::ItemKind;
use super::rental::Rental;

/// Column headers matching [`Catalogued::display_row`]
pub const COLUMNS: [&str; 7] = ["ID", "Тип", "Назва", "Рік", "Додатково", "Статус", "Орендовано"];

/// Placeholder shown in the renter column of available items
pub const NO_RENTER: &str = "-";

/// One rendered table row, in [`COLUMNS`] order
pub type DisplayRow = [String; 7];

/// Fields shared by every item kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCore {
    pub id: String,
    pub title: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental: Option<Rental>,
}

impl ItemCore {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            rental: None,
        }
    }
}

/// Behaviour shared by all catalog entries
pub trait Catalogued {
    fn kind(&self) -> ItemKind;
    fn core(&self) -> &ItemCore;
    fn core_mut(&mut self) -> &mut ItemCore;

    /// Kind-specific text included in free-text search (author, publisher, director)
    fn search_field(&self) -> &str;

    /// Kind-specific description column
    fn details(&self) -> String;

    fn id(&self) -> &str {
        &self.core().id
    }

    fn title(&self) -> &str {
        &self.core().title
    }

    fn year(&self) -> i32 {
        self.core().year
    }

    fn is_available(&self) -> bool {
        self.core().rental.is_none()
    }

    fn rental(&self) -> Option<&Rental> {
        self.core().rental.as_ref()
    }

    fn rented_by(&self) -> Option<&str> {
        self.rental().map(|r| r.rented_by.as_str())
    }

    /// Rent the item to `user_name` as of today. Returns false, leaving the
    /// item untouched, when it is already rented.
    fn rent(&mut self, user_name: &str) -> bool {
        self.start_rental(Rental::starting_today(user_name))
    }

    /// Attach a prepared rental record if the item is available
    fn start_rental(&mut self, rental: Rental) -> bool {
        if !self.is_available() {
            return false;
        }
        self.core_mut().rental = Some(rental);
        true
    }

    /// Clear the rental. Returns false when the item was not rented.
    fn return_item(&mut self) -> bool {
        self.core_mut().rental.take().is_some()
    }

    /// Case-insensitive substring match on id, title and the kind-specific field
    fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        [self.id(), self.title(), self.search_field()]
            .iter()
            .any(|field| field.to_lowercase().contains(&q))
    }

    fn display_row(&self) -> DisplayRow {
        let kind = self.kind();
        [
            self.id().to_string(),
            kind.label().to_string(),
            self.title().to_string(),
            self.year().to_string(),
            self.details(),
            kind.status_label(self.is_available()).to_string(),
            self.rented_by().unwrap_or(NO_RENTER).to_string(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    pub core: ItemCore,
    pub author: String,
    pub pages: u32,
}

impl Book {
    pub fn new(id: &str, title: &str, year: i32, author: &str, pages: u32) -> Self {
        Self {
            core: ItemCore::new(id, title, year),
            author: author.to_string(),
            pages,
        }
    }
}

impl Catalogued for Book {
    fn kind(&self) -> ItemKind {
        ItemKind::Book
    }

    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn search_field(&self) -> &str {
        &self.author
    }

    fn details(&self) -> String {
        format!("Автор: {}, Сторінок: {}", self.author, self.pages)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    #[serde(flatten)]
    pub core: ItemCore,
    pub issue_number: u32,
    pub publisher: String,
}

impl Magazine {
    pub fn new(id: &str, title: &str, year: i32, issue_number: u32, publisher: &str) -> Self {
        Self {
            core: ItemCore::new(id, title, year),
            issue_number,
            publisher: publisher.to_string(),
        }
    }
}

impl Catalogued for Magazine {
    fn kind(&self) -> ItemKind {
        ItemKind::Magazine
    }

    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn search_field(&self) -> &str {
        &self.publisher
    }

    fn details(&self) -> String {
        format!("Випуск: {}, Видавець: {}", self.issue_number, self.publisher)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dvd {
    #[serde(flatten)]
    pub core: ItemCore,
    pub director: String,
    pub duration_minutes: u32,
}

impl Dvd {
    pub fn new(id: &str, title: &str, year: i32, director: &str, duration_minutes: u32) -> Self {
        Self {
            core: ItemCore::new(id, title, year),
            director: director.to_string(),
            duration_minutes,
        }
    }
}

impl Catalogued for Dvd {
    fn kind(&self) -> ItemKind {
        ItemKind::Dvd
    }

    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn search_field(&self) -> &str {
        &self.director
    }

    fn details(&self) -> String {
        format!("Режисер: {}, Тривалість: {} хв", self.director, self.duration_minutes)
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// Any catalog entry, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Book(Book),
    Magazine(Magazine),
    Dvd(Dvd),
}

impl Catalogued for Item {
    fn kind(&self) -> ItemKind {
        match self {
            Item::Book(_) => ItemKind::Book,
            Item::Magazine(_) => ItemKind::Magazine,
            Item::Dvd(_) => ItemKind::Dvd,
        }
    }

    fn core(&self) -> &ItemCore {
        match self {
            Item::Book(b) => &b.core,
            Item::Magazine(m) => &m.core,
            Item::Dvd(d) => &d.core,
        }
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        match self {
            Item::Book(b) => &mut b.core,
            Item::Magazine(m) => &mut m.core,
            Item::Dvd(d) => &mut d.core,
        }
    }

    fn search_field(&self) -> &str {
        match self {
            Item::Book(b) => b.search_field(),
            Item::Magazine(m) => m.search_field(),
            Item::Dvd(d) => d.search_field(),
        }
    }

    fn details(&self) -> String {
        match self {
            Item::Book(b) => b.details(),
            Item::Magazine(m) => m.details(),
            Item::Dvd(d) => d.details(),
        }
    }
}

impl From<Book> for Item {
    fn from(b: Book) -> Self {
        Item::Book(b)
    }
}

impl From<Magazine> for Item {
    fn from(m: Magazine) -> Self {
        Item::Magazine(m)
    }
}

impl From<Dvd> for Item {
    fn from(d: Dvd) -> Self {
        Item::Dvd(d)
    }
}
