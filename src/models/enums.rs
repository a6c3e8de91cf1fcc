//! Shared domain enums: item kinds and list filters

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ---------------------------------------------------------------------------
// ItemKind
// ---------------------------------------------------------------------------

/// Closed set of catalog item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Book,
    Magazine,
    Dvd,
}

impl ItemKind {
    /// Label shown in the "type" column
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Book => "Книга",
            ItemKind::Magazine => "Журнал",
            ItemKind::Dvd => "DVD",
        }
    }

    /// Status label; the grammatical gender follows the kind noun
    pub fn status_label(&self, available: bool) -> &'static str {
        match (self, available) {
            (ItemKind::Book, true) => "Доступна",
            (ItemKind::Book, false) => "Орендована",
            (_, true) => "Доступний",
            (_, false) => "Орендований",
        }
    }
}

impl std::str::FromStr for ItemKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" | "b" | "книга" => Ok(ItemKind::Book),
            "magazine" | "m" | "журнал" => Ok(ItemKind::Magazine),
            "dvd" | "d" => Ok(ItemKind::Dvd),
            other => Err(AppError::Validation(format!("Unknown item kind: {}", other))),
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ItemKind::Book => "book",
            ItemKind::Magazine => "magazine",
            ItemKind::Dvd => "dvd",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// List filter offered by front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Kind(ItemKind),
    Available,
    Rented,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Усі",
            Category::Kind(ItemKind::Book) => "Книги",
            Category::Kind(ItemKind::Magazine) => "Журнали",
            Category::Kind(ItemKind::Dvd) => "DVD",
            Category::Available => "Доступні",
            Category::Rented => "Орендовані",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = AppError;

    /// Accepts English names as well as the Ukrainian filter labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "усі" => Ok(Category::All),
            "book" | "books" | "книги" => Ok(Category::Kind(ItemKind::Book)),
            "magazine" | "magazines" | "журнали" => Ok(Category::Kind(ItemKind::Magazine)),
            "dvd" | "dvds" => Ok(Category::Kind(ItemKind::Dvd)),
            "available" | "доступні" => Ok(Category::Available),
            "rented" | "орендовані" => Ok(Category::Rented),
            other => Err(AppError::Validation(format!("Unknown filter: {}", other))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::All => write!(f, "all"),
            Category::Kind(kind) => write!(f, "{}", kind),
            Category::Available => write!(f, "available"),
            Category::Rented => write!(f, "rented"),
        }
    }
}
