//! Data models for the catalog

pub mod enums;
pub mod item;
pub mod item_form;
pub mod rental;
pub mod stats;

// Re-export commonly used types
pub use enums::{Category, ItemKind};
pub use item::{Book, Catalogued, DisplayRow, Dvd, Item, ItemCore, Magazine, COLUMNS};
pub use item_form::ItemFields;
pub use rental::Rental;
pub use stats::{CatalogStats, KindCounts};
