//! Startup catalog contents

use crate::models::item::{Book, Dvd, Item, Magazine};

use super::Repository;

/// The seven items a fresh catalog starts with
pub fn seed_items() -> Vec<Item> {
    vec![
        Book::new("B001", "Дім у волошковому морі", 2023, "Т. Дж. Клюн", 400).into(),
        Book::new("B002", "Крёстный отец»", 1969, "Марио Пьюзо", 608).into(),
        Book::new("B003", "Гаррі Поттер", 1997, "Дж. Роулінг", 350).into(),
        Magazine::new("M001", "National Geographic", 2023, 145, "NG Society").into(),
        Magazine::new("M002", "Forbes Україна", 2024, 88, "Forbes Media").into(),
        Dvd::new("D001", "Матриця", 1999, "Вачовскі", 136).into(),
        Dvd::new("D002", "Інтерстеллар", 2014, "Крістофер Нолан", 169).into(),
    ]
}

/// Repository holding the seed items
pub fn seeded() -> Repository {
    let mut repository = Repository::new();
    for item in seed_items() {
        if let Err(e) = repository.add_item(item) {
            tracing::warn!("Seed item skipped: {}", e);
        }
    }
    repository
}
