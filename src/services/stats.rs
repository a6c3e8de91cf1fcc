//! Statistics service

use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::{
        item::{Catalogued, Item},
        stats::CatalogStats,
    },
};

use super::{read, SharedRepository};

#[derive(Clone)]
pub struct StatsService {
    repository: SharedRepository,
}

impl StatsService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Totals per kind and per rental state, plus the most common publication year
    pub fn statistics(&self) -> AppResult<CatalogStats> {
        let repository = read(&self.repository)?;
        let items = repository.get_all_items();
        let by_kind = repository.counts();
        drop(repository);

        let total = items.len();
        let rented = items.iter().filter(|i| !i.is_available()).count();
        let (most_common_year, most_common_year_count) = match most_common_year(&items) {
            Some((year, count)) => (Some(year), count),
            None => (None, 0),
        };

        Ok(CatalogStats {
            total,
            by_kind,
            rented,
            available: total - rented,
            most_common_year,
            most_common_year_count,
        })
    }
}

/// Year shared by the most items. Ties go to the year seen first in listing order.
fn most_common_year(items: &[Item]) -> Option<(i32, usize)> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for item in items {
        *counts.entry(item.year()).or_insert(0) += 1;
    }

    let mut best: Option<(i32, usize)> = None;
    for item in items {
        let count = counts[&item.year()];
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((item.year(), count));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::{Book, Dvd};
    use crate::models::stats::KindCounts;
    use crate::repository::{seed, Repository};
    use crate::services::Services;

    #[test]
    fn test_seed_statistics() {
        let services = Services::new(seed::seeded());
        let stats = services.stats.statistics().unwrap();
        assert_eq!(stats.total, 7);
        assert_eq!(stats.by_kind, KindCounts { books: 3, magazines: 2, dvds: 2 });
        assert_eq!(stats.rented, 0);
        assert_eq!(stats.available, 7);
        assert_eq!(stats.most_common_year, Some(2023));
        assert_eq!(stats.most_common_year_count, 2);
    }

    #[test]
    fn test_rented_counts() {
        let services = Services::new(seed::seeded());
        services.rentals.rent("B003", "Alice").unwrap();
        services.rentals.rent("M002", "Bob").unwrap();
        let stats = services.stats.statistics().unwrap();
        assert_eq!(stats.rented, 2);
        assert_eq!(stats.available, 5);
    }

    #[test]
    fn test_empty_catalog() {
        let services = Services::new(Repository::new());
        let stats = services.stats.statistics().unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.most_common_year, None);
        assert_eq!(stats.most_common_year_count, 0);
    }

    #[test]
    fn test_year_tie_prefers_listing_order() {
        let items: Vec<Item> = vec![
            Book::new("B1", "a", 1990, "x", 1).into(),
            Book::new("B2", "b", 2000, "x", 1).into(),
            Dvd::new("D1", "c", 2000, "x", 1).into(),
            Dvd::new("D2", "d", 1990, "x", 1).into(),
        ];
        assert_eq!(most_common_year(&items), Some((1990, 2)));
    }

    #[test]
    fn test_report_text() {
        let services = Services::new(seed::seeded());
        let report = services.stats.statistics().unwrap().to_string();
        assert!(report.starts_with("=== Статистика бібліотеки ===\n"));
        assert!(report.contains("Всього елементів: 7\n"));
        assert!(report.contains("Найпопулярніший рік: 2023 (2 елементів)\n"));
    }
}
