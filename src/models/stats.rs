//! Catalog statistics

use serde::Serialize;

/// Number of items of each kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub books: usize,
    pub magazines: usize,
    pub dvds: usize,
}

impl KindCounts {
    pub fn total(&self) -> usize {
        self.books + self.magazines + self.dvds
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub by_kind: KindCounts,
    pub rented: usize,
    pub available: usize,
    /// Publication year shared by the most items; `None` for an empty catalog
    pub most_common_year: Option<i32>,
    pub most_common_year_count: usize,
}

impl std::fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Статистика бібліотеки ===")?;
        writeln!(f, "Всього елементів: {}", self.total)?;
        writeln!(f, "Книги: {}", self.by_kind.books)?;
        writeln!(f, "Журнали: {}", self.by_kind.magazines)?;
        writeln!(f, "DVD: {}", self.by_kind.dvds)?;
        writeln!(f, "Орендовано: {}", self.rented)?;
        writeln!(f, "Доступно: {}", self.available)?;
        match self.most_common_year {
            Some(year) => writeln!(
                f,
                "Найпопулярніший рік: {} ({} елементів)",
                year, self.most_common_year_count
            ),
            None => writeln!(f, "Найпопулярніший рік: -"),
        }
    }
}
