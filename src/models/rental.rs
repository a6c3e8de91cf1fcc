//! Rental (checkout) record attached to a rented item

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Who holds an item and since when. Present exactly while the item is out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub rented_by: String,
    pub rent_date: NaiveDate,
}

impl Rental {
    /// Rental starting today (local calendar date)
    pub fn starting_today(rented_by: impl Into<String>) -> Self {
        Self::starting_on(rented_by, Local::now().date_naive())
    }

    pub fn starting_on(rented_by: impl Into<String>, rent_date: NaiveDate) -> Self {
        Self {
            rented_by: rented_by.into(),
            rent_date,
        }
    }
}
