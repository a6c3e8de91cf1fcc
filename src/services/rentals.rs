//! Rental (checkout / return) service

use crate::{
    error::{AppError, AppResult},
    models::{item::Item, rental::Rental},
};

use super::{write, SharedRepository};

#[derive(Clone)]
pub struct RentalsService {
    repository: SharedRepository,
}

impl RentalsService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Rent an item to a user as of today
    pub fn rent(&self, id: &str, user_name: &str) -> AppResult<Item> {
        self.rent_with(id, Rental::starting_today(user_name.trim()))
    }

    /// Rent an item with a prepared rental record
    pub fn rent_with(&self, id: &str, rental: Rental) -> AppResult<Item> {
        let id = id.trim();
        if rental.rented_by.trim().is_empty() {
            return Err(AppError::Validation("User name is required".to_string()));
        }

        let mut repository = write(&self.repository)?;
        let item = repository
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;

        let user = rental.rented_by.clone();
        if !item.start_rental(rental) {
            let holder = item.rented_by().unwrap_or_default().to_string();
            tracing::warn!("Rent refused: {} is already rented by {}", id, holder);
            return Err(AppError::not_available(format!(
                "Item {} is already rented by {}",
                id, holder
            )));
        }

        tracing::info!("Rent: {} to {}", id, user);
        repository
            .find_by_id(id)
            .ok_or_else(|| AppError::Internal(format!("Item {} vanished during rent", id)))
    }

    /// Return a rented item. Yields the rental that just ended.
    pub fn return_item(&self, id: &str) -> AppResult<Rental> {
        let id = id.trim();
        let mut repository = write(&self.repository)?;
        let item = repository
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;

        let rental = item
            .rental()
            .cloned()
            .ok_or_else(|| AppError::not_borrowed(format!("Item {} is not rented", id)))?;
        item.return_item();

        tracing::info!("Return: {} from {}", id, rental.rented_by);
        Ok(rental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::Catalogued;
    use crate::repository::seed;
    use crate::services::Services;
    use chrono::NaiveDate;

    #[test]
    fn test_rent_and_return() {
        let services = Services::new(seed::seeded());
        let item = services.rentals.rent("D002", "  Alice ").unwrap();
        assert_eq!(item.rented_by(), Some("Alice"));

        let rental = services.rentals.return_item("D002").unwrap();
        assert_eq!(rental.rented_by, "Alice");
        assert!(services.catalog.get_item("D002").unwrap().is_available());
    }

    #[test]
    fn test_rent_twice() {
        let services = Services::new(seed::seeded());
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        services
            .rentals
            .rent_with("B002", Rental::starting_on("Alice", date))
            .unwrap();

        let err = services.rentals.rent("B002", "Bob").unwrap_err();
        assert!(matches!(err, AppError::Conflict { ref message, .. } if message.contains("Alice")));

        let item = services.catalog.get_item("B002").unwrap();
        assert_eq!(item.rental(), Some(&Rental::starting_on("Alice", date)));
    }

    #[test]
    fn test_rent_requires_user() {
        let services = Services::new(seed::seeded());
        let err = services.rentals.rent("B001", "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(services.catalog.get_item("B001").unwrap().is_available());
    }

    #[test]
    fn test_unknown_and_unrented() {
        let services = Services::new(seed::seeded());
        assert!(matches!(services.rentals.rent("X1", "Alice"), Err(AppError::NotFound(_))));
        assert!(matches!(services.rentals.return_item("X1"), Err(AppError::NotFound(_))));
        assert!(matches!(
            services.rentals.return_item("M001"),
            Err(AppError::Conflict { .. })
        ));
    }
}
