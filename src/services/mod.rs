//! Business logic services

pub mod catalog;
pub mod rentals;
pub mod stats;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

/// The catalog shared by all services. One lock guards all three kind
/// collections, so every operation sees and leaves a consistent catalog.
pub type SharedRepository = Arc<RwLock<Repository>>;

pub(crate) fn read(repository: &SharedRepository) -> AppResult<RwLockReadGuard<'_, Repository>> {
    repository
        .read()
        .map_err(|_| AppError::Internal("Catalog lock poisoned".to_string()))
}

pub(crate) fn write(repository: &SharedRepository) -> AppResult<RwLockWriteGuard<'_, Repository>> {
    repository
        .write()
        .map_err(|_| AppError::Internal("Catalog lock poisoned".to_string()))
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub rentals: rentals::RentalsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        let repository: SharedRepository = Arc::new(RwLock::new(repository));
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
