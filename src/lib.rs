//! Library catalog
//!
//! An in-memory catalog of books, magazines and DVDs with rentals, free-text
//! search, filtering and statistics. Front ends drive it through
//! [`services::Services`]; a terminal front end lives in [`cli`].

use std::sync::Arc;

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared by front ends
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: services::Services,
}

impl AppState {
    /// Build the catalog described by `config`
    pub fn new(config: AppConfig) -> Self {
        let repository = if config.catalog.seed {
            repository::seed::seeded()
        } else {
            repository::Repository::new()
        };
        tracing::info!("Catalog ready with {} item(s)", repository.len());

        Self {
            config: Arc::new(config),
            services: services::Services::new(repository),
        }
    }
}
