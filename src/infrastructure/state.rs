//! Application state containing the repository and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::PetRepository;
use crate::infrastructure::SeaOrmPetRepository;
use crate::infrastructure::config::JsonFormat;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (kept for fixtures and administrative tasks)
    db: DatabaseConnection,
    /// Pet repository
    pub pets: Arc<dyn PetRepository>,
    /// Response body formatting mode
    pub json_format: JsonFormat,
}

impl AppState {
    /// Create a new AppState over a live database connection
    pub fn new(db: DatabaseConnection, json_format: JsonFormat) -> Self {
        let pets = Arc::new(SeaOrmPetRepository::new(db.clone()));

        Self {
            db,
            pets,
            json_format,
        }
    }

    /// Get the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
