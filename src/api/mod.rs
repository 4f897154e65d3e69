pub mod health;
pub mod pets;
pub mod respond;
pub mod welcome;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Directory welcome
        .route("/", get(welcome::welcome))
        // Pets
        .route("/pets/:id", get(pets::get_pet))
        .route("/species/:species", get(pets::list_by_species))
        // Health check
        .route("/health", get(health::health_check))
        .with_state(state)
}
