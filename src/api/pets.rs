//! Pet lookup handlers using the repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::api::respond::FormattedJson;
use crate::infrastructure::AppState;
use crate::models::{PetDetail, PetSummary};

/// Body of a failed single-pet lookup.
#[derive(Serialize, ToSchema)]
pub struct NotFoundMessage {
    pub message: String,
}

/// Body of the species listing route. `count` always equals `pets.len()`.
#[derive(Serialize, ToSchema)]
pub struct SpeciesListing {
    pub count: usize,
    pub pets: Vec<PetSummary>,
}

// Fetch a single pet by identifier
#[utoipa::path(
    get,
    path = "/pets/{id}",
    params(("id" = i32, Path, description = "Pet identifier")),
    responses(
        (status = 200, description = "Pet found", body = PetDetail),
        (status = 404, description = "No pet with this identifier", body = NotFoundMessage)
    )
)]
pub async fn get_pet(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.pets.find_by_id(id).await {
        Ok(Some(pet)) => {
            (StatusCode::OK, FormattedJson::new(state.json_format, pet)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            FormattedJson::new(
                state.json_format,
                NotFoundMessage {
                    message: format!("Pet {} not found.", id),
                },
            ),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

// List every pet of one species (exact, case-sensitive match)
#[utoipa::path(
    get,
    path = "/species/{species}",
    params(("species" = String, Path, description = "Species label, matched exactly")),
    responses(
        (status = 200, description = "Pets of the requested species, possibly none", body = SpeciesListing)
    )
)]
pub async fn list_by_species(
    State(state): State<AppState>,
    Path(species): Path<String>,
) -> impl IntoResponse {
    match state.pets.find_by_species(&species).await {
        // An empty listing is a successful result, not a 404.
        Ok(pets) => FormattedJson::new(
            state.json_format,
            SpeciesListing {
                count: pets.len(),
                pets,
            },
        )
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}
