use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::respond::FormattedJson;
use crate::infrastructure::AppState;

/// Fixed greeting served from the directory root.
#[derive(Serialize, ToSchema)]
pub struct WelcomeMessage {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Directory welcome message", body = WelcomeMessage)
    )
)]
pub async fn welcome(State(state): State<AppState>) -> impl IntoResponse {
    FormattedJson::new(
        state.json_format,
        WelcomeMessage {
            message: "Welcome to the pet directory!".to_owned(),
        },
    )
}
