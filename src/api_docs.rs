use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::welcome::welcome,
        api::pets::get_pet,
        api::pets::list_by_species,
        api::health::health_check,
    ),
    components(
        schemas(
            crate::models::pet::PetDetail,
            crate::models::pet::PetSummary,
            api::welcome::WelcomeMessage,
            api::pets::NotFoundMessage,
            api::pets::SpeciesListing,
        )
    ),
    tags(
        (name = "pet-directory", description = "Pet directory API")
    )
)]
pub struct ApiDoc;
