use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub species: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Public projection of a pet row, returned by the fetch-by-id route.
///
/// Exposes only the public fields; the bookkeeping columns
/// (`created_at`, `updated_at`) never reach the wire. Field order here
/// is the JSON key order.
#[derive(Debug, Serialize, ToSchema)]
pub struct PetDetail {
    pub id: i32,
    pub name: String,
    pub species: String,
}

impl From<Model> for PetDetail {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            species: model.species,
        }
    }
}

/// List entry for the species route.
///
/// Omits `species`: every entry in a species listing shares the filtered
/// value, so repeating it per entry would be noise.
#[derive(Debug, Serialize, ToSchema)]
pub struct PetSummary {
    pub id: i32,
    pub name: String,
}

impl From<Model> for PetSummary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
