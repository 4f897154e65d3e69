//! SeaORM implementation of PetRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::{DomainError, PetRepository};
use crate::models::pet::{self, Entity as PetEntity, PetDetail, PetSummary};

/// SeaORM-based implementation of PetRepository
pub struct SeaOrmPetRepository {
    db: DatabaseConnection,
}

impl SeaOrmPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for SeaOrmPetRepository {
    async fn find_all(&self) -> Result<Vec<PetDetail>, DomainError> {
        let pets = PetEntity::find().all(&self.db).await?;

        Ok(pets.into_iter().map(PetDetail::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PetDetail>, DomainError> {
        let pet = PetEntity::find_by_id(id).one(&self.db).await?;

        Ok(pet.map(PetDetail::from))
    }

    async fn find_by_species(&self, species: &str) -> Result<Vec<PetSummary>, DomainError> {
        // No ORDER BY: the listing follows the store's natural retrieval
        // order (rowid scan, since the schema carries no species index).
        let pets = PetEntity::find()
            .filter(pet::Column::Species.eq(species))
            .all(&self.db)
            .await?;

        Ok(pets.into_iter().map(PetSummary::from).collect())
    }
}
