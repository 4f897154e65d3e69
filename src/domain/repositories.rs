//! Repository trait definitions
//!
//! The persistence collaborator exposes exactly three read operations:
//! all records, one record by identifier, records by species. Empty
//! results are ordinary values here, never errors.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{PetDetail, PetSummary};

/// Read-only access to the pet store.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// All pets in the directory, in store order.
    async fn find_all(&self) -> Result<Vec<PetDetail>, DomainError>;

    /// The unique pet with this identifier, if present.
    async fn find_by_id(&self, id: i32) -> Result<Option<PetDetail>, DomainError>;

    /// Every pet whose species matches exactly (case-sensitive), in
    /// store order.
    async fn find_by_species(&self, species: &str) -> Result<Vec<PetSummary>, DomainError>;
}
