pub mod pet;

pub use pet::{PetDetail, PetSummary};
