//! Repository implementations using SeaORM

pub mod pet_repository;

pub use pet_repository::SeaOrmPetRepository;
