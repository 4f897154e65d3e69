//! Domain layer: the lookup contract and its error type.
//!
//! Handlers talk to the store through these traits only; the SeaORM
//! implementation lives in the infrastructure layer.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
