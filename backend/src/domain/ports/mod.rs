//! Domain ports for the hexagonal boundary.

mod person_repository;

#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::{PersonRepository, PersonRepositoryError};
