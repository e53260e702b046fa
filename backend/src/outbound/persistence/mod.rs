//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) stay private to this module.
//! - **Async-safe pooling**: connections come from a `bb8` pool through
//!   `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use people_backend::outbound::persistence::{DbPool, DieselPersonRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), people_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/people")).await?;
//! let repo = DieselPersonRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_person_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_person_repository::DieselPersonRepository;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
