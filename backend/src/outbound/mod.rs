//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local store used without a database and in tests
//!
//! Adapters translate between domain types and storage representations and
//! contain no request handling logic.

pub mod memory;
pub mod persistence;
