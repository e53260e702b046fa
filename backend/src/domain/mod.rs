//! Domain primitives and ports.
//!
//! Purpose: define the person record, the error payload shared by every
//! adapter, and the record store port. Nothing here depends on Actix or
//! Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: client-facing error payload and its stable code.
//! - Person / PersonDetails / PersonId: the managed record.
//! - TraceId: request correlation identifier.
//! - ports: the `PersonRepository` record store port.

pub mod error;
pub mod person;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::person::{Person, PersonDetails, PersonId};
pub use self::trace_id::TraceId;
