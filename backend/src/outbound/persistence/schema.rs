//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Person records keyed by a serial identifier.
    people (id) {
        id -> Int4,
        full_name -> Text,
        email -> Text,
        address -> Text,
        phone -> Text,
    }
}
