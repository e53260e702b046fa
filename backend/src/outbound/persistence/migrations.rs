//! Embedded schema migrations.
//!
//! `diesel_migrations` drives a synchronous `PgConnection`, so callers on an
//! async runtime should invoke [`run_pending_migrations`] from a blocking
//! thread.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::pool::PoolError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply every migration not yet recorded in `__diesel_schema_migrations`.
///
/// Returns the number of migrations applied.
///
/// # Errors
///
/// Returns [`PoolError::Build`] when the database is unreachable or a
/// migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<usize, PoolError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| PoolError::build(format!("connect for migrations: {err}")))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| PoolError::build(format!("run migrations: {err}")))?;

    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}
