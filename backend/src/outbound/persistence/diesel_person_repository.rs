//! PostgreSQL-backed `PersonRepository` implementation using Diesel.
//!
//! Every operation is a single statement. Updates and deletes use
//! `RETURNING`, so "row absent" and "row changed" are decided atomically by
//! the database rather than by a separate lookup.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonDetails, PersonId};

use super::models::{NewPersonRow, PersonChangeset, PersonRow};
use super::pool::{DbPool, PoolError};
use super::schema::people;

/// Diesel-backed implementation of the [`PersonRepository`] port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a repository drawing connections from `pool`.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PersonRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> PersonRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => PersonRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersonRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonRepositoryError::connection("database connection error")
        }
        _ => PersonRepositoryError::query("database error"),
    }
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn list_all(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PersonRow> = people::table
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PersonRow> = people::table
            .find(id)
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }

    async fn insert(&self, details: &PersonDetails) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: PersonRow = diesel::insert_into(people::table)
            .values(NewPersonRow::from(details))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Person::from(row))
    }

    async fn update_by_id(
        &self,
        id: PersonId,
        details: &PersonDetails,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PersonRow> = diesel::update(people::table.find(id))
            .set(PersonChangeset::from(details))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PersonRow> = diesel::delete(people::table.find(id))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }
}
