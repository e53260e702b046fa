//! Port for person record persistence.
//!
//! Handlers depend on [`PersonRepository`] only, so the PostgreSQL adapter
//! and the in-memory store are interchangeable behind `Arc<dyn ...>`.

use async_trait::async_trait;

use crate::domain::{Person, PersonDetails, PersonId};

/// Errors raised by person repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonRepositoryError {
    /// Repository connection could not be established.
    #[error("person repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("person repository query failed: {message}")]
    Query { message: String },
}

impl PersonRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Record store for [`Person`] rows keyed by store-assigned identifiers.
///
/// A missing row is reported as `Ok(None)`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Return every stored person in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Person>, PersonRepositoryError>;

    /// Fetch a single person.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError>;

    /// Persist a new person and return it with its assigned identifier.
    async fn insert(&self, details: &PersonDetails) -> Result<Person, PersonRepositoryError>;

    /// Overwrite all descriptive fields of an existing person.
    ///
    /// Returns `None` without side effects when no row matches `id`.
    async fn update_by_id(
        &self,
        id: PersonId,
        details: &PersonDetails,
    ) -> Result<Option<Person>, PersonRepositoryError>;

    /// Remove a person, returning the row as it was before deletion.
    async fn delete_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PersonRepositoryError::connection("refused"), "connection failed: refused")]
    #[case(PersonRepositoryError::query("syntax"), "query failed: syntax")]
    fn errors_format_with_context(#[case] error: PersonRepositoryError, #[case] expected: &str) {
        assert!(error.to_string().contains(expected));
    }

    #[tokio::test]
    async fn mock_reports_absent_rows_as_none() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let found = repo.find_by_id(9).await.expect("lookup succeeds");
        assert!(found.is_none());
    }
}
