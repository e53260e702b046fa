//! In-process `PersonRepository` used when no database is configured.
//!
//! Rows live in a `BTreeMap`, so listing returns them in identifier order.
//! Identifiers start at 1 and are never reused, matching a PostgreSQL serial
//! column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{Person, PersonDetails, PersonId};

#[derive(Debug)]
struct Rows {
    next_id: PersonId,
    people: BTreeMap<PersonId, Person>,
}

/// Mutex-guarded in-memory record store.
///
/// # Examples
/// ```
/// use people_backend::domain::PersonDetails;
/// use people_backend::domain::ports::PersonRepository;
/// use people_backend::outbound::memory::InMemoryPersonRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryPersonRepository::default();
/// let details = PersonDetails {
///     full_name: "Ada Lovelace".into(),
///     email: "ada@example.com".into(),
///     address: "London".into(),
///     phone: "555-0100".into(),
/// };
/// let person = repo.insert(&details).await.expect("insert");
/// assert_eq!(person.id, 1);
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryPersonRepository {
    rows: Mutex<Rows>,
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Rows {
                next_id: 1,
                people: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryPersonRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Rows>, PersonRepositoryError> {
        self.rows
            .lock()
            .map_err(|_| PersonRepositoryError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn list_all(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(self.lock()?.people.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(self.lock()?.people.get(&id).cloned())
    }

    async fn insert(&self, details: &PersonDetails) -> Result<Person, PersonRepositoryError> {
        let mut rows = self.lock()?;
        let id = rows.next_id;
        rows.next_id = id
            .checked_add(1)
            .ok_or_else(|| PersonRepositoryError::query("person id sequence exhausted"))?;
        let person = Person::from_details(id, details.clone());
        rows.people.insert(id, person.clone());
        Ok(person)
    }

    async fn update_by_id(
        &self,
        id: PersonId,
        details: &PersonDetails,
    ) -> Result<Option<Person>, PersonRepositoryError> {
        let mut rows = self.lock()?;
        Ok(rows.people.get_mut(&id).map(|person| {
            *person = Person::from_details(id, details.clone());
            person.clone()
        }))
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(self.lock()?.people.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn details(name: &str) -> PersonDetails {
        PersonDetails {
            full_name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "1 Main Street".to_owned(),
            phone: "555-0100".to_owned(),
        }
    }

    #[fixture]
    fn repo() -> InMemoryPersonRepository {
        InMemoryPersonRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_increasing_ids(repo: InMemoryPersonRepository) {
        let first = repo.insert(&details("Ada")).await.expect("insert");
        let second = repo.insert(&details("Grace")).await.expect("insert");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list_all().await.expect("list").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryPersonRepository) {
        let first = repo.insert(&details("Ada")).await.expect("insert");
        repo.delete_by_id(first.id).await.expect("delete");

        let next = repo.insert(&details("Grace")).await.expect("insert");
        assert_eq!(next.id, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_all_fields(repo: InMemoryPersonRepository) {
        let person = repo.insert(&details("Ada")).await.expect("insert");
        let replacement = PersonDetails {
            full_name: "Ada King".to_owned(),
            email: String::new(),
            address: "Ockham Park".to_owned(),
            phone: String::new(),
        };

        let updated = repo
            .update_by_id(person.id, &replacement)
            .await
            .expect("update")
            .expect("row exists");

        assert_eq!(updated.id, person.id);
        assert_eq!(updated.details(), replacement);
        let stored = repo.find_by_id(person.id).await.expect("find");
        assert_eq!(stored, Some(updated));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_rows_are_reported_as_none(repo: InMemoryPersonRepository) {
        assert!(repo.find_by_id(99).await.expect("find").is_none());
        assert!(
            repo.update_by_id(99, &details("Nobody"))
                .await
                .expect("update")
                .is_none()
        );
        assert!(repo.delete_by_id(99).await.expect("delete").is_none());
        assert!(repo.list_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_returns_prior_state(repo: InMemoryPersonRepository) {
        let person = repo.insert(&details("Ada")).await.expect("insert");

        let deleted = repo.delete_by_id(person.id).await.expect("delete");

        assert_eq!(deleted, Some(person.clone()));
        assert!(repo.find_by_id(person.id).await.expect("find").is_none());
        assert!(repo.delete_by_id(person.id).await.expect("delete").is_none());
    }
}
