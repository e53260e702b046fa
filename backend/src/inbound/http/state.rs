//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the record
//! store port, so tests can swap in the in-memory store or a mock.

use std::sync::Arc;

use crate::domain::ports::PersonRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub people: Arc<dyn PersonRepository>,
}

impl HttpState {
    /// Wrap a record store for injection into the Actix app.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use people_backend::inbound::http::state::HttpState;
    /// use people_backend::outbound::memory::InMemoryPersonRepository;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryPersonRepository::default()));
    /// let _people = state.people.clone();
    /// ```
    pub fn new(people: Arc<dyn PersonRepository>) -> Self {
        Self { people }
    }
}
