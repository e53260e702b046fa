//! Person records.
//!
//! A [`Person`] is the stored form: its `id` is assigned by the record store
//! on insert and never changes afterwards. [`PersonDetails`] carries the four
//! descriptive fields that callers supply on create and update.
//!
//! No format or uniqueness rules apply to any descriptive field; empty strings
//! are stored as given.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned person identifier.
pub type PersonId = i32;

/// The descriptive fields of a person, replaced together on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDetails {
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "12 St James's Square, London")]
    pub address: String,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
}

/// A stored person record.
///
/// Serialises as a flat object with `id` alongside the descriptive fields.
///
/// # Examples
/// ```
/// use people_backend::domain::{Person, PersonDetails};
///
/// let person = Person::from_details(
///     1,
///     PersonDetails {
///         full_name: "Ada Lovelace".into(),
///         email: "ada@example.com".into(),
///         address: "London".into(),
///         phone: "555-0100".into(),
///     },
/// );
/// let json = serde_json::to_value(&person).expect("serialise");
/// assert_eq!(json["id"], 1);
/// assert_eq!(json["full_name"], "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[schema(example = 1)]
    pub id: PersonId,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "12 St James's Square, London")]
    pub address: String,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
}

impl Person {
    /// Combine a store-assigned identifier with descriptive fields.
    #[must_use]
    pub fn from_details(id: PersonId, details: PersonDetails) -> Self {
        let PersonDetails {
            full_name,
            email,
            address,
            phone,
        } = details;
        Self {
            id,
            full_name,
            email,
            address,
            phone,
        }
    }

    /// Copy of the descriptive fields.
    #[must_use]
    pub fn details(&self) -> PersonDetails {
        PersonDetails {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
        }
    }
}
