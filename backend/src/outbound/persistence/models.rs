//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! to domain types before returning.

use diesel::prelude::*;

use crate::domain::{Person, PersonDetails};

use super::schema::people;

/// Row read from the `people` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            address: row.address,
            phone: row.phone,
        }
    }
}

/// Insertable values for a new row; `id` comes from the serial sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = people)]
pub(crate) struct NewPersonRow<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
}

/// Changeset replacing every descriptive column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = people)]
pub(crate) struct PersonChangeset<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a PersonDetails> for NewPersonRow<'a> {
    fn from(details: &'a PersonDetails) -> Self {
        Self {
            full_name: &details.full_name,
            email: &details.email,
            address: &details.address,
            phone: &details.phone,
        }
    }
}

impl<'a> From<&'a PersonDetails> for PersonChangeset<'a> {
    fn from(details: &'a PersonDetails) -> Self {
        Self {
            full_name: &details.full_name,
            email: &details.email,
            address: &details.address,
            phone: &details.phone,
        }
    }
}
