//! Person CRUD handlers.
//!
//! ```text
//! GET    /people
//! POST   /person        {"full_name":"Ada Lovelace","email":"ada@example.com","address":"London","phone":"555-0100"}
//! GET    /person/{id}
//! PUT    /person/{id}   (same body as POST)
//! DELETE /person/{id}
//! ```
//!
//! Create and update share one policy: the body must be a JSON object with
//! every field present as a string. Any lookup that finds no row answers 404.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, Person, PersonId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{person_details_from_body, person_not_found_error};

/// Documented request body for `POST /person` and `PUT /person/{id}`.
///
/// Handlers receive the raw JSON and validate it field by field, so a missing
/// or mistyped field is reported by name rather than as a parse failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PersonRequest {
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "12 St James's Square, London")]
    pub address: Option<String>,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: Option<String>,
}

/// Confirmation body returned by update and delete.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Ada Lovelace was successfully deleted")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// List every stored person.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All people", body = [Person]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
pub async fn list_people(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Person>>> {
    let people = state.people.list_all().await?;
    Ok(web::Json(people))
}

/// Create a person.
#[utoipa::path(
    post,
    path = "/person",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Created person", body = Person),
        (status = 400, description = "Missing body or field", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "createPerson"
)]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Person>> {
    let details = person_details_from_body(payload.into_inner())?;
    let person = state.people.insert(&details).await?;
    info!(person_id = person.id, "person created");
    Ok(web::Json(person))
}

/// Fetch a person by identifier.
#[utoipa::path(
    get,
    path = "/person/{id}",
    params(("id" = i32, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person", body = Person),
        (status = 404, description = "No such person", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "getPerson"
)]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<PersonId>,
) -> ApiResult<web::Json<Person>> {
    let id = path.into_inner();
    state
        .people
        .find_by_id(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| person_not_found_error(id))
}

/// Replace all descriptive fields of a person.
#[utoipa::path(
    put,
    path = "/person/{id}",
    params(("id" = i32, Path, description = "Person identifier")),
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Update confirmation", body = MessageResponse),
        (status = 400, description = "Missing body or field", body = Error),
        (status = 404, description = "No such person", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "updatePerson"
)]
pub async fn update_person(
    state: web::Data<HttpState>,
    path: web::Path<PersonId>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = path.into_inner();
    let details = person_details_from_body(payload.into_inner())?;
    let person = state
        .people
        .update_by_id(id, &details)
        .await?
        .ok_or_else(|| person_not_found_error(id))?;
    info!(person_id = id, "person updated");
    Ok(web::Json(MessageResponse::new(format!(
        "{} with id {id} was successfully updated",
        person.full_name
    ))))
}

/// Delete a person.
#[utoipa::path(
    delete,
    path = "/person/{id}",
    params(("id" = i32, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Delete confirmation", body = MessageResponse),
        (status = 404, description = "No such person", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["people"],
    operation_id = "deletePerson"
)]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<PersonId>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = path.into_inner();
    let person = state
        .people
        .delete_by_id(id)
        .await?
        .ok_or_else(|| person_not_found_error(id))?;
    info!(person_id = id, "person deleted");
    Ok(web::Json(MessageResponse::new(format!(
        "{} was successfully deleted",
        person.full_name
    ))))
}

/// Fallback for methods a resource does not route.
pub async fn invalid_method() -> HttpResponse {
    use actix_web::ResponseError;

    Error::not_found("Invalid Method").error_response()
}
