//! Shared validation helpers for inbound HTTP adapters.
//!
//! Person bodies are extracted as raw JSON and checked here, so each failure
//! gets its own message: a body that is absent, unparseable or not an object;
//! a required field that is missing or `null`; and a field that is present
//! but not a string.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError};
use serde_json::{Map, Value, json};

use crate::domain::{Error, PersonDetails};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidType,
    MissingBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::MissingBody => "missing_body",
        }
    }
}

/// Required person fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PersonField {
    FullName,
    Email,
    Address,
    Phone,
}

impl PersonField {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Phone => "phone",
        }
    }
}

pub(crate) fn missing_field_error(field: PersonField) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("You need to specify the {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_type_error(field: PersonField) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("You need to specify the {field} as a string")).with_details(
        json!({
            "field": field,
            "code": ValidationCode::InvalidType.as_str(),
        }),
    )
}

pub(crate) fn missing_body_error() -> Error {
    Error::invalid_request("You need to specify the request body as a json object")
        .with_details(json!({ "code": ValidationCode::MissingBody.as_str() }))
}

pub(crate) fn person_not_found_error(id: impl std::fmt::Display) -> Error {
    Error::not_found(format!("Person with id {id} does not exist"))
}

fn take_string(fields: &mut Map<String, Value>, field: PersonField) -> Result<String, Error> {
    match fields.remove(field.as_str()) {
        None | Some(Value::Null) => Err(missing_field_error(field)),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(invalid_type_error(field)),
    }
}

/// Require a JSON object carrying every descriptive field as a string,
/// reporting the first field that fails. Unknown keys are ignored.
pub(crate) fn person_details_from_body(body: Value) -> Result<PersonDetails, Error> {
    let Value::Object(mut fields) = body else {
        return Err(missing_body_error());
    };
    let full_name = take_string(&mut fields, PersonField::FullName)?;
    let email = take_string(&mut fields, PersonField::Email)?;
    let address = take_string(&mut fields, PersonField::Address)?;
    let phone = take_string(&mut fields, PersonField::Phone)?;
    Ok(PersonDetails {
        full_name,
        email,
        address,
        phone,
    })
}

/// `JsonConfig` error handler: absent or unparseable bodies.
///
/// Bodies that parse but have the wrong shape reach
/// [`person_details_from_body`] instead.
#[allow(
    clippy::needless_pass_by_value,
    reason = "signature required by JsonConfig::error_handler"
)]
pub(crate) fn json_body_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected request body");
    missing_body_error().into()
}

/// `PathConfig` error handler: a `{id}` segment that is not an integer.
#[allow(
    clippy::needless_pass_by_value,
    reason = "signature required by PathConfig::error_handler"
)]
pub(crate) fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected path parameters");
    let raw = req.match_info().get("id").unwrap_or_default();
    person_not_found_error(raw).into()
}
