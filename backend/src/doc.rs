//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP handler and the schemas they exchange. The
//! generated document backs Swagger UI in debug builds and the route listing
//! served at `GET /`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Person, PersonDetails};
use crate::inbound::http::people::{MessageResponse, PersonRequest};
use crate::inbound::http::sitemap::{RouteEntry, Sitemap};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People API",
        description = "Create, read, update and delete person records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::sitemap::sitemap,
        crate::inbound::http::people::list_people,
        crate::inbound::http::people::create_person,
        crate::inbound::http::people::get_person,
        crate::inbound::http::people::update_person,
        crate::inbound::http::people::delete_person,
    ),
    components(schemas(
        Person,
        PersonDetails,
        PersonRequest,
        MessageResponse,
        Error,
        ErrorCode,
        Sitemap,
        RouteEntry
    )),
    tags(
        (name = "people", description = "Person records"),
        (name = "sitemap", description = "Route discovery")
    )
)]
pub struct ApiDoc;
