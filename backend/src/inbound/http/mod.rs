//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod people;
pub mod sitemap;
pub mod state;
pub mod validation;

pub use error::ApiResult;

use actix_web::{HttpResponse, ResponseError, web};

use crate::domain::Error;

use self::people::{
    create_person, delete_person, get_person, invalid_method, list_people, update_person,
};
use self::sitemap::sitemap;
use self::validation::{json_body_error, path_error};

/// Fallback for paths no resource matches.
pub async fn route_not_found() -> HttpResponse {
    Error::not_found("Not Found").error_response()
}

/// Register the REST routes and extractor error handlers.
///
/// Every resource answers unrouted methods with a JSON 404, and paths outside
/// the route table get the same treatment. Callers supply
/// [`state::HttpState`] through `app_data`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use people_backend::inbound::http::{configure, state::HttpState};
/// use people_backend::outbound::memory::InMemoryPersonRepository;
///
/// let state = HttpState::new(Arc::new(InMemoryPersonRepository::default()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_body_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::resource("/")
                .route(web::get().to(sitemap))
                .default_service(web::to(invalid_method)),
        )
        .service(
            web::resource("/people")
                .route(web::get().to(list_people))
                .default_service(web::to(invalid_method)),
        )
        .service(
            web::resource("/person")
                .route(web::post().to(create_person))
                .default_service(web::to(invalid_method)),
        )
        .service(
            web::resource("/person/{id}")
                .route(web::get().to(get_person))
                .route(web::put().to(update_person))
                .route(web::delete().to(delete_person))
                .default_service(web::to(invalid_method)),
        )
        .default_service(web::to(route_not_found));
}
