//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use people_backend::Trace;
#[cfg(debug_assertions)]
use people_backend::doc::ApiDoc;
use people_backend::domain::ports::PersonRepository;
use people_backend::inbound::http::configure;
use people_backend::inbound::http::state::HttpState;
use people_backend::outbound::memory::InMemoryPersonRepository;
use people_backend::outbound::persistence::DieselPersonRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the person record store based on configuration.
///
/// Uses PostgreSQL when a pool is available and falls back to an in-memory
/// store otherwise. Records in the fallback store do not survive a restart.
fn build_person_repository(config: &ServerConfig) -> Arc<dyn PersonRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselPersonRepository::new(pool.clone())),
        None => {
            warn!("no database configured; person records are kept in memory");
            Arc::new(InMemoryPersonRepository::default())
        }
    }
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .wrap(NormalizePath::trim())
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the supplied configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let people = build_person_repository(&config);
    let http_state = web::Data::new(HttpState::new(people));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "people service listening");
    Ok(server)
}
