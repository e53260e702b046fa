//! Machine-readable route listing served at `GET /`.
//!
//! The listing is derived from [`ApiDoc`] so it cannot drift from the routes
//! that are actually documented.

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::openapi::PathItem;
use utoipa::{OpenApi, ToSchema};

use crate::ApiDoc;

/// One documented route and the methods it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteEntry {
    #[schema(example = "/person/{id}")]
    pub path: String,
    pub methods: Vec<String>,
}

/// Response body for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Sitemap {
    pub routes: Vec<RouteEntry>,
}

fn methods_of(item: &PathItem) -> Vec<String> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter(|(_, present)| *present)
    .map(|(method, _)| method.to_owned())
    .collect()
}

/// Build the sitemap from the OpenAPI document, sorted by path.
pub fn build_sitemap() -> Sitemap {
    let doc = ApiDoc::openapi();
    let mut routes: Vec<RouteEntry> = doc
        .paths
        .paths
        .iter()
        .map(|(path, item)| RouteEntry {
            path: path.clone(),
            methods: methods_of(item),
        })
        .collect();
    routes.sort_by(|a, b| a.path.cmp(&b.path));
    Sitemap { routes }
}

/// List every documented route.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Route listing", body = Sitemap)),
    tags = ["sitemap"],
    operation_id = "sitemap"
)]
pub async fn sitemap() -> web::Json<Sitemap> {
    web::Json(build_sitemap())
}
