//! API route definitions

use actix_web::web;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::models;

/// Configure lookup routes
pub fn config_lookup_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/json/{ip}", web::get().to(handlers::query_ip));
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(handlers::index, handlers::query_ip),
    components(schemas(models::LookupResponse)),
    tags(
        (name = "Lookup", description = "IP geolocation lookup endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_both_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/json/{ip}"));
        assert_eq!(doc.paths.paths.len(), 2);
    }
}
