//! HTTP surface of the service.
//!
//! Two routes: a plain-text usage banner at `/` and the JSON lookup
//! endpoint at `/json/{ip}`.

mod handlers;
pub mod models;
mod routes;

use actix_web::web;

/// Initialize API routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(routes::config_lookup_routes);
}

/// Re-export ApiDoc for OpenAPI documentation
pub use routes::ApiDoc;
