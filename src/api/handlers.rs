//! API request handlers
//!
//! The lookup handler recovers from every per-request failure: bad
//! addresses and missing database entries become the fixed 404 body,
//! and an encoding failure becomes a 500 instead of taking the
//! process down with it.

use std::net::IpAddr;

use actix_web::{web, HttpResponse, Responder};
use tracing::{debug, error};

use crate::api::models::LookupResponse;
use crate::service::GeoDatabase;

const USAGE: &str = "Usage: curl localhost:8888/json/1.2.3.4\n\nGeoLite2-City.mmdb is from https://github.com/P3TERX/GeoLite.mmdb/raw/download/GeoLite2-City.mmdb!\n\n";

const NOT_FOUND_BODY: &str = "404 page not found";

/// Plain-text usage banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Usage banner", body = String)
    ),
    tag = "Lookup"
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(USAGE)
}

/// Look up one IP address and return its geolocation attributes
#[utoipa::path(
    get,
    path = "/json/{ip}",
    params(
        ("ip" = String, Path, description = "IPv4 or IPv6 address")
    ),
    responses(
        (status = 200, description = "Lookup succeeded", body = LookupResponse),
        (status = 404, description = "Address invalid or not in the database"),
        (status = 500, description = "Response encoding failed")
    ),
    tag = "Lookup"
)]
pub async fn query_ip(
    db: web::Data<dyn GeoDatabase>,
    ip: web::Path<String>,
) -> impl Responder {
    let raw = ip.into_inner();

    let addr: IpAddr = match raw.parse() {
        Ok(addr) => addr,
        Err(_) => {
            debug!("rejected unparseable address {:?}", raw);
            return not_found();
        }
    };

    let record = match db.lookup(addr) {
        Ok(record) => record,
        Err(e) => {
            debug!("lookup failed for {}: {}", addr, e);
            return not_found();
        }
    };

    // Echo the raw path segment, never the parsed/normalized address.
    let body = LookupResponse::new(raw, &record);
    match serde_json::to_string(&body) {
        Ok(json) => HttpResponse::Ok()
            .content_type("application/json")
            .body(json),
        Err(e) => {
            error!("failed to encode response for {}: {}", body.ip, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body(NOT_FOUND_BODY)
}
