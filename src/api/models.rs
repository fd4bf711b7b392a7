//! API data models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::GeoRecord;

/// Geolocation attributes for one looked-up IP address.
///
/// Field order is part of the response contract; serde emits keys in
/// declaration order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LookupResponse {
    /// IP address exactly as it appeared in the request path
    pub ip: String,

    /// ISO 3166-1 country code, empty when unknown
    pub country_code: String,

    /// English-language country name, empty when unknown
    pub country_name: String,

    /// IANA timezone identifier, empty when unknown
    pub time_zone: String,

    /// Decimal latitude, 0.0 when unknown
    pub latitude: f64,

    /// Decimal longitude, 0.0 when unknown
    pub longitude: f64,
}

impl LookupResponse {
    /// Build the wire record for one lookup, echoing the request's raw
    /// `ip` path segment rather than the parsed address.
    pub fn new(ip: String, record: &GeoRecord) -> Self {
        Self {
            ip,
            country_code: record.country_code.clone(),
            country_name: record.country_name_en().to_string(),
            time_zone: record.time_zone.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}
