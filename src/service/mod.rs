pub mod geo_service;

pub use geo_service::{GeoDatabase, MaxmindDb};
