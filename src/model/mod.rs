mod geo;

pub use geo::GeoRecord;
