use std::fmt;

/// Custom error type for geolocation lookups
#[derive(Debug)]
pub enum GeoError {
    /// Database file missing, unreadable or not a valid MaxMind database
    DatabaseOpen(String),
    /// Address has no entry in the database
    NotFound(String),
    /// Lookup failed on a malformed or undecodable record
    Lookup(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::DatabaseOpen(msg) => write!(f, "Database open error: {}", msg),
            GeoError::NotFound(msg) => write!(f, "Address not found: {}", msg),
            GeoError::Lookup(msg) => write!(f, "Lookup error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<maxminddb::MaxMindDBError> for GeoError {
    fn from(err: maxminddb::MaxMindDBError) -> Self {
        match err {
            maxminddb::MaxMindDBError::AddressNotFoundError(msg) => GeoError::NotFound(msg),
            other => GeoError::Lookup(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
