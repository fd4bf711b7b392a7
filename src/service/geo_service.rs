//! Read-only geolocation lookups against a MaxMind database file.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::geoip2;
use tracing::debug;

use crate::error::{GeoError, Result};
use crate::model::GeoRecord;

/// Read-only IP-to-location lookup source.
///
/// Implementations hold no mutable state after construction, so one
/// handle is shared across all request handlers without locking.
pub trait GeoDatabase: Send + Sync {
    /// Map an IP address to a location record, or fail with
    /// `GeoError::NotFound` when the database has no entry for it.
    fn lookup(&self, addr: IpAddr) -> Result<GeoRecord>;
}

/// `GeoDatabase` backed by an mmap'd GeoLite2-City file.
#[derive(Debug)]
pub struct MaxmindDb {
    reader: maxminddb::Reader<maxminddb::Mmap>,
}

impl MaxmindDb {
    /// Open a `.mmdb` file for read-only lookups.
    ///
    /// Fails if the file is missing, unreadable or not a valid MaxMind
    /// database. The mapping is released when the value is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = maxminddb::Reader::open_mmap(&path)
            .map_err(|e| GeoError::DatabaseOpen(e.to_string()))?;
        Ok(Self { reader })
    }
}

impl GeoDatabase for MaxmindDb {
    fn lookup(&self, addr: IpAddr) -> Result<GeoRecord> {
        let city = self.reader.lookup::<geoip2::City>(addr)?;
        debug!("database hit for {}", addr);

        let mut record = GeoRecord::default();
        if let Some(country) = city.country {
            record.country_code = country.iso_code.unwrap_or("").to_string();
            if let Some(names) = country.names {
                record.country_names = names
                    .iter()
                    .map(|(lang, name)| (lang.to_string(), name.to_string()))
                    .collect();
            }
        }
        if let Some(location) = city.location {
            record.time_zone = location.time_zone.unwrap_or("").to_string();
            record.latitude = location.latitude.unwrap_or(0.0);
            record.longitude = location.longitude.unwrap_or(0.0);
        }

        Ok(record)
    }
}
