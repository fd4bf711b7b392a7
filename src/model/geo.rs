use std::collections::BTreeMap;

/// Location data for one IP address as returned by the database.
///
/// Owned copy of the lookup result; the country name map is keyed by
/// language tag ("en", "ja", ...) the way the database stores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoRecord {
    pub country_code: String,
    pub country_names: BTreeMap<String, String>,
    pub time_zone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoRecord {
    /// English-language country name, empty when the database has none
    pub fn country_name_en(&self) -> &str {
        self.country_names
            .get("en")
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_name_en() {
        let mut record = GeoRecord::default();
        record
            .country_names
            .insert("en".to_string(), "Japan".to_string());
        record
            .country_names
            .insert("ja".to_string(), "日本".to_string());
        assert_eq!(record.country_name_en(), "Japan");
    }

    #[test]
    fn test_country_name_en_missing() {
        let mut record = GeoRecord::default();
        record
            .country_names
            .insert("de".to_string(), "Japan".to_string());
        assert_eq!(record.country_name_en(), "");
        assert_eq!(GeoRecord::default().country_name_en(), "");
    }
}
