use serde::Deserialize;

/// A location-history export file (`Records.json`).
#[derive(Debug, Deserialize)]
pub struct RecordsFile {
    pub locations: Vec<RawLocation>,
}

/// One raw fix from the export. Coordinates come scaled by 10^7 (the E7
/// integer convention of the export format); the timestamp stays a string
/// and is never parsed on the way in.
#[derive(Debug, Deserialize)]
pub struct RawLocation {
    #[serde(rename = "latitudeE7")]
    pub latitude_e7: i64,
    #[serde(rename = "longitudeE7")]
    pub longitude_e7: i64,
    pub timestamp: String,
}

impl RawLocation {
    pub fn latitude(&self) -> f64 {
        self.latitude_e7 as f64 / 1e7
    }

    pub fn longitude(&self) -> f64 {
        self.longitude_e7 as f64 / 1e7
    }
}
