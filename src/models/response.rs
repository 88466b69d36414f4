use serde::Serialize;

use crate::models::point::Point;

/// One entry in a `/points` or `/ask` listing.
#[derive(Debug, Serialize)]
pub struct PointEntry {
    pub timestamp: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Serialize)]
pub struct Coordinates {
    pub id: i32,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Point> for PointEntry {
    fn from(point: &Point) -> Self {
        Self {
            timestamp: point.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            coordinates: Coordinates {
                id: point.id,
                lat: point.lat,
                lon: point.lon,
            },
        }
    }
}

pub fn to_entries(points: &[Point]) -> Vec<PointEntry> {
    points.iter().map(PointEntry::from).collect()
}

#[derive(Debug, Serialize)]
pub struct UtcDatetimeResponse {
    pub utc_datetime: String,
}

/// `/ask` answer for a question the model marked `invalid`. Still a 200;
/// echoing the prompt back is intentional introspection behavior.
#[derive(Debug, Serialize)]
pub struct InvalidRequestResponse {
    pub error: &'static str,
    pub question: String,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_point_entry_shape() {
        let point = Point {
            id: 7,
            lat: 41.8902,
            lon: 12.3456,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        };

        let json = serde_json::to_value(PointEntry::from(&point)).unwrap();
        assert_eq!(json["timestamp"], "2024-01-15T08:00:00");
        assert_eq!(json["coordinates"]["id"], 7);
        assert_eq!(json["coordinates"]["lat"], 41.8902);
        assert_eq!(json["coordinates"]["lon"], 12.3456);
    }

    #[test]
    fn test_invalid_request_envelope() {
        let envelope = InvalidRequestResponse {
            error: "invalid request",
            question: "what is the weather".to_string(),
            query: "prompt text".to_string(),
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["error"], "invalid request");
        assert_eq!(json["question"], "what is the weather");
        assert_eq!(json["query"], "prompt text");
    }
}
