use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A stored location fix. Geometry is kept in SRID 3857; lat/lon are
/// projected back out by the queries (ST_Y / ST_X).
#[derive(Debug, Clone, FromRow)]
pub struct Point {
    pub id: i32,
    pub lat: f64,
    pub lon: f64,
    pub timestamp: NaiveDateTime,
}
