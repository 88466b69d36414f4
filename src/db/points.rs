use chrono::NaiveDate;
use sqlx::Postgres;

use crate::db::{queries, DbPool};
use crate::models::point::Point;

/// Radius for "near a place" lookups, in SRID 3857 projection units.
///
/// This is a fixed-radius planar approximation inherited from the source
/// design (roughly "same place" at city scale), not a geodesic distance.
pub const NEARBY_RADIUS: f64 = 0.1;

/// Insert one point inside an open transaction. The timestamp is passed
/// through as raw text; the database performs the cast.
pub async fn insert_point(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    lon: f64,
    lat: f64,
    raw_timestamp: &str,
) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as(queries::INSERT_POINT)
        .bind(lon)
        .bind(lat)
        .bind(raw_timestamp)
        .fetch_one(&mut **tx)
        .await?;
    Ok(id)
}

/// The earliest point of every calendar day, ordered by day.
pub async fn earliest_per_day(pool: &DbPool) -> Result<Vec<Point>, sqlx::Error> {
    sqlx::query_as(queries::SELECT_EARLIEST_PER_DAY)
        .fetch_all(pool)
        .await
}

/// The earliest point of every calendar day, restricted to points within
/// [`NEARBY_RADIUS`] of the given center.
pub async fn earliest_per_day_within(
    pool: &DbPool,
    lon: f64,
    lat: f64,
) -> Result<Vec<Point>, sqlx::Error> {
    sqlx::query_as(queries::SELECT_EARLIEST_PER_DAY_WITHIN)
        .bind(lon)
        .bind(lat)
        .bind(NEARBY_RADIUS)
        .fetch_all(pool)
        .await
}

/// Every point whose timestamp falls on the given day, ordered by id.
pub async fn points_on_day(pool: &DbPool, day: NaiveDate) -> Result<Vec<Point>, sqlx::Error> {
    sqlx::query_as(queries::SELECT_POINTS_ON_DAY)
        .bind(day)
        .fetch_all(pool)
        .await
}
