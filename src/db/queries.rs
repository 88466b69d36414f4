//! SQL for the points table. All geometry lives in SRID 3857 (Web Mercator);
//! distance comparisons are planar, in projection units.

pub const CREATE_POSTGIS_EXTENSION: &str = r#"
CREATE EXTENSION IF NOT EXISTS postgis;
"#;

pub const CREATE_POINTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS points (
    id SERIAL PRIMARY KEY,
    coordinates geometry(Point, 3857),
    "timestamp" TIMESTAMP
);
"#;

// The timestamp is bound as raw text and cast by the database, so a malformed
// value fails the insert (and the surrounding transaction) instead of being
// validated application-side.
pub const INSERT_POINT: &str = r#"
INSERT INTO points (coordinates, "timestamp")
VALUES (ST_SetSRID(ST_MakePoint($1, $2), 3857), $3::timestamp)
RETURNING id;
"#;

// One row per calendar day of the stored timestamp, the row with the minimum
// timestamp; ties on identical timestamps break toward the lowest id.
pub const SELECT_EARLIEST_PER_DAY: &str = r#"
SELECT DISTINCT ON ("timestamp"::date)
    id,
    ST_Y(coordinates) AS lat,
    ST_X(coordinates) AS lon,
    "timestamp"
FROM points
ORDER BY "timestamp"::date, "timestamp", id;
"#;

pub const SELECT_EARLIEST_PER_DAY_WITHIN: &str = r#"
SELECT DISTINCT ON ("timestamp"::date)
    id,
    ST_Y(coordinates) AS lat,
    ST_X(coordinates) AS lon,
    "timestamp"
FROM points
WHERE ST_Distance(coordinates, ST_SetSRID(ST_MakePoint($1, $2), 3857)) <= $3
ORDER BY "timestamp"::date, "timestamp", id;
"#;

pub const SELECT_POINTS_ON_DAY: &str = r#"
SELECT
    id,
    ST_Y(coordinates) AS lat,
    ST_X(coordinates) AS lon,
    "timestamp"
FROM points
WHERE "timestamp"::date = $1
ORDER BY id;
"#;
