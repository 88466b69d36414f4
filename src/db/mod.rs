use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub mod points;
pub mod queries;

pub type DbPool = Pool<Postgres>;

pub async fn init_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(50)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn init_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(queries::CREATE_POSTGIS_EXTENSION)
        .execute(pool)
        .await?;
    sqlx::query(queries::CREATE_POINTS_TABLE)
        .execute(pool)
        .await?;
    Ok(())
}
