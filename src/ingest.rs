//! Bulk loader for location-history exports.

use tracing::{info, warn};

use crate::db::{points, DbPool};
use crate::error::ApiError;
use crate::models::records::RecordsFile;

/// Load every record of the export at `path` into the points table.
///
/// The whole batch runs in one transaction: any failure (unreadable file,
/// malformed JSON, a record the database rejects) rolls back everything.
/// There is no per-record error isolation and no partial commit.
pub async fn load_records(pool: &DbPool, path: &str) -> Result<(), ApiError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::Ingest(format!("failed to read {}: {}", path, e)))?;
    let file: RecordsFile = serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Ingest(format!("failed to parse {}: {}", path, e)))?;

    let mut tx = pool.begin().await?;

    for record in &file.locations {
        let result = points::insert_point(
            &mut tx,
            record.longitude(),
            record.latitude(),
            &record.timestamp,
        )
        .await;

        if let Err(e) = result {
            warn!("Rolling back load after insert failure: {}", e);
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            return Err(e.into());
        }
    }

    tx.commit().await?;
    info!("Loaded {} location records from {}", file.locations.len(), path);

    Ok(())
}
