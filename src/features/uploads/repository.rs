use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::uploads::models::{MediaRecord, NewMediaRecord};

/// Narrow seam over the metadata store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record and return the stored row with its generated id.
    async fn insert(&self, record: NewMediaRecord) -> Result<MediaRecord>;
}

/// Postgres-backed record store.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, record: NewMediaRecord) -> Result<MediaRecord> {
        let row = sqlx::query_as::<_, MediaRecord>(
            r#"
            INSERT INTO media_records (filename, is_mask, storage_url, uploaded_at, image_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, filename, is_mask, storage_url, uploaded_at, image_id
            "#,
        )
        .bind(&record.filename)
        .bind(record.is_mask)
        .bind(&record.storage_url)
        .bind(record.uploaded_at)
        .bind(record.image_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
