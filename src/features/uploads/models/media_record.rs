use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for uploaded media metadata.
///
/// One table holds both record kinds: images (`is_mask = false`,
/// `image_id = None`) and masks (`is_mask = true`, `image_id` pointing at the
/// image record inserted in the same request).
#[derive(Debug, Clone, FromRow)]
pub struct MediaRecord {
    pub id: Uuid,
    pub filename: String,
    pub is_mask: bool,
    pub storage_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub image_id: Option<Uuid>,
}

/// Insert payload for a media record; the id is generated by the store.
#[derive(Debug, Clone)]
pub struct NewMediaRecord {
    pub filename: String,
    pub is_mask: bool,
    pub storage_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub image_id: Option<Uuid>,
}
