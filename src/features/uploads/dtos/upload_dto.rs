use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::uploads::models::MediaRecord;

/// Wire representation of a stored media record.
///
/// Ids are serialized under `_id` as strings; the frontend consumes the
/// document-store shape the previous backend exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MediaRecordDto {
    /// Store-generated identifier, string form
    #[serde(rename = "_id")]
    pub id: String,
    /// Original filename as uploaded
    pub filename: String,
    /// False for the image record, true for the mask record
    pub is_mask: bool,
    /// Public URL of the stored object
    pub storage_url: String,
    /// Timestamp when the record was created
    pub uploaded_at: DateTime<Utc>,
    /// For mask records, the id of the linked image record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

impl From<MediaRecord> for MediaRecordDto {
    fn from(record: MediaRecord) -> Self {
        Self {
            id: record.id.to_string(),
            filename: record.filename,
            is_mask: record.is_mask,
            storage_url: record.storage_url,
            uploaded_at: record.uploaded_at,
            image_id: record.image_id.map(|id| id.to_string()),
        }
    }
}

/// Response body for a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub message: String,
    pub image_data: MediaRecordDto,
    pub mask_data: MediaRecordDto,
}

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadRequestDto {
    /// The image file
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: String,
    /// The mask file for the image
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub mask: String,
}
