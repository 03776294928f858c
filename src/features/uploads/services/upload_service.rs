use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::core::error::Result;
use crate::features::uploads::dtos::UploadResponseDto;
use crate::features::uploads::models::NewMediaRecord;
use crate::features::uploads::repository::RecordStore;
use crate::modules::storage::ObjectStorage;

/// One file extracted from the multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Service for image/mask pair uploads
pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
    records: Arc<dyn RecordStore>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, records: Arc<dyn RecordStore>) -> Self {
        Self { storage, records }
    }

    /// Storage key: `{current UTC timestamp, ISO-8601}_{role}_{filename}`.
    ///
    /// Two uploads of the same filename within the same microsecond collide;
    /// accepted risk, not mitigated.
    fn storage_key(role: &str, filename: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f");
        format!("{}_{}_{}", timestamp, role, filename)
    }

    /// Upload an image and its mask, then record metadata for both, linking
    /// the mask record to the image record's generated id.
    ///
    /// The four storage operations run strictly in order: image upload, mask
    /// upload, image insert, mask insert. The calls share no transaction; a
    /// failure partway through leaves earlier writes in place with no
    /// compensating cleanup.
    pub async fn upload_pair(
        &self,
        image: UploadedFile,
        mask: UploadedFile,
    ) -> Result<UploadResponseDto> {
        let image_key = Self::storage_key("image", &image.filename);
        let mask_key = Self::storage_key("mask", &mask.filename);

        self.storage
            .put_object(&image_key, &image.data, &image.content_type)
            .await?;
        self.storage
            .put_object(&mask_key, &mask.data, &mask.content_type)
            .await?;

        debug!("Uploaded image '{}' and mask '{}'", image_key, mask_key);

        let image_record = self
            .records
            .insert(NewMediaRecord {
                filename: image.filename,
                is_mask: false,
                storage_url: self.storage.object_url(&image_key),
                uploaded_at: Utc::now(),
                image_id: None,
            })
            .await?;

        // The mask insert depends on the image record's generated id; an
        // image-insert failure above means this is never attempted.
        let mask_record = self
            .records
            .insert(NewMediaRecord {
                filename: mask.filename,
                is_mask: true,
                storage_url: self.storage.object_url(&mask_key),
                uploaded_at: Utc::now(),
                image_id: Some(image_record.id),
            })
            .await?;

        info!(
            "Stored image record {} and mask record {}",
            image_record.id, mask_record.id
        );

        Ok(UploadResponseDto {
            message: "Upload successful".to_string(),
            image_data: image_record.into(),
            mask_data: mask_record.into(),
        })
    }
}
