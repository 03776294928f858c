use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, ErrorBody, Result};
use crate::features::uploads::dtos::{UploadRequestDto, UploadResponseDto};
use crate::features::uploads::services::{UploadService, UploadedFile};

/// Upload an image and its mask
///
/// Accepts multipart/form-data with:
/// - `image`: The image file (required)
/// - `mask`: The mask file for the image (required)
///
/// Both files are stored in object storage and a metadata record is inserted
/// for each, with the mask record linked to the image record's id.
#[utoipa::path(
    post,
    path = "/upload/",
    tag = "uploads",
    request_body(
        content = UploadRequestDto,
        content_type = "multipart/form-data",
        description = "Multipart form with the image file and its mask file",
    ),
    responses(
        (status = 200, description = "Both files stored and their records linked", body = UploadResponseDto),
        (status = 500, description = "Storage or metadata failure", body = ErrorBody)
    )
)]
pub async fn upload_image_and_mask(
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponseDto>> {
    let mut image: Option<UploadedFile> = None;
    let mut mask: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::Upload(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "image" | "mask" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::Upload(format!("Failed to read file data: {}", e))
                })?;

                let file = UploadedFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                };

                if field_name == "image" {
                    image = Some(file);
                } else {
                    mask = Some(file);
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let image = image.ok_or_else(|| AppError::Upload("Image file is required".to_string()))?;
    let mask = mask.ok_or_else(|| AppError::Upload("Mask file is required".to_string()))?;

    let response = service.upload_pair(image, mask).await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    use crate::core::error::CREDENTIALS_FAILURE_DETAIL;
    use crate::features::uploads::routes;
    use crate::features::uploads::services::UploadService;
    use crate::features::uploads::test_support::{FakeRecordStore, FakeStorage, TEST_BUCKET};

    fn server_with(
        storage: Arc<FakeStorage>,
        records: Arc<FakeRecordStore>,
    ) -> TestServer {
        let service = Arc::new(UploadService::new(storage, records));
        TestServer::new(routes::routes(service)).unwrap()
    }

    fn cat_form() -> MultipartForm {
        MultipartForm::new()
            .add_part(
                "image",
                Part::bytes(b"\x89PNG\r\n\x1a\n".as_slice())
                    .file_name("cat.png")
                    .mime_type("image/png"),
            )
            .add_part(
                "mask",
                Part::bytes(b"\x00\x01".as_slice())
                    .file_name("cat_mask.png")
                    .mime_type("image/png"),
            )
    }

    #[tokio::test]
    async fn upload_returns_linked_records() {
        let storage = Arc::new(FakeStorage::new());
        let records = Arc::new(FakeRecordStore::new());
        let server = server_with(storage.clone(), records.clone());

        let response = server.post("/upload/").multipart(cat_form()).await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Upload successful");
        assert_eq!(body["image_data"]["is_mask"], false);
        assert_eq!(body["mask_data"]["is_mask"], true);
        assert_eq!(body["mask_data"]["image_id"], body["image_data"]["_id"]);
        assert!(body["image_data"]["_id"].is_string());

        let keys = storage.keys();
        assert!(keys[0].contains("_image_cat.png"));
        assert!(keys[1].contains("_mask_cat_mask.png"));
        assert_eq!(
            body["image_data"]["storage_url"],
            format!("https://{}.s3.amazonaws.com/{}", TEST_BUCKET, keys[0])
        );
        assert_eq!(records.rows().len(), 2);
    }

    #[tokio::test]
    async fn missing_mask_is_a_server_error() {
        let server = server_with(
            Arc::new(FakeStorage::new()),
            Arc::new(FakeRecordStore::new()),
        );

        let form = MultipartForm::new().add_part(
            "image",
            Part::bytes(b"\x89PNG".as_slice())
                .file_name("cat.png")
                .mime_type("image/png"),
        );

        let response = server.post("/upload/").multipart(form).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], "Mask file is required");
    }

    #[tokio::test]
    async fn credential_failure_reports_fixed_detail() {
        let server = server_with(
            Arc::new(FakeStorage::failing_credentials()),
            Arc::new(FakeRecordStore::new()),
        );

        let response = server.post("/upload/").multipart(cat_form()).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], CREDENTIALS_FAILURE_DETAIL);
    }

    #[tokio::test]
    async fn insert_failure_surfaces_raw_description() {
        let records = Arc::new(FakeRecordStore::failing());
        let server = server_with(Arc::new(FakeStorage::new()), records.clone());

        let response = server.post("/upload/").multipart(cat_form()).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], "record store unavailable");
        assert_eq!(records.insert_attempts(), 1);
    }

    #[tokio::test]
    async fn unknown_fields_are_ignored() {
        let server = server_with(
            Arc::new(FakeStorage::new()),
            Arc::new(FakeRecordStore::new()),
        );

        let form = cat_form().add_text("comment", "not a file");
        let response = server.post("/upload/").multipart(form).await;
        response.assert_status_ok();
    }
}
