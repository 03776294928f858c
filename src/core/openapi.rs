use utoipa::OpenApi;

use crate::core::error::ErrorBody;
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Uploads
        uploads_handlers::upload_handler::upload_image_and_mask,
    ),
    components(schemas(
        uploads_dtos::UploadRequestDto,
        uploads_dtos::UploadResponseDto,
        uploads_dtos::MediaRecordDto,
        ErrorBody,
    )),
    tags(
        (name = "uploads", description = "Image and mask upload endpoint")
    ),
    info(
        title = "Maskstore API",
        description = "Stores image/mask pairs in object storage and records linked metadata",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
