use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::features::uploads::handlers::upload_image_and_mask;
use crate::features::uploads::services::UploadService;

/// Create routes for the uploads feature
pub fn routes(service: Arc<UploadService>) -> Router {
    Router::new()
        .route(
            "/upload/",
            // No size constraint is enforced on uploads; any byte stream
            // is accepted.
            post(upload_image_and_mask).layer(DefaultBodyLimit::disable()),
        )
        .with_state(service)
}
