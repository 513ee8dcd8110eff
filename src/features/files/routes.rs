use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::features::files::handlers::{delete_file, list_files, upload_file};
use crate::features::files::services::FileService;

/// Create routes for the files feature
pub fn routes(service: Arc<FileService>, max_upload_size: usize) -> Router {
    Router::new()
        .route(
            "/buckets/{bucket}/files",
            // Allow body size up to the upload cap plus multipart overhead
            get(list_files)
                .post(upload_file)
                .layer(DefaultBodyLimit::max(
                    max_upload_size.saturating_add(1024 * 1024),
                )),
        )
        .route("/buckets/{bucket}/files/{file}", delete(delete_file))
        .with_state(service)
}
