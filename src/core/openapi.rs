use utoipa::{Modify, OpenApi};

use crate::features::buckets::{dtos as buckets_dtos, handlers as buckets_handlers};
use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::shared::types::{ErrorResponse, ListResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Buckets
        buckets_handlers::list_buckets,
        buckets_handlers::create_bucket,
        // Files
        files_handlers::list_files,
        files_handlers::upload_file,
        files_handlers::delete_file,
    ),
    components(
        schemas(
            buckets_dtos::BucketDto,
            files_dtos::FileDto,
            files_dtos::UploadFileDto,
            ListResponse<buckets_dtos::BucketDto>,
            ListResponse<files_dtos::FileDto>,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "buckets", description = "Bucket listing and creation"),
        (name = "files", description = "Object listing, upload and deletion within a bucket"),
    ),
    info(
        title = "Storage Gateway API",
        version = "0.1.0",
        description = "HTTP gateway over a MinIO object-storage backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
