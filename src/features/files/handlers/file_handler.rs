use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{FileDto, UploadFileDto};
use crate::features::files::services::FileService;
use crate::shared::types::{ErrorResponse, ListResponse, MessageResponse};

/// List all files in a bucket
///
/// Recursive listing with an empty prefix: objects at any depth are
/// returned. An empty or missing bucket yields `{"data": []}`.
#[utoipa::path(
    get,
    path = "/buckets/{bucket}/files",
    params(
        ("bucket" = String, Path, description = "Bucket to list")
    ),
    responses(
        (status = 200, description = "Objects in the bucket, in backend order", body = ListResponse<FileDto>),
        (status = 500, description = "Could not list files", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn list_files(
    State(service): State<Arc<FileService>>,
    Path(bucket): Path<String>,
) -> Result<Json<ListResponse<FileDto>>> {
    let objects = service.list(&bucket).await?;
    let data = objects
        .into_iter()
        .map(FileDto::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(Json(ListResponse::new(data)))
}

/// Upload a file to a bucket
///
/// Accepts multipart/form-data with a single `file` field. The uploaded
/// filename becomes the object key verbatim; an existing object with the
/// same key is overwritten silently.
#[utoipa::path(
    post,
    path = "/buckets/{bucket}/files",
    params(
        ("bucket" = String, Path, description = "Target bucket")
    ),
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "Form upload with the file under the `file` field",
    ),
    responses(
        (status = 200, description = "File saved", body = MessageResponse),
        (status = 400, description = "No file found / Could not read file", body = ErrorResponse),
        (status = 500, description = "Could not save file", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn upload_file(
    State(service): State<Arc<FileService>>,
    Path(bucket): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>> {
    let mut file_name: Option<String> = None;
    let mut file_data: Option<axum::body::Bytes> = None;

    // Walk the form fields looking for `file`; a field without a filename
    // is a plain value, not a file attachment.
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest("No file found".to_string())
    })? {
        if field.name() != Some("file") {
            debug!("Ignoring unknown field: {}", field.name().unwrap_or(""));
            continue;
        }

        let Some(name) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read file bytes: {}", e);
            AppError::BadRequest("Could not read file".to_string())
        })?;

        file_name = Some(name);
        file_data = Some(data);
    }

    let (Some(name), Some(data)) = (file_name, file_data) else {
        return Err(AppError::BadRequest("No file found".to_string()));
    };

    service.upload(&bucket, &name, &data).await?;

    Ok(Json(MessageResponse::new("File saved")))
}

/// Delete a file from a bucket
#[utoipa::path(
    delete,
    path = "/buckets/{bucket}/files/{file}",
    params(
        ("bucket" = String, Path, description = "Bucket holding the object"),
        ("file" = String, Path, description = "Object key to delete")
    ),
    responses(
        (status = 200, description = "File deleted", body = MessageResponse),
        (status = 500, description = "Could not delete file", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn delete_file(
    State(service): State<Arc<FileService>>,
    Path((bucket, file)): Path<(String, String)>,
) -> Result<Json<MessageResponse>> {
    service.delete(&bucket, &file).await?;

    Ok(Json(MessageResponse::new("File deleted")))
}

#[cfg(test)]
mod tests {
    use axum_test::multipart::MultipartForm;
    use axum_test::TestServer;
    use std::sync::Arc;

    use crate::core::config::MinIOConfig;
    use crate::features::files::routes;
    use crate::features::files::services::FileService;
    use crate::modules::storage::MinIOClient;

    fn test_server() -> TestServer {
        let config = MinIOConfig {
            endpoint: "http://127.0.0.1:9000".to_string(),
            access_key: "test".to_string(),
            secret_key: "test".to_string(),
            region: "us-east-1".to_string(),
        };
        let storage = Arc::new(MinIOClient::new(config).unwrap());
        let service = Arc::new(FileService::new(storage));

        TestServer::new(routes(service, 1024 * 1024)).unwrap()
    }

    #[tokio::test]
    async fn upload_without_file_field_returns_400() {
        let server = test_server();

        let form = MultipartForm::new().add_text("comment", "no attachment here");
        let response = server.post("/buckets/demo/files").multipart(form).await;

        response.assert_status_bad_request();
        response.assert_json(&serde_json::json!({"error": "No file found"}));
    }

    #[tokio::test]
    async fn upload_with_filename_less_file_field_returns_400() {
        let server = test_server();

        // A `file` field carrying text is a value, not an attachment
        let form = MultipartForm::new().add_text("file", "just a string");
        let response = server.post("/buckets/demo/files").multipart(form).await;

        response.assert_status_bad_request();
        response.assert_json(&serde_json::json!({"error": "No file found"}));
    }

    #[tokio::test]
    async fn unknown_object_route_is_not_found() {
        let server = test_server();

        let response = server.get("/buckets/demo/objects").await;

        response.assert_status_not_found();
    }
}
