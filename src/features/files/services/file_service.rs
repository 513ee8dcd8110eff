use std::sync::Arc;

use s3::serde_types::Object;
use tracing::warn;

use crate::core::error::{AppError, Result};
use crate::modules::storage::MinIOClient;

/// Service for object listing, upload and deletion within a bucket
pub struct FileService {
    storage: Arc<MinIOClient>,
}

impl FileService {
    pub fn new(storage: Arc<MinIOClient>) -> Self {
        Self { storage }
    }

    /// List every object in the bucket, at any depth, in backend order.
    /// An empty and a missing bucket both yield an empty listing; the
    /// backend does not distinguish them at this layer.
    pub async fn list(&self, bucket: &str) -> Result<Vec<Object>> {
        self.storage.list_objects(bucket).await.map_err(|e| {
            warn!("Could not list files in bucket '{}': {}", bucket, e);
            AppError::Internal("Could not list files".to_string())
        })
    }

    /// Store an object under the uploaded filename. No sanitization and no
    /// collision check: a second upload with the same name overwrites.
    pub async fn upload(&self, bucket: &str, filename: &str, data: &[u8]) -> Result<()> {
        self.storage
            .put_object(bucket, filename, data)
            .await
            .map_err(|e| {
                warn!(
                    "Could not save file '{}' to bucket '{}': {}",
                    filename, bucket, e
                );
                AppError::Internal("Could not save file".to_string())
            })
    }

    /// Remove one object. Whether deleting a missing key errors is
    /// backend-dependent; MinIO reports success.
    pub async fn delete(&self, bucket: &str, file: &str) -> Result<()> {
        self.storage
            .delete_object(bucket, file)
            .await
            .map_err(|e| {
                warn!(
                    "Could not delete file '{}' from bucket '{}': {}",
                    file, bucket, e
                );
                AppError::Internal("Could not delete file".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{spawn_stub_backend, stub_storage_client};

    const NO_SUCH_BUCKET_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchBucket</Code><Message>The specified bucket does not exist</Message></Error>"#;

    #[tokio::test]
    async fn failed_backend_write_is_could_not_save_file() {
        // The backend reports the failure inside an Ok response; only its
        // status code says the write never happened.
        let endpoint = spawn_stub_backend(|_| (404, NO_SUCH_BUCKET_XML)).await;
        let service = FileService::new(stub_storage_client(&endpoint));

        let err = service
            .upload("missing", "report.pdf", b"content")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg == "Could not save file"));
    }

    #[tokio::test]
    async fn failed_delete_is_could_not_delete_file() {
        let endpoint = spawn_stub_backend(|_| (404, NO_SUCH_BUCKET_XML)).await;
        let service = FileService::new(stub_storage_client(&endpoint));

        let err = service.delete("missing", "report.pdf").await.unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg == "Could not delete file"));
    }

    #[tokio::test]
    async fn accepted_write_is_ok() {
        let endpoint = spawn_stub_backend(|_| (200, "")).await;
        let service = FileService::new(stub_storage_client(&endpoint));

        let result = service.upload("demo", "report.pdf", b"content").await;
        assert!(result.is_ok());
    }
}
