use std::sync::Arc;

use tracing::warn;

use crate::core::error::{AppError, Result};
use crate::modules::storage::{BucketEntry, MinIOClient};

/// Service for bucket listing and creation
pub struct BucketService {
    storage: Arc<MinIOClient>,
}

impl BucketService {
    pub fn new(storage: Arc<MinIOClient>) -> Self {
        Self { storage }
    }

    /// List all buckets in backend order. A backend failure surfaces the
    /// backend's own error text as a 500.
    pub async fn list(&self) -> Result<Vec<BucketEntry>> {
        Ok(self.storage.list_buckets().await?)
    }

    /// Create a bucket.
    ///
    /// The backend's creation error carries no structured reason code, so on
    /// failure a second existence check decides the response: exists-check
    /// succeeded and reported true means the caller asked for a taken name
    /// (400), anything else is a server-side failure (500). The check runs
    /// after the failed create, never before; the ordering is load-bearing.
    pub async fn create(&self, name: &str) -> Result<()> {
        let create_err = match self.storage.create_bucket(name).await {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        match self.storage.bucket_exists(name).await {
            Ok(true) => Err(AppError::BadRequest("Bucket already exists".to_string())),
            _ => {
                warn!("Could not create bucket '{}': {}", name, create_err);
                Err(AppError::Internal("Could not create bucket".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{spawn_stub_backend, stub_storage_client};

    const BUCKET_TAKEN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>BucketAlreadyOwnedByYou</Code><Message>Your previous request to create the named bucket succeeded and you already own it.</Message></Error>"#;

    const BACKEND_DOWN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>InternalError</Code><Message>We encountered an internal error.</Message></Error>"#;

    const BUCKETS_WITH_DEMO_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><Owner><ID>minio</ID><DisplayName>minio</DisplayName></Owner><Buckets><Bucket><Name>demo</Name><CreationDate>2024-05-01T12:00:00.000Z</CreationDate></Bucket></Buckets></ListAllMyBucketsResult>"#;

    const BUCKETS_WITHOUT_DEMO_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><Owner><ID>minio</ID><DisplayName>minio</DisplayName></Owner><Buckets><Bucket><Name>other</Name><CreationDate>2024-05-01T12:00:00.000Z</CreationDate></Bucket></Buckets></ListAllMyBucketsResult>"#;

    #[tokio::test]
    async fn create_succeeds_when_backend_accepts() {
        let endpoint = spawn_stub_backend(|_| (200, "")).await;
        let service = BucketService::new(stub_storage_client(&endpoint));

        assert!(service.create("demo").await.is_ok());
    }

    #[tokio::test]
    async fn create_of_existing_bucket_is_bad_request() {
        // The backend answers the creation with 409 inside an Ok response;
        // the follow-up existence check reports the bucket present.
        let endpoint = spawn_stub_backend(|method| match method {
            "PUT" => (409, BUCKET_TAKEN_XML),
            "HEAD" => (200, ""),
            _ => (200, BUCKETS_WITH_DEMO_XML),
        })
        .await;
        let service = BucketService::new(stub_storage_client(&endpoint));

        let err = service.create("demo").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Bucket already exists"));
    }

    #[tokio::test]
    async fn create_failure_without_existing_bucket_is_internal() {
        let endpoint = spawn_stub_backend(|method| match method {
            "PUT" => (500, BACKEND_DOWN_XML),
            "HEAD" => (404, ""),
            _ => (200, BUCKETS_WITHOUT_DEMO_XML),
        })
        .await;
        let service = BucketService::new(stub_storage_client(&endpoint));

        let err = service.create("demo").await.unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg == "Could not create bucket"));
    }

    #[tokio::test]
    async fn list_returns_backend_buckets_in_order() {
        let endpoint = spawn_stub_backend(|_| (200, BUCKETS_WITH_DEMO_XML)).await;
        let service = BucketService::new(stub_storage_client(&endpoint));

        let buckets = service.list().await.unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name, "demo");
    }
}
