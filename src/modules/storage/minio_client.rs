//! MinIO/S3-compatible storage client
//!
//! Thin wrapper over the rust-s3 crate: bucket listing/creation plus
//! object listing, upload and deletion. HTTP semantics (status codes,
//! response bodies) live in the feature services, not here.

use s3::creds::Credentials;
use s3::error::S3Error;
use s3::request::ResponseData;
use s3::serde_types::Object;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info};

use crate::core::config::MinIOConfig;
use crate::core::error::AppError;

/// Bucket entry reported by the backend's bucket-listing call
#[derive(Debug, Clone)]
pub struct BucketEntry {
    pub name: String,
    /// Creation timestamp as reported by the backend (RFC3339)
    pub created_at: String,
}

/// MinIO/S3-compatible storage client
///
/// Holds the credentials and custom region only; per-bucket handles are
/// built on demand since every request addresses a caller-chosen bucket.
pub struct MinIOClient {
    region: Region,
    credentials: Credentials,
    endpoint: String,
}

impl MinIOClient {
    /// Create a new MinIO client from configuration
    pub fn new(config: MinIOConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create MinIO credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let client = Self {
            region,
            credentials,
            endpoint: config.endpoint,
        };

        info!("MinIO client initialized for endpoint: {}", client.endpoint);

        Ok(client)
    }

    /// Build a handle for one bucket, path-style addressed
    /// (http://endpoint/bucket instead of http://bucket.endpoint)
    fn bucket_handle(&self, name: &str) -> Result<Box<Bucket>, S3Error> {
        let mut bucket = Bucket::new(name, self.region.clone(), self.credentials.clone())?;
        bucket.set_path_style();
        Ok(bucket)
    }

    /// List all buckets the credentials can see, in backend order
    pub async fn list_buckets(&self) -> Result<Vec<BucketEntry>, S3Error> {
        let response = Bucket::list_buckets(self.region.clone(), self.credentials.clone()).await?;

        let entries = response
            .buckets
            .bucket
            .into_iter()
            .map(|bucket| BucketEntry {
                name: bucket.name,
                created_at: bucket.creation_date,
            })
            .collect();

        Ok(entries)
    }

    /// Create a bucket with the default configuration
    ///
    /// Without the `fail-on-err` feature rust-s3 only errors on transport
    /// failure; a 409 from the backend still comes back as `Ok`, so the
    /// response code is the real success signal.
    pub async fn create_bucket(&self, name: &str) -> Result<(), S3Error> {
        let response = Bucket::create_with_path_style(
            name,
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await?;

        if !response.success() {
            return Err(S3Error::HttpFailWithBody(
                response.response_code,
                response.response_text,
            ));
        }

        info!("Bucket '{}' created", name);
        Ok(())
    }

    /// Check whether a bucket exists
    pub async fn bucket_exists(&self, name: &str) -> Result<bool, S3Error> {
        self.bucket_handle(name)?.exists().await
    }

    /// List all objects in a bucket recursively (empty prefix, no delimiter)
    ///
    /// rust-s3 iterates continuation pages internally before returning, so
    /// the listing completes within the calling request; dropping the future
    /// at handler exit cancels any in-flight page fetch.
    pub async fn list_objects(&self, bucket: &str) -> Result<Vec<Object>, S3Error> {
        let pages = self
            .bucket_handle(bucket)?
            .list(String::new(), None)
            .await?;

        let objects: Vec<Object> = pages
            .into_iter()
            .flat_map(|page| page.contents)
            .collect();

        debug!("Listed {} objects in bucket '{}'", objects.len(), bucket);
        Ok(objects)
    }

    /// Upload an object; overwrites silently on key collision.
    /// Content type is left to the backend default.
    pub async fn put_object(&self, bucket: &str, key: &str, data: &[u8]) -> Result<(), S3Error> {
        let response = self.bucket_handle(bucket)?.put_object(key, data).await?;
        ensure_success(response)?;

        debug!("Uploaded object '{}' to bucket '{}'", key, bucket);
        Ok(())
    }

    /// Delete an object; deleting a missing key is whatever the backend
    /// reports (MinIO treats it as success).
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), S3Error> {
        let response = self.bucket_handle(bucket)?.delete_object(key).await?;
        ensure_success(response)?;

        debug!("Deleted object '{}' from bucket '{}'", key, bucket);
        Ok(())
    }
}

/// Turn a non-2xx backend response into an error. Object writes and deletes
/// come back as `Ok(ResponseData)` even for 4xx/5xx under this feature set,
/// with the status code as the only failure signal.
fn ensure_success(response: ResponseData) -> Result<(), S3Error> {
    match response.status_code() {
        200..=299 => Ok(()),
        code => Err(S3Error::HttpFailWithBody(
            code,
            String::from_utf8_lossy(response.bytes()).into_owned(),
        )),
    }
}
