//! Storage module
//!
//! Provides the MinIO/S3-compatible client the gateway delegates every
//! bucket and object operation to.

mod minio_client;

pub use minio_client::{BucketEntry, MinIOClient};
