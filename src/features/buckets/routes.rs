use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::buckets::handlers::{create_bucket, list_buckets};
use crate::features::buckets::services::BucketService;

/// Create routes for the buckets feature
pub fn routes(service: Arc<BucketService>) -> Router {
    Router::new()
        .route("/buckets", get(list_buckets))
        .route("/buckets/{bucket}", post(create_bucket))
        .with_state(service)
}
