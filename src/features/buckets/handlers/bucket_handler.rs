use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::buckets::dtos::BucketDto;
use crate::features::buckets::services::BucketService;
use crate::shared::types::{ErrorResponse, ListResponse, MessageResponse};

/// List all buckets
#[utoipa::path(
    get,
    path = "/buckets",
    responses(
        (status = 200, description = "All buckets visible to the gateway, in backend order", body = ListResponse<BucketDto>),
        (status = 500, description = "Backend listing failed", body = ErrorResponse)
    ),
    tag = "buckets"
)]
pub async fn list_buckets(
    State(service): State<Arc<BucketService>>,
) -> Result<Json<ListResponse<BucketDto>>> {
    let buckets = service.list().await?;
    let data = buckets
        .into_iter()
        .map(BucketDto::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(Json(ListResponse::new(data)))
}

/// Create a bucket
#[utoipa::path(
    post,
    path = "/buckets/{bucket}",
    params(
        ("bucket" = String, Path, description = "Name of the bucket to create")
    ),
    responses(
        (status = 200, description = "Bucket was created", body = MessageResponse),
        (status = 400, description = "Bucket already exists", body = ErrorResponse),
        (status = 500, description = "Could not create bucket", body = ErrorResponse)
    ),
    tag = "buckets"
)]
pub async fn create_bucket(
    State(service): State<Arc<BucketService>>,
    Path(bucket): Path<String>,
) -> Result<Json<MessageResponse>> {
    service.create(&bucket).await?;

    Ok(Json(MessageResponse::new("Bucket was created")))
}
