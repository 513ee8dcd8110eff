use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::modules::storage::BucketEntry;

/// Response DTO for a single bucket
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BucketDto {
    /// Bucket name (backend-assigned uniqueness)
    pub name: String,
    /// Creation timestamp reported by the backend
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BucketEntry> for BucketDto {
    type Error = AppError;

    fn try_from(entry: BucketEntry) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&entry.created_at)
            .map_err(|e| {
                AppError::Internal(format!(
                    "Invalid creation date '{}' for bucket '{}': {}",
                    entry.created_at, entry.name, e
                ))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            name: entry.name,
            created_at,
        })
    }
}
