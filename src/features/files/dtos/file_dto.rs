use chrono::{DateTime, Utc};
use s3::serde_types::Object;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;

/// Response DTO for a single object in a bucket
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileDto {
    /// Object key, unique within its bucket
    pub name: String,
    /// Byte count as a decimal string, copied from the backend's report
    pub size: String,
    /// Last-modified timestamp reported by the backend
    pub last_modified: DateTime<Utc>,
}

/// Upload request DTO for OpenAPI documentation.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to upload; its filename becomes the object key
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

impl TryFrom<Object> for FileDto {
    type Error = AppError;

    fn try_from(object: Object) -> Result<Self, Self::Error> {
        let last_modified = DateTime::parse_from_rfc3339(&object.last_modified)
            .map_err(|e| {
                AppError::Internal(format!(
                    "Invalid last-modified date '{}' for object '{}': {}",
                    object.last_modified, object.key, e
                ))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            name: object.key,
            size: object.size.to_string(),
            last_modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(key: &str, size: u64, last_modified: &str) -> Object {
        serde_json::from_value(serde_json::json!({
            "Key": key,
            "Size": size,
            "LastModified": last_modified,
            "ETag": "\"d41d8cd98f00b204e9800998ecf8427e\"",
            "StorageClass": "STANDARD",
        }))
        .unwrap()
    }

    #[test]
    fn file_dto_renders_size_as_decimal_string() {
        let dto = FileDto::try_from(object("report.pdf", 4096, "2024-05-01T12:00:00Z")).unwrap();

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "report.pdf");
        assert_eq!(json["size"], "4096");
        assert_eq!(json["lastModified"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn invalid_last_modified_is_rejected() {
        let result = FileDto::try_from(object("report.pdf", 1, "yesterday"));

        assert!(result.is_err());
    }
}
