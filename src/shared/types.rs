use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing envelope: every listing endpoint wraps its items under `data`.
/// The field is always present, `[]` when the backend reports nothing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_serializes_as_empty_array_not_null() {
        let response: ListResponse<String> = ListResponse::default();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({"data": []}));
    }

    #[test]
    fn message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("File saved")).unwrap();

        assert_eq!(json, serde_json::json!({"message": "File saved"}));
    }
}
