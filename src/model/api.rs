//! Generic API response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Error response body, `{"success": false, "error": "..."}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// Empty data payload, serialized as `{}`. Used by the delete response.
#[derive(Serialize, ToSchema)]
pub struct EmptyDto {}
