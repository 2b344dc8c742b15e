// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by every non-2xx response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "CV_PROFILE_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "CV profile not found")]
    pub message: String,
}
