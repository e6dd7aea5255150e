use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Standard error envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable code
    #[schema(example = "COLLECTION_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Collection not found")]
    pub message: String,
}
