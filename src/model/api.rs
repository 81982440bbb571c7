use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Pagination metadata for list endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
pub struct PaginationMetaDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[serde(rename = "totalPage")]
    pub total_page: u64,
}
