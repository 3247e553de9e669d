//! Secured data endpoint. Only reached once `require_api_key` has accepted
//! the request.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataCounts {
    pub users: u32,
    pub orders: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    pub data: DataCounts,
    pub source: &'static str,
    pub authenticated_with: &'static str,
}

/// Data handler.
pub async fn data() -> Json<DataResponse> {
    Json(DataResponse {
        data: DataCounts {
            users: 42,
            orders: 156,
        },
        source: "secured-endpoint",
        authenticated_with: "External Secrets + AWS Secrets Manager",
    })
}
