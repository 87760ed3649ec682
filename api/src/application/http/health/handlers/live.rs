use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, ToSchema)]
pub struct LiveResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LiveResponse)
    )
)]
pub async fn live() -> Result<Response<LiveResponse>, ApiError> {
    Ok(Response::OK(LiveResponse {
        status: "alive".to_string(),
        timestamp: Utc::now(),
    }))
}
