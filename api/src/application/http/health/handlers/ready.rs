use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    pub model: String,
}

/// The service only starts once its configuration validated, so being able to
/// answer means it is ready.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = ReadyResponse)
    )
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadyResponse>, ApiError> {
    Ok(Response::OK(ReadyResponse {
        status: "ready".to_string(),
        model: state.args.llm.gemini_model.clone(),
    }))
}
