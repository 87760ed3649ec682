use axum::extract::{Path, State};
use culinary_core::domain::session::{ports::SessionService, value_objects::SessionSnapshot};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct SessionResponse {
    pub data: SessionSnapshot,
}

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get session",
    description = "Returns the current snapshot of a session",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let snapshot = state.service.get_session(session_id).await?;

    Ok(Response::OK(SessionResponse { data: snapshot }))
}
