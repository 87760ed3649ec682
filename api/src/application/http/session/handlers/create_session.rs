use axum::extract::State;
use culinary_core::domain::session::ports::SessionService;

use super::get_session::SessionResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Create session",
    description = "Starts a new session on the upload screen",
    responses(
        (status = 201, body = SessionResponse, description = "Session created")
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let snapshot = state.service.create_session().await?;

    Ok(Response::Created(SessionResponse { data: snapshot }))
}
