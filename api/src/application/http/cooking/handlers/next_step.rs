use axum::extract::{Path, State};
use culinary_core::domain::session::{ports::SessionService, value_objects::SessionIntent};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::get_session::SessionResponse,
};

#[utoipa::path(
    post,
    path = "/{session_id}/cooking/next",
    tag = "cooking",
    summary = "Next step",
    description = "Moves to the next step; stays on the last step when already there",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 409, description = "Session is not in cooking mode")
    )
)]
pub async fn next_step(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::NextStep)
        .await?;

    Ok(Response::OK(SessionResponse {
        data: dispatch.snapshot,
    }))
}
