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
    path = "/{session_id}/cooking/exit",
    tag = "cooking",
    summary = "Leave cooking mode",
    description = "Returns to the recipe list and stops any speech",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 409, description = "Session is not in cooking mode")
    )
)]
pub async fn exit_cooking(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::ExitCooking)
        .await?;

    Ok(Response::OK(SessionResponse {
        data: dispatch.snapshot,
    }))
}
