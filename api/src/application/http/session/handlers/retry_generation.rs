use axum::extract::{Path, Query, State};
use culinary_core::domain::session::{ports::SessionService, value_objects::SessionIntent};
use uuid::Uuid;

use super::{get_session::SessionResponse, settle};
use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::validators::WaitParams,
};

#[utoipa::path(
    post,
    path = "/{session_id}/retry",
    tag = "session",
    summary = "Retry recipe generation",
    description = "Regenerates recipes for the stored photo, typically after a failed attempt",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        WaitParams,
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 409, description = "No photo stored")
    )
)]
pub async fn retry_generation(
    Path(session_id): Path<Uuid>,
    Query(params): Query<WaitParams>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::RetryGeneration)
        .await?;
    let snapshot = settle(dispatch, params.wait()).await?;

    Ok(Response::OK(SessionResponse { data: snapshot }))
}
