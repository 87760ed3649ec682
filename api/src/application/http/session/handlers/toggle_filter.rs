use axum::extract::{Path, Query, State};
use culinary_core::domain::{
    dietary::DietaryFilterId,
    session::{ports::SessionService, value_objects::SessionIntent},
};
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
    path = "/{session_id}/filters/{filter_id}/toggle",
    tag = "session",
    summary = "Toggle dietary filter",
    description = "Toggles a dietary filter. When a photo is stored, recipes are regenerated with the new filter set",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("filter_id" = String, Path, description = "Dietary filter id, e.g. vegan"),
        WaitParams,
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Unknown dietary filter"),
        (status = 404, description = "Session not found")
    )
)]
pub async fn toggle_filter(
    Path((session_id, filter_id)): Path<(Uuid, String)>,
    Query(params): Query<WaitParams>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let filter_id: DietaryFilterId = filter_id.parse()?;

    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::ToggleFilter { filter_id })
        .await?;
    let snapshot = settle(dispatch, params.wait()).await?;

    Ok(Response::OK(SessionResponse { data: snapshot }))
}
