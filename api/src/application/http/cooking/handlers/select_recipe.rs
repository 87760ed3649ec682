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
    path = "/{session_id}/recipes/{index}/select",
    tag = "cooking",
    summary = "Start cooking a recipe",
    description = "Selects a recipe from the list and enters cooking mode on its first step",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Zero-based position in the recipe list"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 404, description = "No recipe at this index"),
        (status = 409, description = "Session is not showing the recipe list")
    )
)]
pub async fn select_recipe(
    Path((session_id, index)): Path<(Uuid, usize)>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::SelectRecipe { index })
        .await?;

    Ok(Response::OK(SessionResponse {
        data: dispatch.snapshot,
    }))
}
