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
    delete,
    path = "/{session_id}/shopping-list/items/{name}",
    tag = "shopping",
    summary = "Remove from shopping list",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("name" = String, Path, description = "Ingredient name, URL-encoded"),
    ),
    responses(
        (status = 200, body = SessionResponse)
    )
)]
pub async fn remove_item(
    Path((session_id, name)): Path<(Uuid, String)>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::RemoveFromShoppingList { name })
        .await?;

    Ok(Response::OK(SessionResponse {
        data: dispatch.snapshot,
    }))
}
