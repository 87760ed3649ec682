use axum::extract::{Path, State};
use culinary_core::domain::session::{ports::SessionService, value_objects::SessionIntent};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response, validate_json::ValidateJson},
        app_state::AppState,
    },
    session::handlers::get_session::SessionResponse,
    shopping::validators::AddShoppingItemRequest,
};

#[utoipa::path(
    post,
    path = "/{session_id}/shopping-list/items",
    tag = "shopping",
    summary = "Add to shopping list",
    description = "Adds an ingredient name to the shopping list. Adding a name already on the list changes nothing",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = AddShoppingItemRequest,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Blank name")
    )
)]
pub async fn add_item(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddShoppingItemRequest>,
) -> Result<Response<SessionResponse>, ApiError> {
    let dispatch = state
        .service
        .dispatch(
            session_id,
            SessionIntent::AddToShoppingList { name: payload.name },
        )
        .await?;

    Ok(Response::OK(SessionResponse {
        data: dispatch.snapshot,
    }))
}
