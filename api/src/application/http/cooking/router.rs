use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    exit_cooking::{__path_exit_cooking, exit_cooking},
    next_step::{__path_next_step, next_step},
    previous_step::{__path_previous_step, previous_step},
    read_aloud::{__path_read_aloud, read_aloud},
    select_recipe::{__path_select_recipe, select_recipe},
    stop_reading::{__path_stop_reading, stop_reading},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    select_recipe,
    exit_cooking,
    next_step,
    previous_step,
    read_aloud,
    stop_reading
))]
pub struct CookingApiDoc;

pub fn cooking_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/recipes/{{index}}/select",
                root_path
            ),
            post(select_recipe),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/cooking/exit", root_path),
            post(exit_cooking),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/cooking/next", root_path),
            post(next_step),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/cooking/previous", root_path),
            post(previous_step),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/cooking/read-aloud", root_path),
            post(read_aloud),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/cooking/stop-reading", root_path),
            post(stop_reading),
        )
}
