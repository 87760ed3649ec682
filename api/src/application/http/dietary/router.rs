use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::list_dietary_filters::{__path_list_dietary_filters, list_dietary_filters};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_dietary_filters))]
pub struct DietaryApiDoc;

pub fn dietary_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/dietary-filters", state.args.server.root_path),
        get(list_dietary_filters),
    )
}
