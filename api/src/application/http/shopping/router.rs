use axum::{
    Router,
    routing::{delete, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_item::{__path_add_item, add_item},
    close_shopping_list::{__path_close_shopping_list, close_shopping_list},
    open_shopping_list::{__path_open_shopping_list, open_shopping_list},
    remove_item::{__path_remove_item, remove_item},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(open_shopping_list, close_shopping_list, add_item, remove_item))]
pub struct ShoppingApiDoc;

pub fn shopping_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/sessions/{{session_id}}/shopping-list/open", root_path),
            post(open_shopping_list),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/shopping-list/close", root_path),
            post(close_shopping_list),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/shopping-list/items", root_path),
            post(add_item),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/shopping-list/items/{{name}}",
                root_path
            ),
            delete(remove_item),
        )
}
