use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_session::{__path_create_session, create_session},
    delete_session::{__path_delete_session, delete_session},
    get_session::{__path_get_session, get_session},
    retry_generation::{__path_retry_generation, retry_generation},
    start_over::{__path_start_over, start_over},
    toggle_filter::{__path_toggle_filter, toggle_filter},
    upload_image::{__path_upload_image, upload_image},
    upload_image_data_uri::{__path_upload_image_data_uri, upload_image_data_uri},
};
use crate::application::http::server::app_state::AppState;

/// Request bodies on the image routes may carry a 4 MiB photo plus multipart
/// or base64 overhead. The photo limit itself is enforced on the decoded bytes.
pub const MAX_IMAGE_BODY_SIZE: usize = 8 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    create_session,
    get_session,
    delete_session,
    upload_image,
    upload_image_data_uri,
    toggle_filter,
    retry_generation,
    start_over
))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let image_routes = Router::new()
        .route(
            &format!("{}/sessions/{{session_id}}/image", root_path),
            post(upload_image),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/image/data-uri", root_path),
            post(upload_image_data_uri),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BODY_SIZE));

    Router::new()
        .route(&format!("{}/sessions", root_path), post(create_session))
        .route(
            &format!("{}/sessions/{{session_id}}", root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/filters/{{filter_id}}/toggle",
                root_path
            ),
            post(toggle_filter),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/retry", root_path),
            post(retry_generation),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/start-over", root_path),
            post(start_over),
        )
        .merge(image_routes)
}
