use axum::extract::{Path, Query, State};
use culinary_core::domain::{
    capture::EncodedImage,
    session::{ports::SessionService, value_objects::SessionIntent},
};
use uuid::Uuid;

use super::{get_session::SessionResponse, settle};
use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response, validate_json::ValidateJson},
        app_state::AppState,
    },
    session::validators::{DataUriImageRequest, WaitParams},
};

#[utoipa::path(
    post,
    path = "/{session_id}/image/data-uri",
    tag = "session",
    summary = "Upload fridge photo as data URI",
    description = "Same as the multipart upload for clients that already hold a base64 data URI",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        WaitParams,
    ),
    request_body = DataUriImageRequest,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Malformed data URI"),
        (status = 409, description = "Session is not on the upload screen"),
        (status = 413, description = "Image larger than 4 MiB")
    )
)]
pub async fn upload_image_data_uri(
    Path(session_id): Path<Uuid>,
    Query(params): Query<WaitParams>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DataUriImageRequest>,
) -> Result<Response<SessionResponse>, ApiError> {
    let image = EncodedImage::from_data_uri(&payload.data_uri)?;

    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::SubmitImage { image })
        .await?;
    let snapshot = settle(dispatch, params.wait()).await?;

    Ok(Response::OK(SessionResponse { data: snapshot }))
}
