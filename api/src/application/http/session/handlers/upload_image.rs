use axum::extract::{Multipart, Path, Query, State};
use culinary_core::domain::{
    capture::EncodedImage,
    session::{ports::SessionService, value_objects::SessionIntent},
};
use uuid::Uuid;

use super::{get_session::SessionResponse, settle};
use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::validators::{UploadImageForm, WaitParams},
};

#[utoipa::path(
    post,
    path = "/{session_id}/image",
    tag = "session",
    summary = "Upload fridge photo",
    description = "Accepts a photo of available ingredients (max 4 MiB) and starts recipe generation",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        WaitParams,
    ),
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = SessionResponse),
        (status = 409, description = "Session is not on the upload screen"),
        (status = 413, description = "Image larger than 4 MiB"),
        (status = 415, description = "Not an image")
    )
)]
pub async fn upload_image(
    Path(session_id): Path<Uuid>,
    Query(params): Query<WaitParams>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SessionResponse>, ApiError> {
    let mut image: Option<EncodedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::from_multipart)?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(ApiError::from_multipart)?;

        image = Some(EncodedImage::from_bytes(&data, &mime_type)?);
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let dispatch = state
        .service
        .dispatch(session_id, SessionIntent::SubmitImage { image })
        .await?;
    let snapshot = settle(dispatch, params.wait()).await?;

    Ok(Response::OK(SessionResponse { data: snapshot }))
}
