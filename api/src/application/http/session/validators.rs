use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct WaitParams {
    /// Hold the response until the recipe generation started by this call finished.
    #[schema(example = false)]
    pub wait: Option<bool>,
}

impl WaitParams {
    pub fn wait(&self) -> bool {
        self.wait.unwrap_or(false)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct DataUriImageRequest {
    #[validate(length(min = 1, message = "data_uri must not be empty"))]
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQSkZJRg==")]
    pub data_uri: String,
}

/// Multipart form of the image upload. Only documents the body.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadImageForm {
    #[schema(format = Binary)]
    pub image: String,
}
