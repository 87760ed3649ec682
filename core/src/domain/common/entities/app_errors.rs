use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Image is empty")]
    EmptyImage,

    #[error("Image size exceeds {max_bytes} bytes (got {size} bytes)")]
    ImageTooLarge { size: usize, max_bytes: usize },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid image encoding")]
    InvalidImageEncoding,

    #[error("Unknown dietary filter: {0}")]
    UnknownDietaryFilter(String),

    #[error("failed to generate recipes")]
    GenerationFailed,

    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    #[error("Session not found")]
    SessionNotFound,

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid")]
    Invalid,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
