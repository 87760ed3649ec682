use std::future::Future;

use crate::domain::{
    capture::EncodedImage,
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, value_objects::GenerateRecipesInput},
};

/// LLM Client trait for calling multimodal AI models
pub trait LLMClient: Send + Sync {
    /// Sends one request made of the image, the instruction and the declared
    /// response schema. Returns the raw JSON text of the first candidate.
    fn generate_with_image(
        &self,
        prompt: String,
        image: EncodedImage,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation
pub trait RecipeGenerator: Send + Sync {
    /// Exactly one outbound call per invocation. Every failure is reported as
    /// [`CoreError::GenerationFailed`].
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
