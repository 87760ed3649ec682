use tracing::{error, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::Recipe,
        ports::{LLMClient, RecipeGenerator},
        prompts::build_recipe_prompt,
        schema::recipe_response_schema,
        validation::parse_recipes,
        value_objects::{GenerateRecipesInput, MAX_SUGGESTED_RECIPES, MIN_SUGGESTED_RECIPES},
    },
    session::ports::SessionRepository,
    speech::ports::SpeechOutput,
};

impl<LLM, SR, SP> RecipeGenerator for Service<LLM, SR, SP>
where
    LLM: LLMClient,
    SR: SessionRepository,
    SP: SpeechOutput,
{
    #[instrument(
        skip(self, input),
        fields(
            image_bytes = input.image.original_size(),
            mime_type = %input.image.mime_type(),
            filters = ?input.filters.ids(),
        )
    )]
    async fn generate_recipes(&self, input: GenerateRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        // 1. Build prompt
        let prompt = build_recipe_prompt(&input.filters);

        // 2. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_image(prompt, input.image, recipe_response_schema())
            .await
            .map_err(|e| {
                error!("Recipe generation request failed: {}", e);
                CoreError::GenerationFailed
            })?;

        // 3. Parse and validate response
        let recipes = parse_recipes(&raw_response).map_err(|e| {
            error!("Rejected recipe response: {}", e);
            CoreError::GenerationFailed
        })?;

        if !(MIN_SUGGESTED_RECIPES..=MAX_SUGGESTED_RECIPES).contains(&recipes.len()) {
            warn!(
                count = recipes.len(),
                "Model returned a recipe count outside the requested range"
            );
        }

        Ok(recipes)
    }
}
