use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{capture::EncodedImage, dietary::ActiveFilters, recipe::entities::Recipe};

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub image: EncodedImage,
    pub filters: ActiveFilters,
}

/// Number of recipes the model is asked for.
pub const MIN_SUGGESTED_RECIPES: usize = 5;
pub const MAX_SUGGESTED_RECIPES: usize = 10;

/// A recipe as shown on its card. Serializes as the recipe itself plus the
/// derived display fields.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub preview_image_url: String,
    pub missing_ingredients: Vec<String>,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            preview_image_url: recipe.preview_image_url(),
            missing_ingredients: recipe
                .missing_ingredients()
                .into_iter()
                .map(str::to_string)
                .collect(),
            recipe: recipe.clone(),
        }
    }
}
