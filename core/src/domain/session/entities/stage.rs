use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level view the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Upload,
    RecipeList,
    Cooking,
    Shopping,
}
