use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Whether the model saw the ingredient in the photo or presumes it missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    Available,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub status: IngredientStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub difficulty: Difficulty,
    pub prep_time: String,
    pub calories: f64,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn missing_ingredients(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .filter(|ingredient| ingredient.status == IngredientStatus::Missing)
            .map(|ingredient| ingredient.name.as_str())
            .collect()
    }

    /// Placeholder illustration seeded by the recipe name.
    pub fn preview_image_url(&self) -> String {
        let seed: String = self
            .recipe_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        format!(
            "https://picsum.photos/seed/{}/400/300",
            urlencoding::encode(&seed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_schema_names() {
        let raw = r#"{
            "recipeName": "Shakshuka",
            "difficulty": "Medium",
            "prepTime": "25 mins",
            "calories": 410,
            "ingredients": [
                { "name": "eggs", "quantity": "4", "status": "available" },
                { "name": "cumin", "quantity": "1 tsp", "status": "missing" }
            ],
            "steps": ["Simmer the sauce.", "Poach the eggs."]
        }"#;

        let recipe: Recipe = serde_json::from_str(raw).unwrap();
        assert_eq!(recipe.recipe_name, "Shakshuka");
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.calories, 410.0);
        assert_eq!(recipe.missing_ingredients(), vec!["cumin"]);

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["prepTime"], "25 mins");
        assert_eq!(value["ingredients"][0]["status"], "available");
    }

    #[test]
    fn test_unknown_enum_values_are_rejected() {
        let raw = r#"{ "name": "salt", "quantity": "1 pinch", "status": "maybe" }"#;
        assert!(serde_json::from_str::<Ingredient>(raw).is_err());
    }

    #[test]
    fn test_preview_image_url_strips_whitespace() {
        let recipe = Recipe {
            recipe_name: "Mac & Cheese Bake".to_string(),
            difficulty: Difficulty::Easy,
            prep_time: "40 mins".to_string(),
            calories: 650.0,
            ingredients: vec![],
            steps: vec!["Bake.".to_string()],
        };

        assert_eq!(
            recipe.preview_image_url(),
            "https://picsum.photos/seed/Mac%26CheeseBake/400/300"
        );
    }
}
