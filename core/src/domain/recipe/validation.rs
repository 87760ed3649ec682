use thiserror::Error;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeResponseError {
    #[error("response is not valid recipe JSON: {0}")]
    Malformed(String),

    #[error("recipe #{index} is invalid: {reason}")]
    Invalid { index: usize, reason: String },
}

/// Parses the model output and checks it against the declared shape.
///
/// Serde enforces field presence and enum membership; the remaining checks
/// cover what the schema language cannot express.
pub fn parse_recipes(raw: &str) -> Result<Vec<Recipe>, RecipeResponseError> {
    let recipes: Vec<Recipe> = serde_json::from_str(raw.trim())
        .map_err(|e| RecipeResponseError::Malformed(e.to_string()))?;

    for (index, recipe) in recipes.iter().enumerate() {
        validate_recipe(recipe).map_err(|reason| RecipeResponseError::Invalid {
            index,
            reason: reason.to_string(),
        })?;
    }

    Ok(recipes)
}

fn validate_recipe(recipe: &Recipe) -> Result<(), &'static str> {
    if recipe.recipe_name.trim().is_empty() {
        return Err("recipeName is blank");
    }

    if recipe.steps.is_empty() {
        return Err("steps is empty");
    }

    if recipe.steps.iter().any(|step| step.trim().is_empty()) {
        return Err("a step is blank");
    }

    if !recipe.calories.is_finite() || recipe.calories < 0.0 {
        return Err("calories must be a non-negative number");
    }

    if recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient.name.trim().is_empty())
    {
        return Err("an ingredient name is blank");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[
        {
            "recipeName": "Tomato Omelette",
            "difficulty": "Easy",
            "prepTime": "10 mins",
            "calories": 320,
            "ingredients": [{ "name": "eggs", "quantity": "3", "status": "available" }],
            "steps": ["Whisk the eggs.", "Cook with tomatoes."]
        },
        {
            "recipeName": "Plain Rice",
            "difficulty": "Easy",
            "prepTime": "20 mins",
            "calories": 200,
            "ingredients": [],
            "steps": ["Boil the rice."]
        }
    ]"#;

    #[test]
    fn test_valid_response_is_parsed_in_order() {
        let recipes = parse_recipes(VALID).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].recipe_name, "Tomato Omelette");
        // recipes without ingredients are degenerate but allowed
        assert!(recipes[1].ingredients.is_empty());
    }

    #[test]
    fn test_empty_array_is_accepted() {
        assert_eq!(parse_recipes(" [] \n").unwrap(), vec![]);
    }

    #[test]
    fn test_free_text_is_malformed() {
        let err = parse_recipes("Here are some recipes you might like!").unwrap_err();
        assert!(matches!(err, RecipeResponseError::Malformed(_)));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let raw = r#"[{ "recipeName": "Toast", "difficulty": "Easy", "prepTime": "5 mins",
            "calories": 150, "ingredients": [] }]"#;
        assert!(matches!(
            parse_recipes(raw),
            Err(RecipeResponseError::Malformed(_))
        ));
    }

    #[test]
    fn test_out_of_set_difficulty_is_malformed() {
        let raw = r#"[{ "recipeName": "Souffle", "difficulty": "Expert", "prepTime": "1 hour",
            "calories": 300, "ingredients": [], "steps": ["Pray."] }]"#;
        assert!(matches!(
            parse_recipes(raw),
            Err(RecipeResponseError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_steps_are_invalid() {
        let raw = r#"[{ "recipeName": "Nothing", "difficulty": "Easy", "prepTime": "0 mins",
            "calories": 0, "ingredients": [], "steps": [] }]"#;
        assert_eq!(
            parse_recipes(raw),
            Err(RecipeResponseError::Invalid {
                index: 0,
                reason: "steps is empty".to_string()
            })
        );
    }

    #[test]
    fn test_negative_calories_are_invalid() {
        let raw = r#"[{ "recipeName": "Air", "difficulty": "Easy", "prepTime": "1 min",
            "calories": -5, "ingredients": [], "steps": ["Breathe."] }]"#;
        assert!(matches!(
            parse_recipes(raw),
            Err(RecipeResponseError::Invalid { index: 0, .. })
        ));
    }
}
