use crate::domain::{
    dietary::ActiveFilters,
    recipe::value_objects::{MAX_SUGGESTED_RECIPES, MIN_SUGGESTED_RECIPES},
};

/// Builds the instruction sent alongside the photo.
///
/// The dietary clause is only present when at least one filter is active; the
/// model is told to treat the filters as hard constraints.
pub fn build_recipe_prompt(filters: &ActiveFilters) -> String {
    let mut lines = vec![
        "Analyze the ingredients in this image of a fridge.".to_string(),
        "Identify all edible items.".to_string(),
        format!(
            "Suggest {MIN_SUGGESTED_RECIPES}-{MAX_SUGGESTED_RECIPES} diverse recipes that primarily use these ingredients."
        ),
        "Assume common pantry staples like salt, pepper, oil, and basic spices are available but list them as 'missing' if they are essential for the recipe.".to_string(),
        "For each ingredient in a recipe, determine if it is 'available' from the image or 'missing'.".to_string(),
    ];

    if let Some(clause) = dietary_clause(filters) {
        lines.push(clause);
    }

    lines.push(
        "Provide the output in a valid JSON format according to the provided schema.".to_string(),
    );

    lines.join("\n")
}

fn dietary_clause(filters: &ActiveFilters) -> Option<String> {
    if filters.is_empty() {
        return None;
    }

    Some(format!(
        "The recipes MUST adhere to the following dietary restrictions: {}.",
        filters.ids().join(", ")
    ))
}
