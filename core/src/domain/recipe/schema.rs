use serde_json::json;

/// Returns the JSON schema declared to the LLM for recipe responses
pub fn recipe_response_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "recipeName": {
                    "type": "string",
                    "description": "The name of the recipe."
                },
                "difficulty": {
                    "type": "string",
                    "enum": ["Easy", "Medium", "Hard"],
                    "description": "The difficulty to prepare the recipe."
                },
                "prepTime": {
                    "type": "string",
                    "description": "Estimated preparation time, e.g., '30 mins'."
                },
                "calories": {
                    "type": "number",
                    "description": "Estimated calories per serving."
                },
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {
                                "type": "string",
                                "description": "Name of the ingredient."
                            },
                            "quantity": {
                                "type": "string",
                                "description": "Quantity of the ingredient, e.g., '2 cups', '100g'."
                            },
                            "status": {
                                "type": "string",
                                "enum": ["available", "missing"],
                                "description": "Whether the ingredient is visibly available in the image or is a common pantry staple that might be missing."
                            }
                        },
                        "required": ["name", "quantity", "status"]
                    }
                },
                "steps": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Step-by-step instructions to prepare the recipe."
                }
            },
            "required": [
                "recipeName", "difficulty", "prepTime", "calories", "ingredients", "steps"
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_recipe_field() {
        let schema = recipe_response_schema();
        assert_eq!(schema["type"], "array");

        let required = schema["items"]["required"].as_array().unwrap();
        for field in [
            "recipeName",
            "difficulty",
            "prepTime",
            "calories",
            "ingredients",
            "steps",
        ] {
            assert!(required.iter().any(|v| v == field), "{field}");
        }

        let status = &schema["items"]["properties"]["ingredients"]["items"]["properties"]["status"];
        assert_eq!(status["enum"], json!(["available", "missing"]));
    }
}
