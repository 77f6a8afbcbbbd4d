//! Structured recipe generation.
//!
//! Renders a prompt, asks the provider for a completion, and parses the JSON
//! response into the structured recipe types.

use crate::error::GenerateError;
use crate::llm::LlmProvider;
use crate::prompts::{
    render_recipe_prompt, render_similar_prompt, RECIPE_PROMPT_NAME, SIMILAR_PROMPT_NAME,
};
use crate::types::{Recipe, RecipeRequest, SimilarRecipes};

/// Generate a complete structured recipe for the given request.
pub async fn generate_recipe(
    provider: &dyn LlmProvider,
    request: &RecipeRequest,
) -> Result<Recipe, GenerateError> {
    let prompt = render_recipe_prompt(request);

    tracing::debug!(
        prompt_name = RECIPE_PROMPT_NAME,
        cuisine = %request.cuisine,
        diet = request.diet.as_str(),
        "Generating recipe"
    );

    let response = provider.complete(&prompt).await?;

    let recipe: Recipe = serde_json::from_str(strip_code_fences(&response))
        .map_err(|e| GenerateError::ParseError(format!("Recipe response: {}", e)))?;

    Ok(recipe)
}

/// Suggest three similar recipes, constrained to the request's cuisine and
/// dietary preference.
///
/// Enforces the schema contract that `local_names` pairs one-to-one with
/// `suggestions`.
pub async fn suggest_similar(
    provider: &dyn LlmProvider,
    current_name: &str,
    request: &RecipeRequest,
) -> Result<SimilarRecipes, GenerateError> {
    let prompt = render_similar_prompt(current_name, request);

    tracing::debug!(
        prompt_name = SIMILAR_PROMPT_NAME,
        current_recipe = current_name,
        "Generating similar-recipe suggestions"
    );

    let response = provider.complete(&prompt).await?;

    let similar: SimilarRecipes = serde_json::from_str(strip_code_fences(&response))
        .map_err(|e| GenerateError::ParseError(format!("Suggestions response: {}", e)))?;

    if similar.suggestions.len() != similar.local_names.len() {
        return Err(GenerateError::MismatchedSuggestions {
            suggestions: similar.suggestions.len(),
            local_names: similar.local_names.len(),
        });
    }

    Ok(similar)
}

/// Strip a surrounding markdown code fence, if present.
///
/// Models sometimes wrap JSON in ``` fences despite being asked for JSON
/// only.
fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };

    // Drop a language tag like "json" on the opening fence line
    match inner.split_once('\n') {
        Some((first_line, rest)) if !first_line.trim().starts_with('{') => rest.trim(),
        _ => inner.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use crate::types::{DietPreference, SkillLevel};

    fn request() -> RecipeRequest {
        RecipeRequest {
            ingredients: "eggs, flour".to_string(),
            cuisine: "Indian".to_string(),
            skill: SkillLevel::Easy,
            diet: DietPreference::Any,
        }
    }

    #[tokio::test]
    async fn test_generate_recipe_parses_response() {
        let provider = FakeProvider::with_recipe_responses();

        let recipe = generate_recipe(&provider, &request()).await.unwrap();

        assert_eq!(recipe.name, "Fluffy Masala Omelette");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.ingredients[1].quantity, "1 1/2 cups");
    }

    #[tokio::test]
    async fn test_generate_recipe_bad_json_is_parse_error() {
        let provider =
            FakeProvider::with_response("generate one complete recipe", "not json at all");

        let err = generate_recipe(&provider, &request()).await.unwrap_err();
        assert!(matches!(err, GenerateError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_suggest_similar_parses_response() {
        let provider = FakeProvider::with_recipe_responses();

        let similar = suggest_similar(&provider, "Fluffy Masala Omelette", &request())
            .await
            .unwrap();

        assert_eq!(similar.suggestions.len(), 3);
        assert_eq!(similar.local_names[0], "Anda Bhurji");
    }

    #[tokio::test]
    async fn test_suggest_similar_rejects_mismatched_lengths() {
        let provider = FakeProvider::with_response(
            "suggest three similar",
            r#"{"suggestions": ["A", "B", "C"], "local_names": ["a"]}"#,
        );

        let err = suggest_similar(&provider, "Some Dish", &request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::MismatchedSuggestions {
                suggestions: 3,
                local_names: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_generate_recipe_strips_code_fences() {
        let provider = FakeProvider::with_response(
            "generate one complete recipe",
            "```json\n{\"name\": \"N\", \"description\": \"d\", \"category\": \"c\", \"nutritional_tip\": \"t\", \"historical_fact\": \"h\", \"total_calories_kcal\": 1, \"prep_time_minutes\": 1, \"servings\": 1, \"ingredients\": [], \"instructions\": []}\n```",
        );

        let recipe = generate_recipe(&provider, &request()).await.unwrap();
        assert_eq!(recipe.name, "N");
    }

    #[test]
    fn test_strip_code_fences_passthrough() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_code_fences_without_language_tag() {
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```{\"a\": 1}```"), "{\"a\": 1}");
    }
}
