//! Prompt templates for recipe generation and similar-recipe suggestions.

use crate::types::{DietPreference, RecipeRequest};

/// Prompt name for cache keys and logging.
pub const RECIPE_PROMPT_NAME: &str = "generate_recipe";

/// Prompt name for cache keys and logging.
pub const SIMILAR_PROMPT_NAME: &str = "similar_recipes";

/// Vegetarian substitution protocol, appended when the diet is Vegetarian.
const VEGETARIAN_INSTRUCTION: &str = "You MUST adhere to strict vegetarian protocol. \
The recipe and all its ingredients MUST contain absolutely NO meat, poultry, fish, \
seafood, or animal-derived gelatin. Only plant-based ingredients and dairy/eggs \
(since eggs are a user input, they are explicitly allowed if provided). If the user \
provided a non-vegetarian ingredient (like 'chicken') but selected 'Vegetarian', you \
MUST ignore the non-veg ingredient and substitute it with a plant-based alternative \
(like 'paneer' or 'tofu') appropriate for the cuisine, and mention the substitution \
in the recipe description.";

/// Render the recipe generation prompt.
///
/// Spells out the exact JSON shape so the response deserializes straight
/// into [`crate::types::Recipe`].
pub fn render_recipe_prompt(request: &RecipeRequest) -> String {
    let diet_instruction = match request.diet {
        DietPreference::Vegetarian => VEGETARIAN_INSTRUCTION,
        _ => "",
    };

    format!(
        r#"You are 'Sous Chef AI', an expert culinary assistant specialized in providing perfectly structured, organized, and detailed recipes. Your task is to generate a complete, authentic, and delicious recipe based on the user's input. Crucially, all steps in the instructions list must be highly detailed, precise, and verbose, including specific temperature settings, pan sizes (if applicable), visual cues, and exact timing where possible. Avoid vague terms like 'cook until done.' Provide the estimated Total Calories (kcal) per serving. Ensure all fields are filled.
{diet_instruction}

Please generate one complete recipe.
- MAIN INGREDIENTS: {ingredients}
- CUISINE: {cuisine}
- COOKING SKILL LEVEL: {skill}
- DIETARY PREFERENCE: {diet}

Ensure the recipe is creative, feasible, and uses the main ingredients provided while strictly adhering to the dietary preference.

Respond with JSON only, no other text, in exactly this shape:
{{"name": "...", "description": "...", "category": "...", "nutritional_tip": "...", "historical_fact": "...", "total_calories_kcal": 0, "prep_time_minutes": 0, "servings": 0, "ingredients": [{{"item": "...", "quantity": "..."}}], "instructions": ["..."]}}"#,
        diet_instruction = diet_instruction,
        ingredients = request.ingredients,
        cuisine = request.cuisine,
        skill = request.skill.label(),
        diet = request.diet.as_str(),
    )
}

/// Render the similar-recipe suggestion prompt.
pub fn render_similar_prompt(current_name: &str, request: &RecipeRequest) -> String {
    let diet_constraint = match request.diet {
        DietPreference::Vegetarian => "All suggested recipes MUST be strictly vegetarian. ",
        _ => "",
    };

    format!(
        r#"You are a creative recipe curator. Your task is to suggest three unique recipe titles that are similar in style or ingredients to the recipe provided. Crucially, all three suggestions must belong to the same cuisine as specified. For each suggested English title, you must also provide its local name or the most common native name. Do NOT suggest the same recipe title that is provided. {diet_constraint}

The current recipe is '{current_name}'.
- Main Ingredients: {ingredients}
- CUISINE: {cuisine}
- DIETARY PREFERENCE: {diet}

Suggest three similar recipes from the {cuisine} cuisine, ensuring they are {diet} appropriate.

Respond with JSON only, no other text, with 'local_names' in the same length and order as 'suggestions':
{{"suggestions": ["...", "...", "..."], "local_names": ["...", "...", "..."]}}"#,
        diet_constraint = diet_constraint,
        current_name = current_name,
        ingredients = request.ingredients,
        cuisine = request.cuisine,
        diet = request.diet.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkillLevel;

    fn request(diet: DietPreference) -> RecipeRequest {
        RecipeRequest {
            ingredients: "chicken breast, canned tomatoes, basil".to_string(),
            cuisine: "Italian".to_string(),
            skill: SkillLevel::Medium,
            diet,
        }
    }

    #[test]
    fn test_recipe_prompt_includes_inputs() {
        let prompt = render_recipe_prompt(&request(DietPreference::Any));

        assert!(prompt.contains("chicken breast, canned tomatoes, basil"));
        assert!(prompt.contains("CUISINE: Italian"));
        assert!(prompt.contains("Medium (Some technique required)"));
        assert!(prompt.contains("total_calories_kcal"));
        assert!(!prompt.contains("vegetarian protocol"));
    }

    #[test]
    fn test_recipe_prompt_vegetarian_protocol() {
        let prompt = render_recipe_prompt(&request(DietPreference::Vegetarian));
        assert!(prompt.contains("strict vegetarian protocol"));
        assert!(prompt.contains("'paneer' or 'tofu'"));
    }

    #[test]
    fn test_similar_prompt_includes_current_recipe() {
        let prompt = render_similar_prompt("Chicken Cacciatore", &request(DietPreference::Any));

        assert!(prompt.contains("'Chicken Cacciatore'"));
        assert!(prompt.contains("Italian cuisine"));
        assert!(prompt.contains("local_names"));
    }

    #[test]
    fn test_similar_prompt_diet_constraint() {
        let prompt = render_similar_prompt("Paneer Tikka", &request(DietPreference::Vegetarian));
        assert!(prompt.contains("MUST be strictly vegetarian"));
    }
}
