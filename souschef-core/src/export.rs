//! Plain-text recipe export.

use std::fmt::Write;

use crate::types::Recipe;

/// Format a recipe into a readable text document for download/export.
pub fn format_recipe_text(recipe: &Recipe) -> String {
    let mut text = String::new();

    // Infallible for String targets
    let _ = writeln!(text, "--- RECIPE: {} ---", recipe.name.to_uppercase());
    let _ = writeln!(text);
    let _ = writeln!(text, "Description: {}", recipe.description);
    let _ = writeln!(text, "Category: {}", recipe.category);
    let _ = writeln!(
        text,
        "Calories Per Serving: {} kcal",
        recipe.total_calories_kcal
    );
    let _ = writeln!(text, "Historical Fact: {}", recipe.historical_fact);
    let _ = writeln!(text, "Nutritional Tip: {}", recipe.nutritional_tip);
    let _ = writeln!(text, "Time: {} minutes", recipe.prep_time_minutes);
    let _ = writeln!(text, "Servings: {}", recipe.servings);

    let _ = writeln!(text);
    let _ = writeln!(text, "--- INGREDIENTS ---");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(text, "- {} of {}", ingredient.quantity, ingredient.item);
    }

    let _ = writeln!(text);
    let _ = writeln!(text, "--- INSTRUCTIONS ---");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(text, "{}. {}", i + 1, step);
    }

    text
}

/// File name for an exported recipe: lowercased, spaces replaced with
/// underscores, e.g. "Masala Omelette" -> "masala_omelette_original.txt".
pub fn export_file_name(recipe_name: &str) -> String {
    format!("{}_original.txt", recipe_name.replace(' ', "_").to_lowercase())
}
