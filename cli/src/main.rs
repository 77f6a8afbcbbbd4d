use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use souschef_core::llm::create_cached_provider_from_env;
use souschef_core::{
    export_file_name, format_recipe_text, generate_recipe, scale_calories, scale_factor,
    scale_ingredients, suggest_similar, DietPreference, Recipe, RecipeRequest, SkillLevel,
};

#[derive(Parser)]
#[command(name = "souschef")]
#[command(about = "Generate, rescale, and export recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from your main ingredients
    Generate {
        /// Main ingredients, e.g. "eggs, flour"
        ingredients: String,
        /// Preferred cuisine, e.g. "Indian", "Italian"
        #[arg(long, default_value = "Any")]
        cuisine: String,
        /// Cooking skill level: easy, medium, or hard
        #[arg(long, default_value = "easy")]
        skill: SkillLevel,
        /// Dietary preference: any, vegetarian, or non-vegetarian
        #[arg(long, default_value = "any")]
        diet: DietPreference,
        /// Write the structured recipe JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rescale a saved recipe to a new serving count
    Scale {
        /// Path to a recipe JSON file (from `generate --output`)
        #[arg(long)]
        recipe: PathBuf,
        /// Desired serving count
        #[arg(long)]
        servings: u32,
    },
    /// Export a saved recipe as a readable text file
    Export {
        /// Path to a recipe JSON file
        #[arg(long)]
        recipe: PathBuf,
        /// Output path (default: <recipe_name>_original.txt)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            ingredients,
            cuisine,
            skill,
            diet,
            output,
        } => {
            generate(ingredients, cuisine, skill, diet, output).await?;
        }
        Commands::Scale { recipe, servings } => {
            scale(&recipe, servings)?;
        }
        Commands::Export { recipe, output } => {
            export(&recipe, output)?;
        }
    }

    Ok(())
}

async fn generate(
    ingredients: String,
    cuisine: String,
    skill: SkillLevel,
    diet: DietPreference,
    output: Option<PathBuf>,
) -> Result<()> {
    let provider = create_cached_provider_from_env().context("Failed to configure LLM provider")?;

    let request = RecipeRequest {
        ingredients,
        cuisine,
        skill,
        diet,
    };

    let recipe = generate_recipe(provider.as_ref(), &request)
        .await
        .context("Recipe generation failed")?;

    print_recipe(&recipe, &request);

    // Suggestion failures shouldn't lose the generated recipe
    match suggest_similar(provider.as_ref(), &recipe.name, &request).await {
        Ok(similar) => {
            println!("\nSimilar recipes you might like:");
            for (title, local) in similar.suggestions.iter().zip(&similar.local_names) {
                println!("  - {} ({})", title, local);
            }
        }
        Err(e) => eprintln!("Could not fetch similar recipes: {}", e),
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&recipe)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write recipe to {}", path.display()))?;
        println!("\nSaved recipe to: {}", path.display());
    }

    Ok(())
}

fn scale(recipe_path: &Path, servings: u32) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;

    let factor = scale_factor(recipe.servings, servings)?;
    let scaled = scale_ingredients(&recipe.ingredients, factor);
    let calories = scale_calories(recipe.total_calories_kcal, recipe.servings, servings)?;

    println!("{} - scaled to serve {}", recipe.name, servings);
    if servings != recipe.servings {
        println!(
            "Scaling factor: {:.2} (originally {} servings)",
            factor, recipe.servings
        );
    }
    println!("Calories per serving: {} kcal", calories);
    println!("\nIngredients:");
    for ingredient in &scaled {
        println!("  - {}: {}", ingredient.item, ingredient.display_quantity);
    }

    Ok(())
}

fn export(recipe_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;

    let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(&recipe.name)));
    let text = format_recipe_text(&recipe);

    fs::write(&path, &text)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    println!("Exported recipe to: {} ({} bytes)", path.display(), text.len());

    Ok(())
}

fn load_recipe(path: &Path) -> Result<Recipe> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid recipe JSON: {}", path.display()))
}

fn print_recipe(recipe: &Recipe, request: &RecipeRequest) {
    println!("{}", recipe.name);
    println!(
        "Category: {} | Cuisine: {} | Diet: {}",
        recipe.category, request.cuisine, request.diet
    );
    println!("\n{}", recipe.description);
    println!(
        "\nTime: {} min | Serves: {} | Calories: {} kcal/serving",
        recipe.prep_time_minutes, recipe.servings, recipe.total_calories_kcal
    );
    println!("Tip: {}", recipe.nutritional_tip);

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}: {}", ingredient.item, ingredient.quantity);
    }

    println!("\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    println!("\nHistorical fact: {}", recipe.historical_fact);
}
