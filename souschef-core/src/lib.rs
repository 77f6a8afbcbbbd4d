//! souschef-core: recipe generation and proportional quantity scaling.
//!
//! The scaling engine is the heart of the crate: [`quantity`] parses
//! free-text quantity strings into magnitudes and units, [`scaling`] applies
//! a servings-derived factor and formats the result for display. Around it
//! sit the structured recipe model ([`types`]), LLM-backed generation
//! ([`generate`], [`llm`], [`prompts`]), and plain-text export ([`export`]).

pub mod error;
pub mod export;
pub mod generate;
pub mod llm;
pub mod prompts;
pub mod quantity;
pub mod scaling;
pub mod types;

pub use error::{GenerateError, ScaleError};
pub use export::{export_file_name, format_recipe_text};
pub use generate::{generate_recipe, suggest_similar};
pub use quantity::{format_quantity, parse_quantity, ParsedQuantity};
pub use scaling::{
    scale_calories, scale_factor, scale_ingredients, scale_quantity, ScaledIngredient,
};
pub use types::{DietPreference, Ingredient, Recipe, RecipeRequest, SimilarRecipes, SkillLevel};
