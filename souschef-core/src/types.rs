//! Recipe data model.
//!
//! Field names mirror the JSON schema the generation prompt asks the model
//! to fill, so responses deserialize directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single ingredient with its free-text quantity (e.g., "1 cup", "500g",
/// "a pinch"). The quantity carries no format invariant; scaling parses it
/// best-effort and passes it through verbatim when parsing fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub quantity: String,
}

/// A complete structured recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Meal category, e.g., "Main Course", "Dessert".
    pub category: String,
    pub nutritional_tip: String,
    pub historical_fact: String,
    /// Estimated calories (kcal) per serving.
    pub total_calories_kcal: u32,
    pub prep_time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

/// Similar-recipe suggestions: English titles paired with local names.
/// The two lists are expected to have the same length and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarRecipes {
    pub suggestions: Vec<String>,
    pub local_names: Vec<String>,
}

/// Dietary preference constraint for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    Any,
    Vegetarian,
    NonVegetarian,
}

impl DietPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Any => "Any",
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::NonVegetarian => "Non-Vegetarian",
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(DietPreference::Any),
            "vegetarian" | "veg" => Ok(DietPreference::Vegetarian),
            "non-vegetarian" | "nonvegetarian" | "non-veg" => Ok(DietPreference::NonVegetarian),
            other => Err(format!("Unknown diet preference: {}", other)),
        }
    }
}

/// Cooking skill level for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Easy,
    Medium,
    Hard,
}

impl SkillLevel {
    /// Full label including the difficulty hint shown to the model.
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Easy => "Easy (Quick & simple)",
            SkillLevel::Medium => "Medium (Some technique required)",
            SkillLevel::Hard => "Hard (Chef-level challenge)",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(SkillLevel::Easy),
            "medium" => Ok(SkillLevel::Medium),
            "hard" => Ok(SkillLevel::Hard),
            other => Err(format!("Unknown skill level: {}", other)),
        }
    }
}

/// User inputs for recipe generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Free-text main ingredient list, e.g., "eggs, flour".
    pub ingredients: String,
    /// Cuisine label, e.g., "Indian", "Italian", or "Any".
    pub cuisine: String,
    pub skill: SkillLevel,
    pub diet: DietPreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_round_trips_through_json() {
        let recipe = Recipe {
            name: "Masala Omelette".to_string(),
            description: "A spiced breakfast omelette.".to_string(),
            category: "Breakfast".to_string(),
            nutritional_tip: "Eggs are a complete protein.".to_string(),
            historical_fact: "A staple of Indian railway canteens.".to_string(),
            total_calories_kcal: 320,
            prep_time_minutes: 15,
            servings: 2,
            ingredients: vec![Ingredient {
                item: "eggs".to_string(),
                quantity: "4".to_string(),
            }],
            instructions: vec!["Whisk the eggs.".to_string()],
        };

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_recipe_deserializes_original_field_names() {
        let json = r#"{
            "name": "Test",
            "description": "d",
            "category": "Main Course",
            "nutritional_tip": "t",
            "historical_fact": "f",
            "total_calories_kcal": 500,
            "prep_time_minutes": 30,
            "servings": 4,
            "ingredients": [{"item": "flour", "quantity": "2 cups"}],
            "instructions": ["Mix."]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients[0].quantity, "2 cups");
    }

    #[test]
    fn test_diet_preference_from_str() {
        assert_eq!("vegetarian".parse(), Ok(DietPreference::Vegetarian));
        assert_eq!("Non-Veg".parse(), Ok(DietPreference::NonVegetarian));
        assert_eq!("any".parse(), Ok(DietPreference::Any));
        assert!("pescatarian".parse::<DietPreference>().is_err());
    }

    #[test]
    fn test_skill_level_labels() {
        assert_eq!(SkillLevel::Easy.label(), "Easy (Quick & simple)");
        assert_eq!("HARD".parse(), Ok(SkillLevel::Hard));
    }
}
