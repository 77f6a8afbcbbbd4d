//! Proportional recipe scaling.
//!
//! Rescales ingredient quantities and per-serving calories for a different
//! serving count. Quantities that don't parse simply don't scale - their
//! original text passes through unchanged so rendering never halts.

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::quantity::{format_quantity, parse_quantity};
use crate::types::Ingredient;

/// An ingredient with its display quantity after scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledIngredient {
    pub item: String,
    pub display_quantity: String,
}

/// Compute the scale factor `new_servings / original_servings`.
///
/// Zero servings on either side is a caller precondition violation.
pub fn scale_factor(original_servings: u32, new_servings: u32) -> Result<f64, ScaleError> {
    if original_servings == 0 {
        return Err(ScaleError::InvalidServings(original_servings));
    }
    if new_servings == 0 {
        return Err(ScaleError::InvalidServings(new_servings));
    }
    Ok(f64::from(new_servings) / f64::from(original_servings))
}

/// Scale a single quantity string by a factor.
///
/// Returns the original string verbatim (original casing included) when the
/// quantity has no parseable magnitude or the factor is 1.0; the scaled path
/// formats with the parser's lowercased unit. That casing asymmetry is
/// deliberate, observable behavior.
pub fn scale_quantity(quantity: &str, factor: f64) -> String {
    let parsed = parse_quantity(quantity);

    match parsed.magnitude {
        Some(magnitude) if factor != 1.0 => {
            format_quantity(Some(magnitude * factor), &parsed.unit)
        }
        _ => quantity.to_string(),
    }
}

/// Scale every ingredient's quantity by a factor.
///
/// Each ingredient is handled independently; output preserves input order
/// and length.
pub fn scale_ingredients(ingredients: &[Ingredient], factor: f64) -> Vec<ScaledIngredient> {
    ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            item: ingredient.item.clone(),
            display_quantity: scale_quantity(&ingredient.quantity, factor),
        })
        .collect()
}

/// Adjust per-serving calories for a new serving count.
///
/// Applies `kcal * original / new`: the same pot of food split across more
/// plates means fewer calories per plate.
pub fn scale_calories(
    total_calories_kcal: u32,
    original_servings: u32,
    new_servings: u32,
) -> Result<u32, ScaleError> {
    let inverse = scale_factor(new_servings, original_servings)?;
    Ok((f64::from(total_calories_kcal) * inverse) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(item: &str, quantity: &str) -> Ingredient {
        Ingredient {
            item: item.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_scale_factor_rejects_zero_servings() {
        assert_eq!(scale_factor(0, 4), Err(ScaleError::InvalidServings(0)));
        assert_eq!(scale_factor(4, 0), Err(ScaleError::InvalidServings(0)));
    }

    #[test]
    fn test_scale_factor_positive_and_finite_over_slider_range() {
        for original in 1..=12u32 {
            for new in 1..=12u32 {
                let factor = scale_factor(original, new).unwrap();
                assert!(factor > 0.0 && factor.is_finite());
            }
        }
    }

    #[test]
    fn test_scale_quantity_doubles() {
        assert_eq!(scale_quantity("2 cups flour", 2.0), "4 cups flour");
        assert_eq!(scale_quantity("1 1/2 cups", 2.0), "3 cups");
    }

    #[test]
    fn test_scale_quantity_halves_to_fraction() {
        assert_eq!(scale_quantity("1 cup", 0.5), "1/2 cup");
        assert_eq!(scale_quantity("1/2 cup", 0.5), "1/4 cup");
    }

    #[test]
    fn test_unit_factor_bypasses_formatting() {
        // Factor 1.0 returns the input untouched, original casing included.
        assert_eq!(scale_quantity("2 Cups Flour", 1.0), "2 Cups Flour");
        assert_eq!(scale_quantity("a pinch", 1.0), "a pinch");
    }

    #[test]
    fn test_scaled_quantity_lowercases_unit() {
        assert_eq!(scale_quantity("2 Cups", 2.0), "4 cups");
    }

    #[test]
    fn test_unparseable_quantity_passes_through_at_any_factor() {
        assert_eq!(scale_quantity("a pinch", 3.0), "a pinch");
        assert_eq!(scale_quantity("to taste", 0.5), "to taste");
        assert_eq!(scale_quantity("1/0 cups", 2.0), "1/0 cups");
    }

    #[test]
    fn test_inverse_factors_round_trip_within_tolerance() {
        // Scale by f, then by 1/f, through the full parse/format cycle.
        for factor in [2.0, 3.0, 4.0, 0.5] {
            let scaled = scale_quantity("1 1/2 cups", factor);
            let back = scale_quantity(&scaled, 1.0 / factor);
            let reparsed = parse_quantity(&back);
            let magnitude = reparsed.magnitude.unwrap();
            assert!(
                (magnitude - 1.5).abs() < 0.01,
                "factor {}: got {} back",
                factor,
                magnitude
            );
        }
    }

    #[test]
    fn test_scale_ingredients_preserves_order_and_length() {
        let ingredients = vec![
            ingredient("flour", "2 cups"),
            ingredient("salt", "a pinch"),
            ingredient("butter", "1/2 cup"),
        ];

        let scaled = scale_ingredients(&ingredients, 2.0);

        assert_eq!(scaled.len(), 3);
        assert_eq!(scaled[0].item, "flour");
        assert_eq!(scaled[0].display_quantity, "4 cups");
        assert_eq!(scaled[1].display_quantity, "a pinch");
        assert_eq!(scaled[2].display_quantity, "1 cup");
    }

    #[test]
    fn test_end_to_end_doubling() {
        // Recipe serves 4, user rescales to 8.
        let factor = scale_factor(4, 8).unwrap();
        assert_eq!(factor, 2.0);
        assert_eq!(scale_quantity("2 cups flour", factor), "4 cups flour");
    }

    #[test]
    fn test_scale_calories() {
        // 800 kcal per serving at 4 servings drops to 400 at 8.
        assert_eq!(scale_calories(800, 4, 8).unwrap(), 400);
        assert_eq!(scale_calories(800, 4, 4).unwrap(), 800);
        assert_eq!(scale_calories(500, 4, 3).unwrap(), 666);
    }

    #[test]
    fn test_scale_calories_rejects_zero_servings() {
        assert!(scale_calories(800, 0, 4).is_err());
        assert!(scale_calories(800, 4, 0).is_err());
    }
}
