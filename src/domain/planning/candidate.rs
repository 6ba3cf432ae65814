//! Recipe candidates eligible for slot assignment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RecipeId;

/// A recipe annotated with its total nutritional content.
///
/// Totals are aggregated by the catalog's query layer (per-100g nutrient
/// values scaled by ingredient quantity, summed per recipe). Immutable
/// snapshot for the duration of one plan-generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    pub recipe_id: RecipeId,
    pub name: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

#[cfg(test)]
impl RecipeCandidate {
    /// Test fixture with only the calorie total distinguished.
    pub fn fixture(id: i64, calories: f64) -> Self {
        Self {
            recipe_id: RecipeId::from_i64(id),
            name: format!("recipe-{}", id),
            total_calories: calories,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fats: 0.0,
        }
    }
}
