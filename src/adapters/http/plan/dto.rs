//! Request/response DTOs for plan endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::nutrition::NutritionTargets;
use crate::domain::planning::{MealPlan, MealSlot, RecipeCandidate};

/// Daily targets as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsDto {
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fats_g: i32,
}

impl From<NutritionTargets> for TargetsDto {
    fn from(t: NutritionTargets) -> Self {
        Self {
            calories: t.calories,
            protein_g: t.protein_g,
            carbs_g: t.carbs_g,
            fats_g: t.fats_g,
        }
    }
}

/// One filled meal slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMealDto {
    pub slot: String,
    pub recipe_id: i64,
    pub name: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

impl PlannedMealDto {
    fn new(slot: MealSlot, candidate: &RecipeCandidate) -> Self {
        Self {
            slot: slot.as_str().to_string(),
            recipe_id: candidate.recipe_id.as_i64(),
            name: candidate.name.clone(),
            total_calories: candidate.total_calories,
            total_protein: candidate.total_protein,
            total_carbs: candidate.total_carbs,
            total_fats: candidate.total_fats,
        }
    }
}

/// Response body for successful plan generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanResponse {
    pub message: String,
    pub plan_id: i64,
    pub targets: TargetsDto,
    pub meals: Vec<PlannedMealDto>,
}

impl From<&MealPlan> for GeneratePlanResponse {
    fn from(plan: &MealPlan) -> Self {
        Self {
            message: "Meal plan generated successfully".to_string(),
            plan_id: plan.plan_id.as_i64(),
            targets: plan.targets.into(),
            meals: plan
                .daily_plan
                .assigned()
                .map(|(slot, candidate)| PlannedMealDto::new(slot, candidate))
                .collect(),
        }
    }
}

/// Generic error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
