//! Planning module - greedy recipe-to-slot assignment.

mod candidate;
mod plan;
mod selector;
mod slot;

pub use candidate::RecipeCandidate;
pub use plan::{DailyPlan, MealPlan, PlanDraft};
pub use selector::select_meals;
pub use slot::MealSlot;
