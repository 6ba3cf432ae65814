//! Meal plan handlers.

mod generate_plan;

pub use generate_plan::{GeneratePlanCommand, GeneratePlanHandler, GeneratePlanResult};
