//! HTTP adapter for meal plan endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, GeneratePlanResponse, PlannedMealDto, TargetsDto};
pub use handlers::PlanHandlers;
pub use routes::plan_routes;
