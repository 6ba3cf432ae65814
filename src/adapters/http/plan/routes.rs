//! HTTP routes for plan endpoints.

use axum::{routing::post, Router};

use super::handlers::{generate_plan, PlanHandlers};

/// Creates the plan router.
pub fn plan_routes(handlers: PlanHandlers) -> Router {
    Router::new()
        .route("/", post(generate_plan))
        .with_state(handlers)
}
