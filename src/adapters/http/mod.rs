//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod plan;
pub mod profile;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};

use crate::ports::TokenVerifier;

use middleware::auth_middleware;
use plan::{plan_routes, PlanHandlers};
use profile::{profile_routes, ProfileHandlers};

/// Composes the API router: all routes sit behind the auth middleware.
pub fn api_router(
    plan_handlers: PlanHandlers,
    profile_handlers: ProfileHandlers,
    verifier: Arc<dyn TokenVerifier>,
) -> Router {
    Router::new()
        .nest("/api/plans", plan_routes(plan_handlers))
        .nest("/api/profile", profile_routes(profile_handlers))
        .layer(from_fn_with_state(verifier, auth_middleware))
}
