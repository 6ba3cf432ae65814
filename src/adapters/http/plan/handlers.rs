//! HTTP handlers for plan endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::plan::{GeneratePlanCommand, GeneratePlanHandler};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, GeneratePlanResponse};

/// Handler state for plan routes.
#[derive(Clone)]
pub struct PlanHandlers {
    generate_handler: Arc<GeneratePlanHandler>,
}

impl PlanHandlers {
    pub fn new(generate_handler: Arc<GeneratePlanHandler>) -> Self {
        Self { generate_handler }
    }
}

/// POST /api/plans - Generate a one-day meal plan for the caller.
pub async fn generate_plan(
    State(handlers): State<PlanHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let cmd = GeneratePlanCommand { user_id: user.id };

    match handlers.generate_handler.handle(cmd).await {
        Ok(result) => {
            let response = GeneratePlanResponse::from(&result.plan);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => plan_error_response(e),
    }
}

/// Maps domain errors to status codes. Only IncompleteProfile is
/// user-correctable (400); a missing profile is 404; everything else,
/// including a thin catalog, is an operational 500.
fn plan_error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::IncompleteProfile => StatusCode::BAD_REQUEST,
        ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("plan generation failed: {}", err);
        ErrorResponse::new("Failed to generate meal plan due to an internal server error")
    } else {
        ErrorResponse::new(err.message)
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_profile_maps_to_bad_request() {
        let err = DomainError::incomplete_profile(&["age"]);
        let response = plan_error_response(err);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn profile_not_found_maps_to_not_found() {
        let err = DomainError::new(ErrorCode::ProfileNotFound, "no profile");
        let response = plan_error_response(err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn insufficient_catalog_maps_to_internal_error() {
        let err = DomainError::new(ErrorCode::InsufficientCatalog, "2 recipes");
        let response = plan_error_response(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_error_maps_to_internal_error() {
        let err = DomainError::database("connection reset");
        let response = plan_error_response(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
