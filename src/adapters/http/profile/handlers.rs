//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::plan::ErrorResponse;
use crate::application::handlers::profile::{
    GetProfileHandler, GetProfileQuery, UpdateProfileCommand, UpdateProfileHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ProfileResponse, UpdateProfileRequest};

/// Handler state for profile routes.
#[derive(Clone)]
pub struct ProfileHandlers {
    get_handler: Arc<GetProfileHandler>,
    update_handler: Arc<UpdateProfileHandler>,
}

impl ProfileHandlers {
    pub fn new(get_handler: Arc<GetProfileHandler>, update_handler: Arc<UpdateProfileHandler>) -> Self {
        Self {
            get_handler,
            update_handler,
        }
    }
}

/// GET /api/profile - Read the caller's stored profile.
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetProfileQuery { user_id: user.id };

    match handlers.get_handler.handle(query).await {
        Ok(Some(profile)) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("User profile not found")),
        )
            .into_response(),
        Err(e) => profile_error_response(e),
    }
}

/// PUT /api/profile - Update the caller's stored profile.
pub async fn update_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdateProfileRequest>,
) -> Response {
    let cmd = UpdateProfileCommand {
        user_id: user.id,
        update: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(Some(profile)) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("User profile not found, could not update")),
        )
            .into_response(),
        Err(e) => profile_error_response(e),
    }
}

fn profile_error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("profile request failed: {}", err);
        ErrorResponse::new("Failed to process profile request")
    } else {
        ErrorResponse::new(err.message)
    };

    (status, Json(body)).into_response()
}
