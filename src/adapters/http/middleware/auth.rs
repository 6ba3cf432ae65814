//! Authentication middleware and extractors for axum.
//!
//! The middleware delegates to the `TokenVerifier` port, so it stays
//! provider-agnostic; handlers read the injected `AuthenticatedUser`
//! through the `RequireAuth` extractor.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenVerifier;

/// Auth middleware state - the token verifier port.
pub type AuthState = Arc<dyn TokenVerifier>;

/// Validates Bearer tokens and injects `AuthenticatedUser` into request
/// extensions. Requests without a valid token are rejected with 401
/// (503 when the verifier itself is down).
pub async fn auth_middleware(
    State(verifier): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        return auth_error_response(StatusCode::UNAUTHORIZED, "Missing authentication token");
    };

    match verifier.verify(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(AuthError::ServiceUnavailable(msg)) => {
            tracing::error!("auth service unavailable: {}", msg);
            auth_error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
        }
        Err(_) => auth_error_response(StatusCode::UNAUTHORIZED, "Invalid or expired token"),
    }
}

fn auth_error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": message,
            "code": "AUTH_ERROR"
        })),
    )
        .into_response()
}

/// Extractor that requires an authenticated user in request extensions.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let AuthRejection::Unauthenticated = self;
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "Authentication required",
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::StaticTokenVerifier;
    use crate::domain::foundation::UserId;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            Some("test@example.com".to_string()),
        )
    }

    #[tokio::test]
    async fn verifier_returns_user_for_known_token() {
        let verifier: Arc<dyn TokenVerifier> =
            Arc::new(StaticTokenVerifier::new().with_user("valid-token", test_user()));

        let result = verifier.verify("valid-token").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn verifier_rejects_unknown_token() {
        let verifier: Arc<dyn TokenVerifier> = Arc::new(StaticTokenVerifier::new());

        let result = verifier.verify("bogus").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let mut request = Request::builder().body(()).unwrap();
        request.extensions_mut().insert(test_user());
        let (mut parts, _) = request.into_parts();

        let result = RequireAuth::from_request_parts(&mut parts, &()).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().0.id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn require_auth_rejects_when_no_user() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request = Request::builder().body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = RequireAuth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }
}
