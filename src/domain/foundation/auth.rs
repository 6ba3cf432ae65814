//! Authentication types for the domain layer.
//!
//! Token verification itself is an external collaborator behind the
//! `TokenVerifier` port; these types carry only what the application uses.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// User's email address from the token claims, if present.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }
}

/// Errors surfaced by token verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No token was supplied with the request.
    #[error("Missing authentication token")]
    MissingToken,

    /// The token is malformed, expired, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The verification service could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_carries_id_and_email() {
        let user = AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            Some("test@example.com".to_string()),
        );
        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn auth_error_displays_correctly() {
        assert_eq!(format!("{}", AuthError::MissingToken), "Missing authentication token");
        assert_eq!(
            format!("{}", AuthError::service_unavailable("connection refused")),
            "Auth service unavailable: connection refused"
        );
    }
}
