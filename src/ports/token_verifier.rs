//! TokenVerifier port for the external authentication collaborator.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Verifies bearer tokens issued by the external auth provider.
///
/// Verification is a black box to this core; the middleware only needs the
/// resulting identity.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a raw bearer token and return the authenticated user.
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
