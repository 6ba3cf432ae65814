//! ProfileStore port for user profile persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::nutrition::{ProfileUpdate, StoredProfile};

/// Store for user biometric profiles.
///
/// Profiles are created by the surrounding registration flow; this core
/// only reads them and applies field updates.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the stored profile for a user. `None` when the user has no row.
    async fn fetch(&self, user_id: &UserId) -> Result<Option<StoredProfile>, DomainError>;

    /// Apply a profile update, returning the updated profile.
    /// `None` when the user has no row to update.
    async fn update(
        &self,
        user_id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<StoredProfile>, DomainError>;
}
