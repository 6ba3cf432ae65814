//! UpdateProfileHandler - command handler for profile updates.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::nutrition::{ProfileUpdate, StoredProfile};
use crate::ports::ProfileStore;

/// Command to update the biometric fields of a user's profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub update: ProfileUpdate,
}

pub struct UpdateProfileHandler {
    profiles: Arc<dyn ProfileStore>,
}

impl UpdateProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Validates and applies the update. `None` when the user has no
    /// profile row.
    pub async fn handle(
        &self,
        cmd: UpdateProfileCommand,
    ) -> Result<Option<StoredProfile>, DomainError> {
        cmd.update.validate()?;

        let updated = self.profiles.update(&cmd.user_id, &cmd.update).await?;
        if updated.is_some() {
            info!(user_id = %cmd.user_id, "profile updated");
        }
        Ok(updated)
    }
}
