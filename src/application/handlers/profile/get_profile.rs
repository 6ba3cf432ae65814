//! GetProfileHandler - query handler for reading a stored profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::nutrition::StoredProfile;
use crate::ports::ProfileStore;

/// Query for the stored profile of a user.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileStore>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Option<StoredProfile>, DomainError> {
        self.profiles.fetch(&query.user_id).await
    }
}
