//! PlanRepository port for meal plan persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlanId, UserId};
use crate::domain::planning::PlanDraft;

/// Repository for generated meal plans.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Persist the plan header and one row per filled slot as a single
    /// logical transaction, returning the assigned plan id.
    ///
    /// Implementations must not leave a header behind when a slot write
    /// fails, and must serialize concurrent saves for the same user.
    async fn save(&self, user_id: &UserId, draft: &PlanDraft) -> Result<PlanId, DomainError>;
}
