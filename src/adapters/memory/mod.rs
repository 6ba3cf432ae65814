//! In-memory port implementations.
//!
//! Used by tests and local development runs; every store keeps its state
//! behind a mutex so the adapters satisfy the `Send + Sync` port bounds.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, DomainError, PlanId, UserId};
use crate::domain::nutrition::{ProfileUpdate, StoredProfile};
use crate::domain::planning::{MealPlan, PlanDraft, RecipeCandidate};
use crate::ports::{PlanRepository, ProfileStore, RecipeCatalog, TokenVerifier};

/// In-memory ProfileStore keyed by user id.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<HashMap<String, StoredProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a profile for a user.
    pub fn insert(&self, user_id: &UserId, profile: StoredProfile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(user_id.as_str().to_string(), profile);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn fetch(&self, user_id: &UserId) -> Result<Option<StoredProfile>, DomainError> {
        Ok(self.profiles.lock().unwrap().get(user_id.as_str()).cloned())
    }

    async fn update(
        &self,
        user_id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<StoredProfile>, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.get_mut(user_id.as_str()) {
            Some(profile) => {
                profile.display_name = update.display_name.clone();
                profile.weight_kg = update.weight_kg;
                profile.height_cm = update.height_cm;
                profile.age = update.age;
                profile.activity_level = update.activity_level;
                profile.fitness_goal = update.fitness_goal;
                Ok(Some(profile.clone()))
            }
            None => Ok(None),
        }
    }
}

/// In-memory RecipeCatalog preserving insertion order.
#[derive(Default)]
pub struct InMemoryRecipeCatalog {
    candidates: Mutex<Vec<RecipeCandidate>>,
}

impl InMemoryRecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a candidate; fetch order follows insertion order.
    pub fn insert(&self, candidate: RecipeCandidate) {
        self.candidates.lock().unwrap().push(candidate);
    }
}

#[async_trait]
impl RecipeCatalog for InMemoryRecipeCatalog {
    async fn fetch_candidates(&self) -> Result<Vec<RecipeCandidate>, DomainError> {
        Ok(self.candidates.lock().unwrap().clone())
    }
}

/// In-memory PlanRepository assigning sequential plan ids.
#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: Mutex<Vec<MealPlan>>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every saved plan.
    pub fn saved_plans(&self) -> Vec<MealPlan> {
        self.plans.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn save(&self, user_id: &UserId, draft: &PlanDraft) -> Result<PlanId, DomainError> {
        // The mutex plays the role of the per-user lock: saves are serialized.
        let mut plans = self.plans.lock().unwrap();
        let plan_id = PlanId::from_i64(plans.len() as i64 + 1);
        plans.push(MealPlan::from_draft(plan_id, user_id.clone(), draft.clone()));
        Ok(plan_id)
    }
}

/// TokenVerifier over a fixed token-to-user table.
#[derive(Default)]
pub struct StaticTokenVerifier {
    users: HashMap<String, AuthenticatedUser>,
}

impl StaticTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token for a user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.users
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
