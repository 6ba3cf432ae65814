//! GeneratePlanHandler - assembles a one-day meal plan for a user.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::nutrition::NutritionTargets;
use crate::domain::planning::{select_meals, MealPlan, PlanDraft};
use crate::ports::{PlanRepository, ProfileStore, RecipeCatalog};

/// Fewer candidates than this and a full day cannot be planned.
const MIN_CATALOG_SIZE: usize = 3;

/// Command to generate a plan for a user.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub user_id: UserId,
}

/// Result of successful plan generation.
#[derive(Debug, Clone)]
pub struct GeneratePlanResult {
    pub plan: MealPlan,
}

/// Handler orchestrating profile lookup, target computation, greedy
/// selection, and persistence.
pub struct GeneratePlanHandler {
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn RecipeCatalog>,
    plans: Arc<dyn PlanRepository>,
}

impl GeneratePlanHandler {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        catalog: Arc<dyn RecipeCatalog>,
        plans: Arc<dyn PlanRepository>,
    ) -> Self {
        Self {
            profiles,
            catalog,
            plans,
        }
    }

    pub async fn handle(&self, cmd: GeneratePlanCommand) -> Result<GeneratePlanResult, DomainError> {
        // 1. Fetch the stored profile and require completeness.
        let stored = self
            .profiles
            .fetch(&cmd.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    format!("No profile stored for user {}", cmd.user_id),
                )
            })?;

        let profile = stored.try_into_complete().map_err(|e| {
            warn!(user_id = %cmd.user_id, "plan generation rejected: {}", e.message);
            e
        })?;

        // 2. Derive energy and macro targets.
        let targets = NutritionTargets::for_profile(&profile);
        info!(
            user_id = %cmd.user_id,
            calories = targets.calories,
            protein_g = targets.protein_g,
            carbs_g = targets.carbs_g,
            fats_g = targets.fats_g,
            "computed nutritional targets"
        );

        // 3. Fetch candidates; guard catalog size before any write.
        let candidates = self.catalog.fetch_candidates().await?;
        if candidates.len() < MIN_CATALOG_SIZE {
            return Err(DomainError::new(
                ErrorCode::InsufficientCatalog,
                format!(
                    "Not enough recipes to generate a full day plan: {} available, {} required",
                    candidates.len(),
                    MIN_CATALOG_SIZE
                ),
            ));
        }

        // 4. Greedy slot assignment.
        let daily_plan = select_meals(&targets, candidates);

        // 5. Persist header and slot rows atomically.
        let today = Utc::now().date_naive();
        let draft = PlanDraft {
            start_date: today,
            end_date: today,
            targets,
            daily_plan,
        };
        let plan_id = self.plans.save(&cmd.user_id, &draft).await?;
        info!(user_id = %cmd.user_id, plan_id = %plan_id, "saved meal plan");

        Ok(GeneratePlanResult {
            plan: MealPlan::from_draft(plan_id, cmd.user_id, draft),
        })
    }
}
