//! PostgreSQL implementation of PlanRepository.
//!
//! Header and slot rows are written inside one transaction; a failure at
//! any point rolls everything back. A per-user advisory lock scoped to the
//! transaction serializes concurrent saves for the same user.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, PlanId, UserId};
use crate::domain::planning::PlanDraft;
use crate::ports::PlanRepository;

use super::db_err;

/// PostgreSQL implementation of PlanRepository.
#[derive(Clone)]
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn save(&self, user_id: &UserId, draft: &PlanDraft) -> Result<PlanId, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_err("Failed to begin transaction", e))?;

        // Released at commit/rollback; serializes same-user saves.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_err("Failed to acquire user lock", e))?;

        let row = sqlx::query(
            r#"
            INSERT INTO meal_plans (
                user_id, start_date, end_date,
                target_calories, target_protein_g, target_carbs_g, target_fats_g
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING plan_id
            "#,
        )
        .bind(user_id.as_str())
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.targets.calories)
        .bind(draft.targets.protein_g)
        .bind(draft.targets.carbs_g)
        .bind(draft.targets.fats_g)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_err("Failed to insert plan", e))?;

        let plan_id: i64 = row
            .try_get("plan_id")
            .map_err(|e| db_err("Failed to get plan_id", e))?;

        for (slot, candidate) in draft.daily_plan.assigned() {
            sqlx::query(
                r#"
                INSERT INTO daily_meals (plan_id, meal_date, meal_type, recipe_id)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(plan_id)
            .bind(draft.start_date)
            .bind(slot.as_str())
            .bind(candidate.recipe_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_err("Failed to insert daily meal", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_err("Failed to commit plan", e))?;

        Ok(PlanId::from_i64(plan_id))
    }
}
