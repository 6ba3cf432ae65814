//! PostgreSQL implementation of ProfileStore.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::nutrition::{ActivityLevel, FitnessGoal, ProfileUpdate, StoredProfile};
use crate::ports::ProfileStore;

use super::db_err;

/// PostgreSQL implementation of ProfileStore.
#[derive(Clone)]
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn fetch(&self, user_id: &UserId) -> Result<Option<StoredProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT display_name, weight_kg, height_cm, age, activity_level, fitness_goal
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch profile", e))?;

        match row {
            Some(row) => Ok(Some(row_to_profile(row)?)),
            None => Ok(None),
        }
    }

    async fn update(
        &self,
        user_id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<StoredProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE users SET
                display_name = $2,
                weight_kg = $3,
                height_cm = $4,
                age = $5,
                activity_level = $6,
                fitness_goal = $7,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING display_name, weight_kg, height_cm, age, activity_level, fitness_goal
            "#,
        )
        .bind(user_id.as_str())
        .bind(update.display_name.as_deref())
        .bind(update.weight_kg)
        .bind(update.height_cm)
        .bind(update.age.map(|a| a as i32))
        .bind(update.activity_level.map(|a| a.as_str()))
        .bind(update.fitness_goal.map(|g| g.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update profile", e))?;

        match row {
            Some(row) => Ok(Some(row_to_profile(row)?)),
            None => Ok(None),
        }
    }
}

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<StoredProfile, DomainError> {
    let display_name: Option<String> = row
        .try_get("display_name")
        .map_err(|e| db_err("Failed to get display_name", e))?;

    let weight_kg: Option<f64> = row
        .try_get("weight_kg")
        .map_err(|e| db_err("Failed to get weight_kg", e))?;

    let height_cm: Option<f64> = row
        .try_get("height_cm")
        .map_err(|e| db_err("Failed to get height_cm", e))?;

    let age: Option<i32> = row
        .try_get("age")
        .map_err(|e| db_err("Failed to get age", e))?;

    let activity_level: Option<String> = row
        .try_get("activity_level")
        .map_err(|e| db_err("Failed to get activity_level", e))?;

    let fitness_goal: Option<String> = row
        .try_get("fitness_goal")
        .map_err(|e| db_err("Failed to get fitness_goal", e))?;

    Ok(StoredProfile {
        display_name,
        weight_kg,
        height_cm,
        age: age.map(|a| a as u32),
        activity_level: activity_level.as_deref().map(ActivityLevel::parse_lenient),
        fitness_goal: fitness_goal.as_deref().map(FitnessGoal::parse_lenient),
    })
}
