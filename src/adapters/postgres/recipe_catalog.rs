//! PostgreSQL implementation of RecipeCatalog.
//!
//! The aggregation lives here in the query layer: per-100g nutrients are
//! scaled by ingredient quantity and summed per recipe, so the core
//! receives a flat candidate table.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, RecipeId};
use crate::domain::planning::RecipeCandidate;
use crate::ports::RecipeCatalog;

use super::db_err;

/// PostgreSQL implementation of RecipeCatalog.
#[derive(Clone)]
pub struct PostgresRecipeCatalog {
    pool: PgPool,
}

impl PostgresRecipeCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeCatalog for PostgresRecipeCatalog {
    async fn fetch_candidates(&self) -> Result<Vec<RecipeCandidate>, DomainError> {
        // ORDER BY keeps the output stable; greedy tie-breaking depends on it.
        let rows = sqlx::query(
            r#"
            SELECT
                r.recipe_id, r.name,
                ROUND(SUM(f.calories_per_100g * ri.quantity_grams / 100))::float8 AS total_calories,
                ROUND(SUM(f.protein_g_per_100g * ri.quantity_grams / 100))::float8 AS total_protein,
                ROUND(SUM(f.carbs_g_per_100g * ri.quantity_grams / 100))::float8 AS total_carbs,
                ROUND(SUM(f.fats_g_per_100g * ri.quantity_grams / 100))::float8 AS total_fats
            FROM recipes r
            JOIN recipe_ingredients ri ON r.recipe_id = ri.recipe_id
            JOIN foods f ON ri.food_id = f.food_id
            GROUP BY r.recipe_id, r.name
            ORDER BY r.recipe_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch recipe candidates", e))?;

        rows.into_iter().map(row_to_candidate).collect()
    }
}

fn row_to_candidate(row: sqlx::postgres::PgRow) -> Result<RecipeCandidate, DomainError> {
    let recipe_id: i64 = row
        .try_get("recipe_id")
        .map_err(|e| db_err("Failed to get recipe_id", e))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| db_err("Failed to get name", e))?;

    let total_calories: f64 = row
        .try_get("total_calories")
        .map_err(|e| db_err("Failed to get total_calories", e))?;

    let total_protein: f64 = row
        .try_get("total_protein")
        .map_err(|e| db_err("Failed to get total_protein", e))?;

    let total_carbs: f64 = row
        .try_get("total_carbs")
        .map_err(|e| db_err("Failed to get total_carbs", e))?;

    let total_fats: f64 = row
        .try_get("total_fats")
        .map_err(|e| db_err("Failed to get total_fats", e))?;

    Ok(RecipeCandidate {
        recipe_id: RecipeId::from_i64(recipe_id),
        name,
        total_calories,
        total_protein,
        total_carbs,
        total_fats,
    })
}
