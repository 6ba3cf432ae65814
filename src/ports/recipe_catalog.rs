//! RecipeCatalog port for aggregated recipe queries.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::planning::RecipeCandidate;

/// Catalog of recipes with pre-aggregated nutrition totals.
///
/// The catalog owns the ingredient aggregation (per-100g nutrients scaled
/// by quantity, summed per recipe); the core consumes the flat result.
///
/// Contract: output ordering must be stable across calls. Greedy selection
/// breaks ties by input order, so an unordered source would make plans
/// nondeterministic.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Fetch all recipe candidates, in stable order.
    async fn fetch_candidates(&self) -> Result<Vec<RecipeCandidate>, DomainError>;
}
