//! PostgreSQL adapters backed by sqlx.

mod plan_repository;
mod profile_store;
mod recipe_catalog;

pub use plan_repository::PostgresPlanRepository;
pub use profile_store::PostgresProfileStore;
pub use recipe_catalog::PostgresRecipeCatalog;

use crate::domain::foundation::DomainError;

/// Wraps a database failure with context.
fn db_err(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::database(format!("{}: {}", context, e))
}
