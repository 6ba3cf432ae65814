//! Ports - trait interfaces between the application core and its
//! collaborators.
//!
//! Adapters implement these traits; handlers receive them as `Arc<dyn ...>`
//! so tests can substitute in-memory implementations.

mod plan_repository;
mod profile_store;
mod recipe_catalog;
mod token_verifier;

pub use plan_repository::PlanRepository;
pub use profile_store::ProfileStore;
pub use recipe_catalog::RecipeCatalog;
pub use token_verifier::TokenVerifier;
