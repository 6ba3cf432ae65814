//! Nutrition module - biometric profiles and metabolic target derivation.

mod profile;
mod targets;

pub use profile::{ActivityLevel, BiometricProfile, FitnessGoal, ProfileUpdate, StoredProfile};
pub use targets::NutritionTargets;
