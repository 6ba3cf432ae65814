//! Metabolic target computation.
//!
//! Pure functions from a complete biometric profile to daily energy and
//! macro targets. BMR uses the Mifflin-St Jeor equation without a sex
//! parameter; TDEE scales BMR by the activity multiplier; the fitness goal
//! shifts the calorie target; macros follow a fixed 30/40/30 split
//! (protein/carbs/fat) at 4, 4, and 9 kcal per gram.

use serde::{Deserialize, Serialize};

use super::profile::BiometricProfile;

const PROTEIN_CALORIE_SHARE: f64 = 0.30;
const CARBS_CALORIE_SHARE: f64 = 0.40;
const FATS_CALORIE_SHARE: f64 = 0.30;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily energy and macro targets derived from a profile.
///
/// Macro grams are rounded independently; re-multiplying them by their
/// caloric values need not reproduce `calories` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fats_g: i32,
}

impl NutritionTargets {
    /// Derives targets for a complete profile. Deterministic and total.
    pub fn for_profile(profile: &BiometricProfile) -> Self {
        let bmr = basal_metabolic_rate(profile.weight_kg(), profile.height_cm(), profile.age());
        let tdee = bmr * profile.activity_level().multiplier();
        let calories = (tdee + profile.fitness_goal().calorie_adjustment()).round() as i32;
        Self::for_calories(calories)
    }

    /// Splits a calorie target into macro grams.
    pub fn for_calories(calories: i32) -> Self {
        let kcal = f64::from(calories);
        Self {
            calories,
            protein_g: (kcal * PROTEIN_CALORIE_SHARE / KCAL_PER_GRAM_PROTEIN).round() as i32,
            carbs_g: (kcal * CARBS_CALORIE_SHARE / KCAL_PER_GRAM_CARBS).round() as i32,
            fats_g: (kcal * FATS_CALORIE_SHARE / KCAL_PER_GRAM_FAT).round() as i32,
        }
    }
}

/// Mifflin-St Jeor resting energy expenditure.
///
/// Single-formula simplification: the +5 constant is fixed, there is no
/// sex parameter.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + 5.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::{ActivityLevel, FitnessGoal};

    fn profile(goal: FitnessGoal, level: ActivityLevel) -> BiometricProfile {
        BiometricProfile::new(70.0, 175.0, 25, level, goal).unwrap()
    }

    #[test]
    fn bmr_formula_exactness() {
        // 10*70 + 6.25*175 - 5*25 + 5 = 700 + 1093.75 - 125 + 5
        assert_eq!(basal_metabolic_rate(70.0, 175.0, 25), 1673.75);
    }

    #[test]
    fn maintenance_leaves_tdee_unchanged() {
        let targets =
            NutritionTargets::for_profile(&profile(FitnessGoal::Maintenance, ActivityLevel::Sedentary));
        // 1673.75 * 1.2 = 2008.5, rounds to 2009 (round half away from zero)
        assert_eq!(targets.calories, 2009);
    }

    #[test]
    fn weight_loss_subtracts_exactly_500() {
        let maintenance =
            NutritionTargets::for_profile(&profile(FitnessGoal::Maintenance, ActivityLevel::Sedentary));
        let cut =
            NutritionTargets::for_profile(&profile(FitnessGoal::WeightLoss, ActivityLevel::Sedentary));
        assert_eq!(maintenance.calories - cut.calories, 500);
    }

    #[test]
    fn muscle_gain_adds_exactly_300() {
        let maintenance =
            NutritionTargets::for_profile(&profile(FitnessGoal::Maintenance, ActivityLevel::Sedentary));
        let bulk =
            NutritionTargets::for_profile(&profile(FitnessGoal::MuscleGain, ActivityLevel::Sedentary));
        assert_eq!(bulk.calories - maintenance.calories, 300);
    }

    #[test]
    fn macro_split_at_2000_kcal() {
        let targets = NutritionTargets::for_calories(2000);
        assert_eq!(targets.protein_g, 150); // 2000 * 0.30 / 4
        assert_eq!(targets.carbs_g, 200); // 2000 * 0.40 / 4
        assert_eq!(targets.fats_g, 67); // 2000 * 0.30 / 9, rounded
    }

    #[test]
    fn macro_rounding_is_independent_per_macro() {
        let targets = NutritionTargets::for_calories(2001);
        // 2001*0.3/4 = 150.075 -> 150; 2001*0.4/4 = 200.1 -> 200; 2001*0.3/9 = 66.7 -> 67
        assert_eq!(
            (targets.protein_g, targets.carbs_g, targets.fats_g),
            (150, 200, 67)
        );
        // Grams do not re-multiply to the calorie target; no redistribution.
        let remultiplied = targets.protein_g * 4 + targets.carbs_g * 4 + targets.fats_g * 9;
        assert_ne!(remultiplied, targets.calories);
    }

    #[test]
    fn target_derivation_is_deterministic() {
        let p = profile(FitnessGoal::MuscleGain, ActivityLevel::VeryActive);
        assert_eq!(
            NutritionTargets::for_profile(&p),
            NutritionTargets::for_profile(&p)
        );
    }

    #[test]
    fn activity_multiplier_scales_tdee() {
        let sedentary =
            NutritionTargets::for_profile(&profile(FitnessGoal::Maintenance, ActivityLevel::Sedentary));
        let very_active =
            NutritionTargets::for_profile(&profile(FitnessGoal::Maintenance, ActivityLevel::VeryActive));
        assert!(very_active.calories > sedentary.calories);
        // 1673.75 * 1.725 = 2887.21875, rounds to 2887
        assert_eq!(very_active.calories, 2887);
    }
}
