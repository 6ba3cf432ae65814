//! Biometric profile value objects.
//!
//! Profiles are stored with nullable fields; plan generation requires a
//! complete profile. Activity levels and fitness goals parse leniently:
//! unknown values normalize to a safe default instead of failing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ValidationError};

/// Daily activity level, scaled into the TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    /// Parses a stored value, defaulting unknown strings to lightly active.
    ///
    /// Unrecognized levels fall back rather than fail; the fallback
    /// multiplier (1.375) matches the lenient-default policy of the
    /// stored-profile contract.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "sedentary" => ActivityLevel::Sedentary,
            "lightly_active" => ActivityLevel::LightlyActive,
            "moderately_active" => ActivityLevel::ModeratelyActive,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::LightlyActive,
        }
    }

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

/// Fitness goal, adjusting the daily calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl FitnessGoal {
    /// Calorie delta applied to TDEE: a deficit for weight loss, a surplus
    /// for muscle gain, nothing for maintenance.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            FitnessGoal::WeightLoss => -500.0,
            FitnessGoal::MuscleGain => 300.0,
            FitnessGoal::Maintenance => 0.0,
        }
    }

    /// Parses a stored value, treating unknown strings as maintenance.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "weight_loss" => FitnessGoal::WeightLoss,
            "muscle_gain" => FitnessGoal::MuscleGain,
            _ => FitnessGoal::Maintenance,
        }
    }

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Maintenance => "maintenance",
        }
    }
}

/// Profile as held by the store: every biometric field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredProfile {
    pub display_name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub activity_level: Option<ActivityLevel>,
    pub fitness_goal: Option<FitnessGoal>,
}

impl StoredProfile {
    /// Promotes the stored profile to a complete biometric profile.
    ///
    /// Fails with `IncompleteProfile`, naming every missing field, when any
    /// of the five required dimensions is absent.
    pub fn try_into_complete(&self) -> Result<BiometricProfile, DomainError> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push("weight_kg");
        }
        if self.height_cm.is_none() {
            missing.push("height_cm");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.activity_level.is_none() {
            missing.push("activity_level");
        }
        if self.fitness_goal.is_none() {
            missing.push("fitness_goal");
        }
        if !missing.is_empty() {
            return Err(DomainError::incomplete_profile(&missing));
        }

        let profile = BiometricProfile::new(
            self.weight_kg.unwrap_or_default(),
            self.height_cm.unwrap_or_default(),
            self.age.unwrap_or_default(),
            self.activity_level.unwrap_or(ActivityLevel::LightlyActive),
            self.fitness_goal.unwrap_or(FitnessGoal::Maintenance),
        )?;
        Ok(profile)
    }
}

/// Fields accepted by a profile update request.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub activity_level: Option<ActivityLevel>,
    pub fitness_goal: Option<FitnessGoal>,
}

impl ProfileUpdate {
    /// Rejects non-positive biometric values when present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(w) = self.weight_kg {
            if w <= 0.0 {
                return Err(ValidationError::not_positive("weight_kg", w));
            }
        }
        if let Some(h) = self.height_cm {
            if h <= 0.0 {
                return Err(ValidationError::not_positive("height_cm", h));
            }
        }
        if let Some(a) = self.age {
            if a == 0 {
                return Err(ValidationError::not_positive("age", 0.0));
            }
        }
        Ok(())
    }
}

/// A complete biometric profile, ready for target computation.
#[derive(Debug, Clone, PartialEq)]
pub struct BiometricProfile {
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    activity_level: ActivityLevel,
    fitness_goal: FitnessGoal,
}

impl BiometricProfile {
    /// Constructs a profile, rejecting non-positive measurements.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        activity_level: ActivityLevel,
        fitness_goal: FitnessGoal,
    ) -> Result<Self, ValidationError> {
        if weight_kg <= 0.0 {
            return Err(ValidationError::not_positive("weight_kg", weight_kg));
        }
        if height_cm <= 0.0 {
            return Err(ValidationError::not_positive("height_cm", height_cm));
        }
        if age == 0 {
            return Err(ValidationError::not_positive("age", 0.0));
        }
        Ok(Self {
            weight_kg,
            height_cm,
            age,
            activity_level,
            fitness_goal,
        })
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn fitness_goal(&self) -> FitnessGoal {
        self.fitness_goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn complete_stored() -> StoredProfile {
        StoredProfile {
            display_name: Some("Alice".to_string()),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            age: Some(25),
            activity_level: Some(ActivityLevel::ModeratelyActive),
            fitness_goal: Some(FitnessGoal::WeightLoss),
        }
    }

    #[test]
    fn activity_level_multipliers_match_contract() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::LightlyActive.multiplier(), 1.375);
        assert_eq!(ActivityLevel::ModeratelyActive.multiplier(), 1.55);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.725);
    }

    #[test]
    fn unknown_activity_level_falls_back_to_lightly_active() {
        let level = ActivityLevel::parse_lenient("astronaut_training");
        assert_eq!(level, ActivityLevel::LightlyActive);
        assert_eq!(level.multiplier(), 1.375);
    }

    #[test]
    fn unknown_fitness_goal_treated_as_maintenance() {
        let goal = FitnessGoal::parse_lenient("bulk_then_cut");
        assert_eq!(goal, FitnessGoal::Maintenance);
        assert_eq!(goal.calorie_adjustment(), 0.0);
    }

    #[test]
    fn goal_adjustments_match_contract() {
        assert_eq!(FitnessGoal::WeightLoss.calorie_adjustment(), -500.0);
        assert_eq!(FitnessGoal::MuscleGain.calorie_adjustment(), 300.0);
        assert_eq!(FitnessGoal::Maintenance.calorie_adjustment(), 0.0);
    }

    #[test]
    fn activity_level_storage_roundtrip() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
        ] {
            assert_eq!(ActivityLevel::parse_lenient(level.as_str()), level);
        }
    }

    #[test]
    fn complete_stored_profile_promotes() {
        let profile = complete_stored().try_into_complete().unwrap();
        assert_eq!(profile.weight_kg(), 70.0);
        assert_eq!(profile.activity_level(), ActivityLevel::ModeratelyActive);
    }

    #[test]
    fn missing_activity_level_fails_incomplete() {
        let mut stored = complete_stored();
        stored.activity_level = None;
        let err = stored.try_into_complete().unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteProfile);
        assert!(err.message.contains("activity_level"));
    }

    #[test]
    fn all_missing_fields_are_named() {
        let err = StoredProfile::default().try_into_complete().unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteProfile);
        for field in ["weight_kg", "height_cm", "age", "activity_level", "fitness_goal"] {
            assert!(err.message.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn biometric_profile_rejects_non_positive_values() {
        assert!(BiometricProfile::new(
            0.0,
            175.0,
            25,
            ActivityLevel::Sedentary,
            FitnessGoal::Maintenance
        )
        .is_err());
        assert!(BiometricProfile::new(
            70.0,
            -1.0,
            25,
            ActivityLevel::Sedentary,
            FitnessGoal::Maintenance
        )
        .is_err());
        assert!(BiometricProfile::new(
            70.0,
            175.0,
            0,
            ActivityLevel::Sedentary,
            FitnessGoal::Maintenance
        )
        .is_err());
    }

    #[test]
    fn profile_update_validates_present_fields_only() {
        let update = ProfileUpdate {
            weight_kg: Some(82.5),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let update = ProfileUpdate {
            height_cm: Some(-170.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
