//! Request/response DTOs for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::nutrition::{ActivityLevel, FitnessGoal, ProfileUpdate, StoredProfile};

/// Stored profile as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub display_name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub activity_level: Option<String>,
    pub fitness_goal: Option<String>,
}

impl From<StoredProfile> for ProfileResponse {
    fn from(p: StoredProfile) -> Self {
        Self {
            display_name: p.display_name,
            weight_kg: p.weight_kg,
            height_cm: p.height_cm,
            age: p.age,
            activity_level: p.activity_level.map(|a| a.as_str().to_string()),
            fitness_goal: p.fitness_goal.map(|g| g.as_str().to_string()),
        }
    }
}

/// Body for PUT /api/profile. Absent fields are cleared in storage, which
/// mirrors a full-profile form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub activity_level: Option<String>,
    pub fitness_goal: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            display_name: req.display_name,
            weight_kg: req.weight_kg,
            height_cm: req.height_cm,
            age: req.age,
            activity_level: req
                .activity_level
                .as_deref()
                .map(ActivityLevel::parse_lenient),
            fitness_goal: req.fitness_goal.as_deref().map(FitnessGoal::parse_lenient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_parses_enums_leniently() {
        let req = UpdateProfileRequest {
            display_name: None,
            weight_kg: Some(70.0),
            height_cm: None,
            age: None,
            activity_level: Some("hyperactive".to_string()),
            fitness_goal: Some("weight_loss".to_string()),
        };

        let update: ProfileUpdate = req.into();
        assert_eq!(update.activity_level, Some(ActivityLevel::LightlyActive));
        assert_eq!(update.fitness_goal, Some(FitnessGoal::WeightLoss));
    }

    #[test]
    fn profile_response_uses_storage_strings() {
        let stored = StoredProfile {
            activity_level: Some(ActivityLevel::VeryActive),
            fitness_goal: Some(FitnessGoal::MuscleGain),
            ..Default::default()
        };

        let response: ProfileResponse = stored.into();
        assert_eq!(response.activity_level.as_deref(), Some("very_active"));
        assert_eq!(response.fitness_goal.as_deref(), Some("muscle_gain"));
    }
}
