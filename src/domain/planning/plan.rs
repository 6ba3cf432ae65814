//! Daily plan aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, RecipeId, UserId};
use crate::domain::nutrition::NutritionTargets;

use super::candidate::RecipeCandidate;
use super::slot::MealSlot;

/// One recipe per meal slot; a slot stays empty when no candidate remained
/// for it.
///
/// Invariant: no recipe id appears in more than one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    breakfast: Option<RecipeCandidate>,
    lunch: Option<RecipeCandidate>,
    dinner: Option<RecipeCandidate>,
}

impl DailyPlan {
    /// A plan with every slot unassigned.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assigns a candidate to a slot.
    pub fn assign(&mut self, slot: MealSlot, candidate: RecipeCandidate) {
        match slot {
            MealSlot::Breakfast => self.breakfast = Some(candidate),
            MealSlot::Lunch => self.lunch = Some(candidate),
            MealSlot::Dinner => self.dinner = Some(candidate),
        }
    }

    /// Returns the candidate assigned to a slot, if any.
    pub fn get(&self, slot: MealSlot) -> Option<&RecipeCandidate> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    /// Iterates over filled slots in processing order.
    pub fn assigned(&self) -> impl Iterator<Item = (MealSlot, &RecipeCandidate)> {
        MealSlot::in_order()
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|c| (slot, c)))
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.assigned().count()
    }

    /// True if the recipe is already assigned to some slot.
    pub fn contains_recipe(&self, id: RecipeId) -> bool {
        self.assigned().any(|(_, c)| c.recipe_id == id)
    }
}

/// A generated plan before persistence has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub targets: NutritionTargets,
    pub daily_plan: DailyPlan,
}

/// A persisted meal plan. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub plan_id: PlanId,
    pub user_id: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub targets: NutritionTargets,
    pub daily_plan: DailyPlan,
}

impl MealPlan {
    /// Attaches the storage-assigned id to a draft.
    pub fn from_draft(plan_id: PlanId, user_id: UserId, draft: PlanDraft) -> Self {
        Self {
            plan_id,
            user_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            targets: draft.targets,
            daily_plan: draft.daily_plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_has_no_assignments() {
        let plan = DailyPlan::empty();
        assert_eq!(plan.filled_count(), 0);
        assert!(plan.get(MealSlot::Lunch).is_none());
    }

    #[test]
    fn assigned_iterates_in_slot_order() {
        let mut plan = DailyPlan::empty();
        plan.assign(MealSlot::Dinner, RecipeCandidate::fixture(3, 600.0));
        plan.assign(MealSlot::Breakfast, RecipeCandidate::fixture(1, 500.0));

        let slots: Vec<MealSlot> = plan.assigned().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![MealSlot::Breakfast, MealSlot::Dinner]);
    }

    #[test]
    fn contains_recipe_checks_all_slots() {
        let mut plan = DailyPlan::empty();
        plan.assign(MealSlot::Lunch, RecipeCandidate::fixture(9, 800.0));
        assert!(plan.contains_recipe(crate::domain::foundation::RecipeId::from_i64(9)));
        assert!(!plan.contains_recipe(crate::domain::foundation::RecipeId::from_i64(8)));
    }
}
