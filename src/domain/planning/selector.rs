//! Greedy meal selection.
//!
//! Processes slots in fixed order. Each slot takes the available candidate
//! whose calorie total is nearest the slot's share of the daily target,
//! then removes it from availability (sampling without replacement). Ties
//! go to the first candidate in input order, so the caller's ordering is
//! part of the contract.

use crate::domain::nutrition::NutritionTargets;

use super::candidate::RecipeCandidate;
use super::plan::DailyPlan;
use super::slot::MealSlot;

/// Assigns one recipe per slot against the calorie targets.
///
/// A slot is left unassigned when no candidates remain; the caller guards
/// minimum catalog size. O(slots x candidates), no backtracking, no macro
/// scoring.
pub fn select_meals(targets: &NutritionTargets, candidates: Vec<RecipeCandidate>) -> DailyPlan {
    let mut available = candidates;
    let mut plan = DailyPlan::empty();

    for slot in MealSlot::in_order() {
        let slot_target = f64::from(targets.calories) * slot.calorie_fraction();

        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in available.iter().enumerate() {
            let difference = (candidate.total_calories - slot_target).abs();
            // Strict comparison keeps the earliest candidate on ties.
            let improves = match best {
                Some((_, smallest)) => difference < smallest,
                None => true,
            };
            if improves {
                best = Some((idx, difference));
            }
        }

        if let Some((idx, _)) = best {
            let chosen = available.remove(idx);
            plan.assign(slot, chosen);
        }
    }

    plan
}
