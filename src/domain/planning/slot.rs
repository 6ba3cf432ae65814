//! Meal slots and their calorie allocation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three daily meal positions.
///
/// Slots are always processed in the order breakfast, lunch, dinner; the
/// calorie fractions sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Fixed processing order for slot assignment.
    pub fn in_order() -> [MealSlot; 3] {
        [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
    }

    /// Share of the daily calorie target allocated to this slot.
    pub fn calorie_fraction(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.30,
            MealSlot::Lunch => 0.40,
            MealSlot::Dinner => 0.30,
        }
    }

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_sum_to_one() {
        let total: f64 = MealSlot::in_order()
            .iter()
            .map(|s| s.calorie_fraction())
            .sum();
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn processing_order_is_breakfast_lunch_dinner() {
        assert_eq!(
            MealSlot::in_order(),
            [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
        );
    }

    #[test]
    fn lunch_takes_the_largest_share() {
        assert_eq!(MealSlot::Breakfast.calorie_fraction(), 0.30);
        assert_eq!(MealSlot::Lunch.calorie_fraction(), 0.40);
        assert_eq!(MealSlot::Dinner.calorie_fraction(), 0.30);
    }
}
