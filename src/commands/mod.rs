pub mod scoring;

use crate::models::{HabitProfile, InputConstraints};

/// Initial lever positions for a fresh page
#[tauri::command]
pub fn get_habit_defaults() -> HabitProfile {
  HabitProfile::default()
}

/// Widget ranges and option labels the frontend builds its controls from
#[tauri::command]
pub fn get_input_constraints() -> InputConstraints {
  InputConstraints::current()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::ProcessedFoods;

  #[test]
  fn test_defaults_are_valid_and_scoreable() {
    let defaults = get_habit_defaults();
    assert!(defaults.validate().is_ok());
    assert_eq!(defaults.processed_foods, ProcessedFoods::SomeDays);
  }

  #[test]
  fn test_constraints_describe_every_widget() {
    let constraints = get_input_constraints();
    assert_eq!(constraints.exercise_days.min, 0.0);
    assert_eq!(constraints.exercise_days.max, 7.0);
    assert_eq!(constraints.sleep_hours.min, 4.0);
    assert_eq!(constraints.sleep_hours.max, 9.5);
    assert_eq!(constraints.processed_food_options.len(), 3);
  }
}
