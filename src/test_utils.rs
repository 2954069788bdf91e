//! Test utilities and helpers for unit testing
//!
//! Mock profile factories and shared assertions used across module tests.

use crate::models::{HabitProfile, ProcessedFoods};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Profile matching the page defaults
pub fn mock_habit_profile() -> HabitProfile {
  HabitProfile {
    exercise_days: 2,
    sleep_hours: 7.0,
    stress: 5,
    nicotine: false,
    processed_foods: ProcessedFoods::SomeDays,
  }
}

/// Every protective lever maxed out
pub fn mock_low_strain_profile() -> HabitProfile {
  HabitProfile {
    exercise_days: 7,
    sleep_hours: 9.5,
    stress: 0,
    nicotine: false,
    processed_foods: ProcessedFoods::Rarely,
  }
}

/// Every lever working against the user
pub fn mock_high_strain_profile() -> HabitProfile {
  HabitProfile {
    exercise_days: 0,
    sleep_hours: 4.0,
    stress: 10,
    nicotine: true,
    processed_foods: ProcessedFoods::MostDays,
  }
}

/// ---------------------------------------------------------------------------
/// Input Grid
/// ---------------------------------------------------------------------------

/// Every combination of values the widgets can actually produce:
/// 8 exercise x 12 sleep x 11 stress x 2 nicotine x 3 food = 6336 profiles
pub fn widget_grid() -> Vec<HabitProfile> {
  let mut profiles = Vec::new();

  for exercise_days in 0..=7 {
    for half_hours in 8..=19 {
      let sleep_hours = half_hours as f64 * 0.5;
      for stress in 0..=10 {
        for nicotine in [false, true] {
          for processed_foods in ProcessedFoods::all() {
            profiles.push(HabitProfile {
              exercise_days,
              sleep_hours,
              stress,
              nicotine,
              processed_foods,
            });
          }
        }
      }
    }
  }

  profiles
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_profiles() {
    assert!(mock_habit_profile().validate().is_ok());
    assert!(mock_low_strain_profile().validate().is_ok());
    assert!(mock_high_strain_profile().validate().is_ok());
  }

  #[test]
  fn test_widget_grid_covers_every_combination() {
    let grid = widget_grid();
    assert_eq!(grid.len(), 8 * 12 * 11 * 2 * 3);

    for profile in &grid {
      assert!(
        profile.validate().is_ok(),
        "grid produced an invalid profile: {:?}",
        profile
      );
    }
  }
}
