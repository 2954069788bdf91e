use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Processed Food Frequency
/// ---------------------------------------------------------------------------

/// How often highly processed foods show up in the diet.
///
/// Serialized with the select-box labels so the frontend and the scorer
/// agree on the wire strings. Ordered from least to most frequent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProcessedFoods {
  #[serde(rename = "Rarely")]
  Rarely,
  #[serde(rename = "Some days")]
  SomeDays,
  #[serde(rename = "Most days")]
  MostDays,
}

impl ProcessedFoods {
  /// Load points contributed by this frequency
  pub fn points(&self) -> i64 {
    match self {
      ProcessedFoods::Rarely => 0,
      ProcessedFoods::SomeDays => 4,
      ProcessedFoods::MostDays => 8,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      ProcessedFoods::Rarely => "Rarely",
      ProcessedFoods::SomeDays => "Some days",
      ProcessedFoods::MostDays => "Most days",
    }
  }

  /// All select-box options, in display order
  pub fn all() -> [ProcessedFoods; 3] {
    [
      ProcessedFoods::Rarely,
      ProcessedFoods::SomeDays,
      ProcessedFoods::MostDays,
    ]
  }
}

impl std::fmt::Display for ProcessedFoods {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}

impl std::str::FromStr for ProcessedFoods {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Rarely" => Ok(Self::Rarely),
      "Some days" => Ok(Self::SomeDays),
      "Most days" => Ok(Self::MostDays),
      _ => Err(format!("Unknown processed food frequency: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Habit Profile (the five levers)
/// ---------------------------------------------------------------------------

/// Widget domains. The sliders are built from these and `validate` checks
/// against the same values.
pub const EXERCISE_DAYS_RANGE: (i64, i64) = (0, 7);
pub const SLEEP_HOURS_RANGE: (f64, f64) = (4.0, 9.5);
pub const SLEEP_HOURS_STEP: f64 = 0.5;
pub const STRESS_RANGE: (i64, i64) = (0, 10);

/// One snapshot of the lever positions. Immutable per scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitProfile {
  pub exercise_days: i64,
  pub sleep_hours: f64,
  pub stress: i64,
  pub nicotine: bool,
  pub processed_foods: ProcessedFoods,
}

impl Default for HabitProfile {
  /// Initial widget values shown before the user touches anything
  fn default() -> Self {
    Self {
      exercise_days: 2,
      sleep_hours: 7.0,
      stress: 5,
      nicotine: false,
      processed_foods: ProcessedFoods::SomeDays,
    }
  }
}

impl HabitProfile {
  /// Check every field against the widget domains.
  ///
  /// The scorer itself has no failure modes; this guards the IPC boundary,
  /// where a profile arrives as arbitrary JSON.
  pub fn validate(&self) -> Result<(), HabitError> {
    if self.exercise_days < EXERCISE_DAYS_RANGE.0 || self.exercise_days > EXERCISE_DAYS_RANGE.1 {
      return Err(HabitError::ExerciseDays(self.exercise_days));
    }
    if !self.sleep_hours.is_finite()
      || self.sleep_hours < SLEEP_HOURS_RANGE.0
      || self.sleep_hours > SLEEP_HOURS_RANGE.1
    {
      return Err(HabitError::SleepHours(self.sleep_hours));
    }
    if self.stress < STRESS_RANGE.0 || self.stress > STRESS_RANGE.1 {
      return Err(HabitError::Stress(self.stress));
    }
    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HabitError {
  #[error("Exercise days out of range: {0} (expected 0-7)")]
  ExerciseDays(i64),

  #[error("Sleep hours out of range: {0} (expected 4.0-9.5)")]
  SleepHours(f64),

  #[error("Stress level out of range: {0} (expected 0-10)")]
  Stress(i64),
}

/// ---------------------------------------------------------------------------
/// Input Constraints (widget ranges for the frontend)
/// ---------------------------------------------------------------------------

/// Range, step, and initial value for one slider
#[derive(Debug, Clone, Serialize)]
pub struct SliderRange {
  pub min: f64,
  pub max: f64,
  pub step: f64,
  pub default: f64,
}

/// Everything the frontend needs to build its controls. Single source of
/// truth shared with `HabitProfile::validate`.
#[derive(Debug, Clone, Serialize)]
pub struct InputConstraints {
  pub exercise_days: SliderRange,
  pub sleep_hours: SliderRange,
  pub stress: SliderRange,
  pub nicotine_default: bool,
  pub processed_food_options: Vec<&'static str>,
  pub processed_food_default: &'static str,
}

impl InputConstraints {
  pub fn current() -> Self {
    let defaults = HabitProfile::default();

    Self {
      exercise_days: SliderRange {
        min: EXERCISE_DAYS_RANGE.0 as f64,
        max: EXERCISE_DAYS_RANGE.1 as f64,
        step: 1.0,
        default: defaults.exercise_days as f64,
      },
      sleep_hours: SliderRange {
        min: SLEEP_HOURS_RANGE.0,
        max: SLEEP_HOURS_RANGE.1,
        step: SLEEP_HOURS_STEP,
        default: defaults.sleep_hours,
      },
      stress: SliderRange {
        min: STRESS_RANGE.0 as f64,
        max: STRESS_RANGE.1 as f64,
        step: 1.0,
        default: defaults.stress as f64,
      },
      nicotine_default: defaults.nicotine,
      processed_food_options: ProcessedFoods::all().iter().map(|p| p.label()).collect(),
      processed_food_default: defaults.processed_foods.label(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
