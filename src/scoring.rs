//! Deterministic scoring layer for the blood pressure load simulator
//!
//! This module maps the five habit levers to an illustrative 0-100 strain
//! score. The frontend renders these pre-computed results rather than doing
//! math itself. Higher score = more load/strain on the blood vessels.

use serde::{Deserialize, Serialize};

use crate::models::{HabitProfile, ProcessedFoods};

/// ---------------------------------------------------------------------------
/// Strain Zones
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrainZone {
  #[serde(rename = "Lower strain")]
  Lower, // load <= 33
  #[serde(rename = "Moderate strain")]
  Moderate, // load <= 66
  #[serde(rename = "Higher strain")]
  Higher, // load > 66
}

impl StrainZone {
  pub fn from_load(load: i64) -> Self {
    match load {
      l if l <= 33 => StrainZone::Lower,
      l if l <= 66 => StrainZone::Moderate,
      _ => StrainZone::Higher,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      StrainZone::Lower => "Lower strain",
      StrainZone::Moderate => "Moderate strain",
      StrainZone::Higher => "Higher strain",
    }
  }

  /// Display color for the gauge bar and the zone title
  pub fn color(&self) -> &'static str {
    match self {
      StrainZone::Lower => "#2E7D32",
      StrainZone::Moderate => "#F9A825",
      StrainZone::Higher => "#C62828",
    }
  }

  /// Background fill for this zone's band on the gauge axis
  pub fn band_color(&self) -> &'static str {
    match self {
      StrainZone::Lower => "#E8F5E9",
      StrainZone::Moderate => "#FFF8E1",
      StrainZone::Higher => "#FFEBEE",
    }
  }

  /// This zone's segment of the 0-100 axis
  pub fn band_range(&self) -> [i64; 2] {
    match self {
      StrainZone::Lower => [0, 33],
      StrainZone::Moderate => [33, 66],
      StrainZone::Higher => [66, 100],
    }
  }

  /// Fixed one-sentence read on what the current mix of habits means
  pub fn insight(&self) -> &'static str {
    match self {
      StrainZone::Lower => {
        "Nice work - this mix of habits generally supports healthier blood pressure and blood vessels."
      }
      StrainZone::Moderate => {
        "You've got some protective habits in place. One small change could meaningfully improve the trend."
      }
      StrainZone::Higher => {
        "This combination can increase strain on blood vessels. The good news: changing just one lever can shift the odds."
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Points Table
/// ---------------------------------------------------------------------------

/// Baseline load before any lever is applied
const BASE_POINTS: i64 = 20;

/// Exercise points: more exercise reduces load
fn exercise_points(days: i64) -> i64 {
  match days {
    0 => 10,
    1 => 7,
    2 => 5,
    3 => 3,
    4 | 5 => 1,
    _ => 0, // 6-7
  }
}

/// Sleep points: below 7 increases load; 7-8 neutral; above 8 slightly beneficial
fn sleep_points(hours: f64) -> f64 {
  if hours < 7.0 {
    (7.0 - hours) * 4.0 // up to ~12
  } else if hours <= 8.0 {
    0.0
  } else {
    -1.0
  }
}

fn nicotine_points(nicotine: bool) -> i64 {
  if nicotine {
    12
  } else {
    0
  }
}

/// Stress points, up to ~16. Exact .5 ties round half-to-even; no product of
/// the 0-10 stress domain actually lands on one.
fn stress_points(stress: i64) -> i64 {
  (stress as f64 * 1.6).round_ties_even() as i64
}

/// Round the summed points and clamp into the score range
fn clamp_load(raw: f64) -> i64 {
  (raw.round_ties_even() as i64).clamp(0, 100)
}

/// ---------------------------------------------------------------------------
/// Load Report
/// ---------------------------------------------------------------------------

/// Per-lever contributions to the load score.
///
/// Sleep is the one fractional term; on the 0.5-hour slider grid it is
/// always whole, but off-grid values still sum cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsBreakdown {
  pub base: i64,
  pub exercise: i64,
  pub sleep: f64,
  pub nicotine: i64,
  pub processed_foods: i64,
  pub stress: i64,
}

impl PointsBreakdown {
  pub fn total(&self) -> f64 {
    self.base as f64
      + self.exercise as f64
      + self.sleep
      + self.nicotine as f64
      + self.processed_foods as f64
      + self.stress as f64
  }
}

/// The complete scorer output for one set of lever positions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
  /// Strain score, always clamped to [0, 100]
  pub load: i64,
  pub zone: StrainZone,
  pub insight: String,
  pub opportunity: String,
  pub breakdown: PointsBreakdown,
}

impl LoadReport {
  /// Compute the full report from the current lever positions.
  ///
  /// Pure and stateless: the same profile always produces the same report,
  /// and every widget change triggers a full recomputation.
  pub fn compute(profile: &HabitProfile) -> Self {
    let breakdown = PointsBreakdown {
      base: BASE_POINTS,
      exercise: exercise_points(profile.exercise_days),
      sleep: sleep_points(profile.sleep_hours),
      nicotine: nicotine_points(profile.nicotine),
      processed_foods: profile.processed_foods.points(),
      stress: stress_points(profile.stress),
    };

    let load = clamp_load(breakdown.total());
    let zone = StrainZone::from_load(load);

    Self {
      load,
      zone,
      insight: zone.insight().to_string(),
      opportunity: pick_opportunity(profile).to_string(),
      breakdown,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Biggest Opportunity
/// ---------------------------------------------------------------------------

const OPPORTUNITY_NICOTINE: &str =
  "Biggest opportunity: reducing nicotine use (benefits can happen quickly).";
const OPPORTUNITY_SLEEP: &str =
  "Biggest opportunity: improving sleep by +30-60 minutes consistently.";
const OPPORTUNITY_EXERCISE: &str =
  "Biggest opportunity: add movement - 10-minute walks count.";
const OPPORTUNITY_PROCESSED: &str =
  "Biggest opportunity: swap one processed food per day for a whole-food option.";
const OPPORTUNITY_STRESS: &str =
  "Biggest opportunity: stress recovery - try 2 minutes of slow exhale breathing.";
const OPPORTUNITY_STEADY: &str =
  "You're doing several things that support healthier blood pressure - keep building on what's working.";

/// First matching rule wins; exactly one suggestion per report
fn pick_opportunity(profile: &HabitProfile) -> &'static str {
  if profile.nicotine {
    OPPORTUNITY_NICOTINE
  } else if profile.sleep_hours < 7.0 {
    OPPORTUNITY_SLEEP
  } else if profile.exercise_days < 3 {
    OPPORTUNITY_EXERCISE
  } else if profile.processed_foods == ProcessedFoods::MostDays {
    OPPORTUNITY_PROCESSED
  } else if profile.stress >= 7 {
    OPPORTUNITY_STRESS
  } else {
    OPPORTUNITY_STEADY
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
