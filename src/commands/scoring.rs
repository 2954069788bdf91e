use serde::Serialize;

use crate::gauge::GaugeSpec;
use crate::models::HabitProfile;
use crate::scoring::LoadReport;

/// Report plus gauge payload, returned in one round trip so a widget change
/// costs a single IPC call
#[derive(Debug, Clone, Serialize)]
pub struct HabitEvaluation {
  pub report: LoadReport,
  pub gauge: GaugeSpec,
}

/// Score the current lever positions.
///
/// The widgets pre-constrain every input; validation here only guards
/// against hand-crafted IPC payloads.
#[tauri::command]
pub fn evaluate_habits(profile: HabitProfile) -> Result<HabitEvaluation, String> {
  profile
    .validate()
    .map_err(|e| format!("Invalid habit profile: {}", e))?;

  let report = LoadReport::compute(&profile);
  let gauge = GaugeSpec::from_report(&report);

  Ok(HabitEvaluation { report, gauge })
}
