//! Gauge payload for the charting collaborator
//!
//! The frontend owns the actual drawing; this module owns the data the chart
//! is drawn from: axis, fixed zone bands, bar color, and threshold marker.

use serde::{Deserialize, Serialize};

use crate::scoring::{LoadReport, StrainZone};

/// ---------------------------------------------------------------------------
/// Gauge Spec
/// ---------------------------------------------------------------------------

/// One colored band on the gauge axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeBand {
  pub range: [i64; 2],
  pub color: String,
}

/// Marker line drawn at the current load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeThreshold {
  pub value: i64,
  pub color: String,
  pub width: u32,
  pub thickness: f64,
}

/// Everything the frontend needs to render the load gauge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeSpec {
  pub value: i64,
  pub suffix: String,
  pub title: String,
  pub bar_color: String,
  pub axis_range: [i64; 2],
  pub steps: Vec<GaugeBand>,
  pub threshold: GaugeThreshold,
  pub height: u32,
}

impl GaugeSpec {
  pub fn from_report(report: &LoadReport) -> Self {
    let steps = [StrainZone::Lower, StrainZone::Moderate, StrainZone::Higher]
      .iter()
      .map(|zone| GaugeBand {
        range: zone.band_range(),
        color: zone.band_color().to_string(),
      })
      .collect();

    Self {
      value: report.load,
      suffix: " / 100".to_string(),
      title: report.zone.label().to_string(),
      bar_color: report.zone.color().to_string(),
      axis_range: [0, 100],
      steps,
      threshold: GaugeThreshold {
        value: report.load,
        color: "#444".to_string(),
        width: 3,
        thickness: 0.75,
      },
      height: 320,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
