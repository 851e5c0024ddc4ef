//! Plain data row types written by output backends.
//!
//! Telemetry rows are `race_sim::TelemetryFrame` values written as-is; the
//! classification gets its own flat row type here.

/// One car's line in the final classification.
///
/// `position`/`time` are `None` for a car still on track when the run was
/// truncated by the wall-clock limit (an explicit did-not-finish marker).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRow {
    pub car_id:   u32,
    pub name:     String,
    pub position: Option<u32>,
    pub time:     Option<f64>,
}
