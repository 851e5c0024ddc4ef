//! Telemetry frame: one row of the race trace.

use race_core::CarId;

/// A snapshot of one car after one executed sub-increment.
///
/// Frames are emitted per sub-increment actually executed (not per
/// macro-tick), in execution order — the stream is append-only and
/// forward-only in `sim_time` per car.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryFrame {
    /// Continuous race time at the end of the sub-increment, seconds.
    pub sim_time: f64,
    pub car: CarId,
    /// Completed laps at frame time.
    pub lap: u32,
    /// Position in the running order, 0 = leader.
    pub position: u32,
    /// Cumulative race distance, metres.
    pub distance: f64,
    /// Speed, m/s.
    pub speed: f64,
    pub tyre_wear: f64,
    pub tyre_performance: f64,
}
