//! Top-level race parameters.

use std::time::Duration;

use race_core::MIN_SUB_STEP;

use crate::{SimError, SimResult};

/// Configuration for one race invocation.
///
/// `tick_secs` is both the macro-tick length and each car's per-tick
/// sub-increment budget; sub-increments inside it are bounded to
/// [`MIN_SUB_STEP`, `tick_secs`].  `wall_clock_limit` is *real* time — a
/// cooperative cutoff checked once per macro-tick, after which the run
/// returns partial results.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceParams {
    /// Race length in laps.
    pub lap_count: u32,
    /// Minimum following gap enforced between ordered cars, metres.
    pub car_length: f64,
    /// Macro-tick length in race seconds.  Default 1.0.
    pub tick_secs: f64,
    /// Optional real-time budget for the whole run.
    pub wall_clock_limit: Option<Duration>,
}

impl RaceParams {
    pub fn new(lap_count: u32, car_length: f64) -> Self {
        Self {
            lap_count,
            car_length,
            tick_secs: 1.0,
            wall_clock_limit: None,
        }
    }

    /// Replace the wall-clock budget.
    pub fn with_wall_clock_limit(mut self, limit: Duration) -> Self {
        self.wall_clock_limit = Some(limit);
        self
    }

    pub(crate) fn validate(&self) -> SimResult<()> {
        if self.lap_count == 0 {
            return Err(SimError::NoLaps);
        }
        if !(self.car_length >= 0.0) || !self.car_length.is_finite() {
            return Err(SimError::BadCarLength { got: self.car_length });
        }
        if !(self.tick_secs >= MIN_SUB_STEP) {
            return Err(SimError::TickTooShort { got: self.tick_secs });
        }
        Ok(())
    }
}
