//! Car specification and mutable race state.

use std::fmt;

use race_core::CornerId;

use crate::{ModelError, ModelResult};

// ── CarSpec ───────────────────────────────────────────────────────────────────

/// The fixed capability set of one car.
///
/// `max_brake` is a positive deceleration magnitude; the kinematics layer
/// negates it where the integration needs a signed rate.
///
/// `cornering` and `drive_style` are multipliers around 1.0: below 1 is a
/// better cornerer / a more cautious driver, above 1 is worse / more
/// aggressive.  `pit_lap` is the lap on which the car enters the pits
/// (1 = at the end of the first lap); 0 disables the stop entirely.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSpec {
    pub name: String,

    /// Peak acceleration, m/s².
    pub max_accel: f64,
    /// Peak braking deceleration, m/s² (positive magnitude).
    pub max_brake: f64,
    /// Top speed, m/s.
    pub max_speed: f64,
    /// Nominal tyre life in metres: wear == max_tyre_life → degradation 1.0.
    pub max_tyre_life: f64,
    /// Cornering multiplier applied to every corner's nominal apex speed.
    pub cornering: f64,
    /// Driving-style multiplier applied to the car's braking target.
    pub drive_style: f64,

    /// Lap on which the car pits (1 = end of first lap; 0 = never).
    pub pit_lap: u32,
    /// Stationary time in the pit box, seconds.
    pub box_time: f64,
    /// Time from pit entry to the car's box at the pit speed limit, seconds.
    /// Assigned from qualifying rank; meaningless before that.
    pub box_location: f64,
}

impl CarSpec {
    /// Fail fast on any capability value that would poison the kinematics.
    pub fn validate(&self) -> ModelResult<()> {
        let positive = [
            ("max_accel", self.max_accel),
            ("max_brake", self.max_brake),
            ("max_speed", self.max_speed),
            ("max_tyre_life", self.max_tyre_life),
            ("cornering", self.cornering),
            ("drive_style", self.drive_style),
        ];
        for (what, got) in positive {
            if !(got > 0.0) {
                return Err(ModelError::NonPositive {
                    car: self.name.clone(),
                    what,
                    got,
                });
            }
        }
        let non_negative = [
            ("box_time", self.box_time),
            ("box_location", self.box_location),
        ];
        for (what, got) in non_negative {
            if !(got >= 0.0) {
                return Err(ModelError::Negative {
                    car: self.name.clone(),
                    what,
                    got,
                });
            }
        }
        Ok(())
    }
}

// ── CarState ──────────────────────────────────────────────────────────────────

/// Everything about a car that changes during a run.
///
/// `distance` is cumulative progress along the whole race (not lap-relative)
/// and never decreases.  `accel`/`brake` are the *effective* values after
/// tyre and fuel scaling; they start at the spec maxima.
#[derive(Clone, Debug, PartialEq)]
pub struct CarState {
    /// Current speed, m/s.  Never negative.
    pub speed: f64,
    /// Cumulative race distance, metres.  Monotonically non-decreasing.
    pub distance: f64,
    /// Displacement committed in the most recent sub-increment, metres.
    pub distance_step: f64,
    /// Completed laps (1 = first lap done).
    pub lap_count: u32,

    pub tyre_wear: f64,
    pub tyre_degradation: f64,
    /// In [0.25, 1.0] by construction: max(1 − degradation², 0.25).
    pub tyre_performance: f64,
    /// Pending wear surcharge from the last apex overshoot; folded into
    /// wear on the next tyre update, then reset.
    pub corner_penalty: f64,

    /// Effective acceleration after tyre/fuel scaling, m/s².
    pub accel: f64,
    /// Effective braking after tyre/fuel scaling, m/s² (positive magnitude).
    pub brake: f64,

    /// The corner the car is heading for.
    pub next_corner: CornerId,
    /// `true` from pit entry until the pit lane is fully transited.
    pub in_pit: bool,
    /// Seconds accumulated since pit entry.
    pub pit_duration: f64,
}

impl CarState {
    /// State on the grid: stationary, fresh tyres, heading for corner 0.
    pub fn initial(spec: &CarSpec) -> Self {
        Self {
            speed:            0.0,
            distance:         0.0,
            distance_step:    0.0,
            lap_count:        0,
            tyre_wear:        0.0,
            tyre_degradation: 0.0,
            tyre_performance: 1.0,
            corner_penalty:   0.0,
            accel:            spec.max_accel,
            brake:            spec.max_brake,
            next_corner:      CornerId(0),
            in_pit:           false,
            pit_duration:     0.0,
        }
    }

    /// Pit-box tyre change: the one discontinuous reset in the wear model.
    pub fn fit_new_tyres(&mut self) {
        self.tyre_wear = 0.0;
        self.tyre_degradation = 0.0;
        self.tyre_performance = 1.0;
    }
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// A car entry: validated specification plus run state.
#[derive(Clone, Debug)]
pub struct Car {
    pub spec:  CarSpec,
    pub state: CarState,
}

impl Car {
    /// Validate `spec` and pair it with fresh grid state.
    pub fn new(spec: CarSpec) -> ModelResult<Self> {
        spec.validate()?;
        let state = CarState::initial(&spec);
        Ok(Self { spec, state })
    }

    /// Lap-relative position: distance into the current lap, metres.
    #[inline]
    pub fn lap_location(&self, lap_length: f64) -> f64 {
        self.state.distance - self.state.lap_count as f64 * lap_length
    }

    /// `true` if the car is due to stop at the end of the lap it is
    /// currently completing.
    #[inline]
    pub fn due_to_pit(&self) -> bool {
        self.state.lap_count + 1 == self.spec.pit_lap
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec.name)
    }
}
