//! Pit-lane state machine.
//!
//! A car flagged `in_pit` walks through four phases derived from its
//! accumulated `pit_duration`:
//!
//! ```text
//! Approaching : pit_duration < box_location
//! InBox       : box_location ≤ pit_duration < box_location + box_time
//! Leaving     : pit_duration < pit_lane_secs + box_time
//! Exit        : pit lane fully transited — resume on-track kinematics
//! ```
//!
//! Approaching and Leaving move at the pit speed limit and remain subject to
//! the overtake resolver (a car can be held up behind a slower car in the
//! lane).  InBox is stationary with a full tyre reset.

use race_model::{Car, Track};

/// Where in the pit cycle a car currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PitPhase {
    Approaching,
    InBox,
    Leaving,
    Exit,
}

/// Classify `car`'s pit phase from its accumulated pit duration.
pub fn phase(car: &Car, track: &Track) -> PitPhase {
    let d = car.state.pit_duration;
    let spec = &car.spec;
    if d < spec.box_location {
        PitPhase::Approaching
    } else if d < spec.box_location + spec.box_time {
        PitPhase::InBox
    } else if d < track.pit_lane_secs + spec.box_time {
        PitPhase::Leaving
    } else {
        PitPhase::Exit
    }
}

/// Seconds left in the car's current pit phase (0 once the lane is cleared).
pub fn phase_time_left(car: &Car, track: &Track) -> f64 {
    let d = car.state.pit_duration;
    let spec = &car.spec;
    match phase(car, track) {
        PitPhase::Approaching => spec.box_location - d,
        PitPhase::InBox => spec.box_location + spec.box_time - d,
        PitPhase::Leaving => track.pit_lane_secs + spec.box_time - d,
        PitPhase::Exit => 0.0,
    }
}
