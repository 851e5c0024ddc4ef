//! Race construction errors.

use race_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("race length must be at least one lap")]
    NoLaps,

    #[error("starting grid is empty")]
    EmptyGrid,

    #[error("macro-tick length {got} is shorter than the minimum sub-increment")]
    TickTooShort { got: f64 },

    #[error("car length must be finite and non-negative (got {got})")]
    BadCarLength { got: f64 },

    #[error(
        "car {car}: pit box at {box_location} s lies beyond the pit lane \
         ({pit_lane_secs} s) — the car could never reach it"
    )]
    PitBoxUnreachable {
        car:           String,
        box_location:  f64,
        pit_lane_secs: f64,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Shorthand result type for race construction.
pub type SimResult<T> = Result<T, SimError>;
