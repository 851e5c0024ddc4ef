//! Roster and qualifying errors.

use race_model::ModelError;
use race_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("no entrants to qualify")]
    NoEntrants,

    #[error("roster configuration lists no candidate pit laps")]
    NoPitLaps,

    #[error("roster distribution for {what} is degenerate (non-finite mean or negative spread)")]
    BadDistribution { what: &'static str },

    #[error("car {car}: qualifying produced no flying lap")]
    NoFlyingLap { car: String },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Shorthand result type for roster and qualifying operations.
pub type GridResult<T> = Result<T, GridError>;
