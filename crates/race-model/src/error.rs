//! Entity validation errors.
//!
//! Every variant is a configuration mistake caught at construction time.
//! The simulation never sees an invalid entity, so downstream arithmetic
//! cannot produce infinite or NaN phase times.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("car {car}: {what} must be positive (got {got})")]
    NonPositive {
        car:  String,
        what: &'static str,
        got:  f64,
    },

    #[error("car {car}: {what} must not be negative (got {got})")]
    Negative {
        car:  String,
        what: &'static str,
        got:  f64,
    },

    #[error("track {track}: {what} must be positive (got {got})")]
    TrackNonPositive {
        track: String,
        what:  &'static str,
        got:   f64,
    },

    #[error("track {track}: corner list is empty")]
    NoCorners { track: String },

    #[error(
        "track {track}: corner {corner} markers out of order \
         (start {start}, apex {apex}, end {end})"
    )]
    CornerMarkerOrder {
        track:  String,
        corner: String,
        start:  f64,
        apex:   f64,
        end:    f64,
    },

    #[error("track {track}: corner {corner} lies outside the lap (lap length {lap_length})")]
    CornerOutsideLap {
        track:      String,
        corner:     String,
        lap_length: f64,
    },

    #[error("track {track}: corner {corner}: {what} must be positive (got {got})")]
    CornerNonPositive {
        track:  String,
        corner: String,
        what:   &'static str,
        got:    f64,
    },

    #[error("track {track}: corner {corner}: {what} must not be negative (got {got})")]
    CornerNegative {
        track:  String,
        corner: String,
        what:   &'static str,
        got:    f64,
    },

    #[error("track {track}: corners are not ordered by start distance")]
    UnorderedCorners { track: String },

    #[error("track {track}: more than one pit entry corner")]
    MultiplePitEntries { track: String },
}

/// Shorthand result type for entity construction.
pub type ModelResult<T> = Result<T, ModelError>;
