//! The `OutputWriter` trait implemented by all backend writers.

use race_sim::TelemetryFrame;

use crate::{ClassificationRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RaceOutputObserver::take_error`][crate::RaceOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of telemetry frames.
    fn write_frames(&mut self, frames: &[TelemetryFrame]) -> OutputResult<()>;

    /// Write the final classification.
    fn write_classification(&mut self, rows: &[ClassificationRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
