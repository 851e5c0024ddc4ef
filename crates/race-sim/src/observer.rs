//! Race observer trait for progress reporting and telemetry collection.

use race_core::{CarId, Tick};

use crate::context::Finish;
use crate::frame::TelemetryFrame;
use crate::sim::Classification;

/// Callbacks invoked by [`RaceSim::run`][crate::RaceSim::run] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — lap printer
///
/// ```rust,ignore
/// struct LapPrinter;
///
/// impl RaceObserver for LapPrinter {
///     fn on_lap(&mut self, car: CarId, lap: u32) {
///         println!("{car} completed lap {lap}");
///     }
/// }
/// ```
pub trait RaceObserver {
    /// Called at the very start of each macro-tick, before any car moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per car per executed sub-increment, after the car's state
    /// has been committed.
    fn on_frame(&mut self, _frame: &TelemetryFrame) {}

    /// Called when a car is credited with a completed lap.
    fn on_lap(&mut self, _car: CarId, _lap: u32) {}

    /// Called when a car crosses the finish distance.
    fn on_finish(&mut self, _car: CarId, _finish: &Finish) {}

    /// Called once after the run terminates (normally or by wall-clock cut).
    fn on_race_end(&mut self, _classification: &Classification) {}
}

/// A [`RaceObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl RaceObserver for NoopObserver {}

// ── TelemetryLog ──────────────────────────────────────────────────────────────

/// In-memory telemetry collector with O(1) amortized appends.
///
/// Pre-size with [`with_capacity`][Self::with_capacity] when the frame count
/// is roughly known (≈ cars × race seconds × 1–2 frames/second) to avoid
/// reallocation during the run.
#[derive(Default)]
pub struct TelemetryLog {
    frames: Vec<TelemetryFrame>,
}

impl TelemetryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(frames),
        }
    }

    /// All frames recorded so far, in emission order.
    pub fn frames(&self) -> &[TelemetryFrame] {
        &self.frames
    }

    /// Consume the log, yielding the frame buffer.
    pub fn into_frames(self) -> Vec<TelemetryFrame> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl RaceObserver for TelemetryLog {
    fn on_frame(&mut self, frame: &TelemetryFrame) {
        self.frames.push(*frame);
    }
}
