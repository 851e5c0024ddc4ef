//! `RaceOutputObserver<W>` — bridges `RaceObserver` to an `OutputWriter`.

use race_sim::{Classification, RaceObserver, TelemetryFrame};

use crate::row::ClassificationRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// Frames buffered before each batched write.
const BATCH_SIZE: usize = 1_024;

/// A [`RaceObserver`] that streams telemetry frames and the final
/// classification to any [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Frames are buffered and flushed in batches so per-frame cost stays O(1)
/// amortized.  Errors from the writer are stored internally because
/// observer methods have no return value; after `sim.run()` returns, check
/// for them with [`take_error`][Self::take_error].
pub struct RaceOutputObserver<W: OutputWriter> {
    writer:     W,
    buffer:     Vec<TelemetryFrame>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RaceOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(BATCH_SIZE),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_frames(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_frames(&self.buffer);
        self.buffer.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RaceObserver for RaceOutputObserver<W> {
    fn on_frame(&mut self, frame: &TelemetryFrame) {
        self.buffer.push(*frame);
        if self.buffer.len() >= BATCH_SIZE {
            self.flush_frames();
        }
    }

    fn on_race_end(&mut self, classification: &Classification) {
        self.flush_frames();

        let rows: Vec<ClassificationRow> = classification
            .entries
            .iter()
            .map(|entry| ClassificationRow {
                car_id:   entry.car.0,
                name:     entry.name.clone(),
                position: entry.finish.map(|f| f.position),
                time:     entry.finish.map(|f| f.time),
            })
            .collect();
        let result = self.writer.write_classification(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
