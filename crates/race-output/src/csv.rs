//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `telemetry.csv`
//! - `classification.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use race_sim::TelemetryFrame;

use crate::writer::OutputWriter;
use crate::{ClassificationRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    telemetry:      Writer<File>,
    classification: Writer<File>,
    finished:       bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut telemetry = Writer::from_path(dir.join("telemetry.csv"))?;
        telemetry.write_record([
            "sim_time",
            "car_id",
            "lap",
            "position",
            "distance",
            "speed",
            "tyre_wear",
            "tyre_performance",
        ])?;

        let mut classification = Writer::from_path(dir.join("classification.csv"))?;
        classification.write_record(["car_id", "name", "finish_position", "finish_time"])?;

        Ok(Self {
            telemetry,
            classification,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frames(&mut self, frames: &[TelemetryFrame]) -> OutputResult<()> {
        for frame in frames {
            self.telemetry.write_record(&[
                frame.sim_time.to_string(),
                frame.car.0.to_string(),
                frame.lap.to_string(),
                frame.position.to_string(),
                frame.distance.to_string(),
                frame.speed.to_string(),
                frame.tyre_wear.to_string(),
                frame.tyre_performance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_classification(&mut self, rows: &[ClassificationRow]) -> OutputResult<()> {
        for row in rows {
            // DNF cars get empty position/time fields.
            self.classification.write_record(&[
                row.car_id.to_string(),
                row.name.clone(),
                row.position.map(|p| p.to_string()).unwrap_or_default(),
                row.time.map(|t| t.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.telemetry.flush()?;
        self.classification.flush()?;
        Ok(())
    }
}
