//! `race-output` — telemetry and classification writers for rust_race.
//!
//! Backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                         |
//! |----------|---------|---------------------------------------|
//! | *(none)* | CSV     | `telemetry.csv`, `classification.csv` |
//! | `sqlite` | SQLite  | `race.db`                             |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`RaceOutputObserver`], which implements `race_sim::RaceObserver` and
//! batches frames so writes stay O(1) amortized per frame.
//!
//! # Usage
//!
//! ```rust,ignore
//! use race_output::{CsvWriter, RaceOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RaceOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RaceOutputObserver;
pub use row::ClassificationRow;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
