//! Wall-clock stopwatch for measuring run performance.
//!
//! Misuse (double start, stop without start) is reported through a typed
//! error rather than a panic, so batch drivers can keep going.

use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StopwatchError {
    #[error("stopwatch is already running — stop it first")]
    AlreadyRunning,

    #[error("stopwatch is not running — start it first")]
    NotRunning,
}

/// Measures elapsed wall-clock time between `start` and `stop`.
#[derive(Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    elapsed:    Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin timing.
    pub fn start(&mut self) -> Result<(), StopwatchError> {
        if self.started_at.is_some() {
            return Err(StopwatchError::AlreadyRunning);
        }
        self.started_at = Some(Instant::now());
        Ok(())
    }

    /// Stop timing and return the elapsed duration.
    ///
    /// The duration is also retained and readable via [`elapsed`][Self::elapsed].
    pub fn stop(&mut self) -> Result<Duration, StopwatchError> {
        let started = self.started_at.take().ok_or(StopwatchError::NotRunning)?;
        let elapsed = started.elapsed();
        self.elapsed = Some(elapsed);
        Ok(elapsed)
    }

    /// `true` while the stopwatch is running.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// The duration recorded by the most recent `stop`, if any.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }
}
