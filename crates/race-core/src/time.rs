//! Simulation time model.
//!
//! # Design
//!
//! The race clock advances in fixed **macro-ticks**.  Within a macro-tick the
//! simulation resolves each car through one or more variable-length
//! **sub-increments**; the continuous time of a telemetry frame is
//!
//!   sim_time = tick * tick_secs + time_into_tick
//!
//! Using an integer tick as the canonical outer step means the tick loop's
//! termination arithmetic is exact, while the physics inside a tick stays in
//! continuous `f64` seconds.  The default macro-tick is 1 s, which is also
//! the per-car sub-increment budget.

use std::fmt;

/// Shortest permitted sub-increment, in seconds.
///
/// Phase durations are floored here so that a car parked a hair's breadth
/// from a phase boundary cannot stall the tick loop with ever-smaller steps.
pub const MIN_SUB_STEP: f64 = 0.005;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute macro-tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RaceClock ─────────────────────────────────────────────────────────────────

/// Converts between macro-tick counts and continuous race seconds.
///
/// `RaceClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceClock {
    /// How many race seconds one macro-tick represents.  Default: 1.0.
    pub tick_secs: f64,
    /// The current tick — advanced by `RaceClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl RaceClock {
    /// Create a clock at tick 0 with the given macro-tick length.
    pub fn new(tick_secs: f64) -> Self {
        Self {
            tick_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one macro-tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed race seconds at the *start* of the current tick.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_secs
    }
}

impl fmt::Display for RaceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs())
    }
}
