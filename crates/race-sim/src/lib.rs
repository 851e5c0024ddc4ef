//! `race-sim` — the simulation engine of the rust_race workspace.
//!
//! # Tick loop
//!
//! ```text
//! while not all cars finished (and within the wall-clock budget):
//!   snapshot the position ordering
//!   for each car, leader first:
//!     ① detect lap / race completion from the previous tick
//!     ② while sub-increment budget remains and the car is not blocked:
//!          pit state machine        (if flagged in-pit)
//!          or tyre/fuel update → kinematics plan → overtake resolution
//!          commit state, emit one telemetry frame
//!          handle apex crossing (corner penalty, pit entry, pointer advance)
//!   advance the race clock by one macro-tick
//! ```
//!
//! A single run is strictly sequential: the overtake resolver's correctness
//! depends on the ordering reflecting every car already processed this tick.
//! The unit of parallelism is the whole run — each [`RaceSim`] owns its
//! [`RaceContext`] and cars, so independent runs may execute concurrently.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use race_sim::{RaceBuilder, RaceParams, TelemetryLog};
//!
//! let mut sim = RaceBuilder::new(track, RaceParams::new(10, 5.0))
//!     .entry(spec, 0.0)
//!     .build()?;
//! let mut log = TelemetryLog::new();
//! let classification = sim.run(&mut log);
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod frame;
pub mod observer;
pub mod overtake;
pub mod params;
pub mod pit;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{GridEntry, RaceBuilder};
pub use context::{Finish, RaceContext};
pub use error::{SimError, SimResult};
pub use frame::TelemetryFrame;
pub use observer::{NoopObserver, RaceObserver, TelemetryLog};
pub use overtake::Resolution;
pub use params::RaceParams;
pub use pit::PitPhase;
pub use sim::{CarResult, Classification, RaceSim};
