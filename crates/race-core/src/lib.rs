//! `race-core` — foundational types for the `rust_race` simulation workspace.
//!
//! This crate is a dependency of every other `race-*` crate.  It intentionally
//! has no `race-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`ids`]       | `CarId`, `CornerId`                               |
//! | [`time`]      | `Tick`, `RaceClock`, sub-increment bounds         |
//! | [`rng`]       | `SimRng` (deterministic, seedable)                |
//! | [`stopwatch`] | `Stopwatch` wall-clock timer                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod stopwatch;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CarId, CornerId};
pub use rng::SimRng;
pub use stopwatch::{Stopwatch, StopwatchError};
pub use time::{MIN_SUB_STEP, RaceClock, Tick};
