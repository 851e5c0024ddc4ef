//! `race-dynamics` — continuous-time physics for the rust_race workspace.
//!
//! Two concerns live here:
//!
//! - [`kinematics`]: given a car's current speed, its target apex speed, and
//!   the distance budget to that apex, decide how long the next sub-increment
//!   lasts and which phase (brake / cruise / accelerate) it spends.  Braking
//!   distance is closed-form; the accel→brake transition and overdue-braking
//!   cases are 1-D roots found by bracketed bisection ([`solve`]).
//! - [`tyre`]: wear, degradation, and the fuel-load scaling that together
//!   produce each car's *effective* acceleration and braking.
//!
//! A root that fails to bracket is an expected physical outcome — "this
//! phase consumes the whole remaining budget" — never an error.

pub mod kinematics;
pub mod solve;
pub mod tyre;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use kinematics::{
    Phase, StepPlan, braking_distance, distance_covered, plan_step, solve_accel_brake_time,
    solve_brake_time,
};
pub use solve::bisect;
pub use tyre::FuelModel;
