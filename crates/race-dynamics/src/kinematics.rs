//! Phase planning for one sub-increment.
//!
//! All rates are constant within a sub-increment, so displacement integrals
//! are closed-form quadratics.  `brake` is everywhere a positive
//! deceleration magnitude; signed rates appear only where an integral needs
//! them.

use race_core::MIN_SUB_STEP;

use crate::solve::bisect;

// ── Closed-form pieces ────────────────────────────────────────────────────────

/// Distance needed to brake from `v0` down to `apex_speed` at constant
/// deceleration `brake`.
///
/// Negative when `v0 < apex_speed` (no braking required); callers rely on
/// that sign to classify the phase.
#[inline]
pub fn braking_distance(v0: f64, apex_speed: f64, brake: f64) -> f64 {
    let t = (v0 - apex_speed) / brake;
    v0 * t - 0.5 * brake * t * t
}

/// Speed after `t` seconds at signed rate `rate`.
#[inline]
fn speed_after(v0: f64, rate: f64, t: f64) -> f64 {
    v0 + rate * t
}

/// Distance covered in `t` seconds starting at `v0` with signed rate `rate`,
/// transitioning to a cruise at `max_speed` if the speed cap is reached
/// mid-interval.
pub fn distance_covered(v0: f64, rate: f64, t: f64, max_speed: f64) -> f64 {
    if speed_after(v0, rate, t) > max_speed {
        // Split the integral at the crossing time.
        let t_cross = ((max_speed - v0) / rate).clamp(0.0, t);
        let accel_dist = v0 * t_cross + 0.5 * rate * t_cross * t_cross;
        accel_dist + max_speed * (t - t_cross)
    } else {
        v0 * t + 0.5 * rate * t * t
    }
}

// ── Root equations ────────────────────────────────────────────────────────────

/// Braking time `t` in [0, 1] such that the braking displacement equals
/// `apex_dist`.  `None` if no root brackets (the apex is further than one
/// second of braking reaches, or overshoot is unavoidable).
pub fn solve_brake_time(v0: f64, brake: f64, apex_dist: f64) -> Option<f64> {
    bisect(|t| v0 * t - 0.5 * brake * t * t - apex_dist, 0.0, 1.0)
}

/// Acceleration time `t_a` in [0, 1] such that accelerating for `t_a` and
/// then shedding the gained speed consumes exactly `dist_delta` of headroom.
///
/// The shed time is `t_b = (accel / brake) · t_a` (the gained speed divided
/// by the braking rate); the composite displacement is the acceleration
/// integral plus the extra braking run the higher entry speed costs.
///
/// `None` if no root brackets — the car can accelerate for the whole
/// interval without eating its braking margin.
pub fn solve_accel_brake_time(v0: f64, accel: f64, brake: f64, dist_delta: f64) -> Option<f64> {
    let ratio = accel / brake;
    bisect(
        |t_a| {
            let t_b = ratio * t_a;
            v0 * t_a + 0.5 * accel * t_a * t_a + v0 * t_b + 0.5 * brake * t_b * t_b - dist_delta
        },
        0.0,
        1.0,
    )
}

// ── Step plan ─────────────────────────────────────────────────────────────────

/// What the car does during the planned sub-increment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Brake,
    Cruise,
    Accelerate,
}

/// One planned sub-increment: how long, how far, and the exit speed,
/// assuming the car is unobstructed.  The overtake resolver may still
/// shorten the displacement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepPlan {
    pub phase:     Phase,
    /// Seconds consumed, in [`MIN_SUB_STEP`, budget] (may overshoot the
    /// budget by less than `MIN_SUB_STEP` at the very end of a tick).
    pub duration:  f64,
    /// Unobstructed displacement over `duration`, metres.
    pub distance:  f64,
    /// Speed at the end of `duration`, clamped to [0, max_speed].
    pub end_speed: f64,
}

/// Plan the next sub-increment for a car travelling at `v0` with effective
/// rates `accel`/`brake`, heading for an apex `apex_dist` metres away with
/// personal target speed `apex_speed`.  `budget` is the time left in the
/// current macro-tick.
pub fn plan_step(
    v0:         f64,
    accel:      f64,
    brake:      f64,
    max_speed:  f64,
    apex_speed: f64,
    apex_dist:  f64,
    budget:     f64,
) -> StepPlan {
    let brake_dist = braking_distance(v0, apex_speed, brake);
    let dist_delta = apex_dist - brake_dist;

    if dist_delta <= 0.0 {
        // Braking must start now (or is overdue).  Brake until the apex is
        // reached, the full speed gap is closed, or the budget runs out.
        let gap_time = (v0 - apex_speed) / brake;
        let to_apex = solve_brake_time(v0, brake, apex_dist).unwrap_or(1.0);
        let t = gap_time.min(to_apex).min(budget).max(MIN_SUB_STEP);
        StepPlan {
            phase:     Phase::Brake,
            duration:  t,
            distance:  distance_covered(v0, -brake, t, max_speed),
            end_speed: (v0 - brake * t).max(0.0),
        }
    } else if v0 >= max_speed {
        // Flat out: hold max speed until the braking point.
        let t = (dist_delta / max_speed).min(budget).max(MIN_SUB_STEP);
        StepPlan {
            phase:     Phase::Cruise,
            duration:  t,
            distance:  distance_covered(v0, accel, t, max_speed),
            end_speed: max_speed,
        }
    } else {
        // Accelerate until max speed, the braking point, or the budget —
        // whichever comes first.
        let to_max = (max_speed - v0) / accel;
        let to_brake_point = solve_accel_brake_time(v0, accel, brake, dist_delta).unwrap_or(1.0);
        let t = to_max.min(to_brake_point).min(budget).max(MIN_SUB_STEP);
        StepPlan {
            phase:     Phase::Accelerate,
            duration:  t,
            distance:  distance_covered(v0, accel, t, max_speed),
            end_speed: (v0 + accel * t).min(max_speed),
        }
    }
}
