//! The overtake resolver: adjudicates one car's candidate movement against
//! the rest of the field.
//!
//! Given the mover's unobstructed displacement and speed for this
//! sub-increment, the resolver scans the cars ahead (closest first),
//! decides how far the mover actually travels, and updates the position
//! ordering in place when a pass completes.  A blocked mover is clamped to
//! the minimum following gap behind its blocker and forfeits the rest of
//! its macro-tick; its sudden loss of pace can let trailing cars repass it
//! in a cascade.
//!
//! "Alongside" — projected within a car length of the car ahead but not
//! past it — never changes the ordering by itself; the swap happens only
//! once the displacement condition and the speed-threshold condition are
//! simultaneously satisfied.

use race_model::{Car, CornerKind, Track};

use crate::context::RaceContext;

/// The adjudicated movement for one sub-increment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Displacement actually granted, metres.  Never negative.
    pub distance: f64,
    /// Speed at the end of the sub-increment, m/s.
    pub speed: f64,
    /// `true` if the mover was clamped behind another car; ends the mover's
    /// sub-increment loop for this macro-tick.
    pub blocked: bool,
    /// The mover's position after any ordering changes.
    pub position: usize,
}

/// Resolve the mover at `mover_pos` against the field.
///
/// Reads all car state immutably; the only mutation is to the ordering
/// inside `ctx`.  The caller commits the returned displacement and speed to
/// the mover's state afterwards.
pub(crate) fn resolve(
    ctx: &mut RaceContext,
    cars: &[Car],
    track: &Track,
    mover_pos: usize,
    potential_dist: f64,
    potential_speed: f64,
) -> Resolution {
    let mover_id = ctx.car_at(mover_pos);
    let mover = &cars[mover_id.index()];

    let mut res = Resolution {
        distance: potential_dist,
        speed:    potential_speed,
        blocked:  false,
        position: mover_pos,
    };

    // The leader is never obstructed.
    if mover_pos == 0 {
        return res;
    }

    let car_length = ctx.car_length;

    // Scan the cars ahead, starting with the immediately adjacent one.
    for ahead_pos in (0..mover_pos).rev() {
        let ahead_id = ctx.car_at(ahead_pos);
        let ahead = &cars[ahead_id.index()];

        // The gap survives the move: nothing further ahead can matter.
        if mover.state.distance + potential_dist <= ahead.state.distance - car_length {
            break;
        }

        // A car that has taken the flag no longer contests its position.
        if ctx.is_finished(ahead_id) {
            break;
        }

        if ahead.state.in_pit {
            let mover_pitting = mover.state.in_pit
                || track.corner(mover.state.next_corner).kind == CornerKind::PitEntry;
            if !mover_pitting {
                // An on-track car sweeps past the pit lane unhindered.
                if mover.state.distance + potential_dist > ahead.state.distance {
                    ctx.swap_positions(ahead_pos, res.position);
                    res.position = ahead_pos;
                    log::debug!("{}: {mover} has overtaken {ahead} (in pit lane)", ctx.clock);
                }
                continue;
            }
            if ahead.state.speed == 0.0 {
                // Stationary in its box: a pit-lane mover may slip past.
                if mover.state.distance + potential_dist > ahead.state.distance {
                    ctx.swap_positions(ahead_pos, res.position);
                    res.position = ahead_pos;
                    log::debug!("{}: {mover} has passed {ahead} in its pit box", ctx.clock);
                }
                continue;
            }
            // Two moving pit-lane cars are mutually lane-constrained.
            res.distance = (ahead.state.distance - mover.state.distance - car_length).max(0.0);
            res.speed = ahead.state.speed.min(potential_speed);
            res.blocked = true;
            log::trace!("{}: {mover} is held up behind {ahead} in the pit lane", ctx.clock);
            break;
        }

        // On-track contest: the threshold comes from whichever corner zone
        // the mover currently occupies — 0 on a straight.
        let lap_dist = mover.state.distance - track.lap_length * mover.state.lap_count as f64;
        let next = track.corner(mover.state.next_corner);
        let prev = track.prev_corner(mover.state.next_corner);
        let threshold = if prev.contains(lap_dist) {
            prev.overtake
        } else if next.contains(lap_dist) {
            next.overtake
        } else {
            0.0
        };

        if threshold == 0.0 || potential_speed - ahead.state.speed >= threshold {
            if mover.state.distance + potential_dist < ahead.state.distance {
                // Alongside: the pass has not completed, no ordering change.
                log::trace!("{}: {mover} is alongside {ahead}", ctx.clock);
            } else {
                ctx.swap_positions(ahead_pos, res.position);
                res.position = ahead_pos;
                log::debug!("{}: {mover} has overtaken {ahead}", ctx.clock);
            }
            continue;
        }

        // Blocked: clamp to the minimum following gap and forfeit the rest
        // of this macro-tick.
        res.distance = (ahead.state.distance - mover.state.distance - car_length).max(0.0);
        res.speed = ahead.state.speed.min(potential_speed);
        res.blocked = true;
        log::trace!("{}: {mover} is stuck behind {ahead}", ctx.clock);

        // The mover just lost pace: any trailing car whose pre-move position
        // already lies beyond the mover's clamped end point repasses it.
        let n = ctx.car_count();
        for k in (res.position + 1)..n {
            let behind_id = ctx.car_at(k);
            let behind = &cars[behind_id.index()];
            if res.distance < behind.state.distance - mover.state.distance {
                ctx.swap_positions(k - 1, k);
                res.position = k;
                log::debug!("{}: {mover} has been repassed by {behind}", ctx.clock);
            } else {
                break;
            }
        }
        break;
    }

    res
}
