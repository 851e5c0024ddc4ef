//! The `RaceSim` struct and its macro-tick loop.

use std::time::Instant;

use race_core::{CarId, MIN_SUB_STEP};
use race_dynamics::{FuelModel, plan_step};
use race_model::{Car, CornerKind, Track};

use crate::context::{Finish, RaceContext};
use crate::frame::TelemetryFrame;
use crate::observer::RaceObserver;
use crate::overtake;
use crate::params::RaceParams;
use crate::pit::{self, PitPhase};

/// Slack on floating-point time accumulation at the end of a tick.
const TIME_EPS: f64 = 1e-9;

/// Tolerance for "the committed displacement reached the apex".
const APEX_EPS: f64 = 1e-3;

// ── Classification ────────────────────────────────────────────────────────────

/// One car's final result.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarResult {
    pub car:  CarId,
    pub name: String,
    /// `None` marks a car still on track when the run was truncated.
    pub finish: Option<Finish>,
}

/// The final classification: finishers by finish position, then any
/// did-not-finish cars in running order.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    pub entries: Vec<CarResult>,
}

impl Classification {
    /// The race winner, if anyone finished.
    pub fn winner(&self) -> Option<&CarResult> {
        self.entries.first().filter(|e| e.finish.is_some())
    }
}

// ── RaceSim ───────────────────────────────────────────────────────────────────

/// The race simulation engine.
///
/// Owns the track, the cars, and the per-run [`RaceContext`]; nothing is
/// shared, so independent `RaceSim` values may run on separate threads.
/// Create via [`RaceBuilder`][crate::RaceBuilder].
pub struct RaceSim {
    pub track:   Track,
    pub params:  RaceParams,
    pub cars:    Vec<Car>,
    pub context: RaceContext,
    pub(crate) fuel: FuelModel,
    pub(crate) race_distance: f64,
}

impl RaceSim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every car has finished, or the wall-clock budget runs out.
    ///
    /// Construction validated every input, so the run itself is infallible;
    /// wall-clock truncation is a normal termination mode reported through
    /// `None` finishes in the returned [`Classification`].
    pub fn run<O: RaceObserver>(&mut self, observer: &mut O) -> Classification {
        let wall_start = Instant::now();
        loop {
            if self.context.all_finished() {
                break;
            }
            if let Some(limit) = self.params.wall_clock_limit {
                if wall_start.elapsed() >= limit {
                    log::info!(
                        "wall-clock limit reached at {} with {}/{} cars finished",
                        self.context.clock,
                        self.context.finished_count(),
                        self.cars.len(),
                    );
                    break;
                }
            }
            observer.on_tick_start(self.context.clock.current_tick);
            self.process_tick(observer);
            self.context.clock.advance();
        }

        let classification = self.classification();
        observer.on_race_end(&classification);
        classification
    }

    /// Run exactly `n` macro-ticks from the current position.
    ///
    /// Useful for tests and incremental stepping; stops early if every car
    /// finishes.
    pub fn run_ticks<O: RaceObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.context.all_finished() {
                break;
            }
            observer.on_tick_start(self.context.clock.current_tick);
            self.process_tick(observer);
            self.context.clock.advance();
        }
    }

    /// Build the classification from the current context state.
    pub fn classification(&self) -> Classification {
        let mut entries: Vec<CarResult> = self
            .context
            .ordering()
            .iter()
            .map(|&car_id| CarResult {
                car:    car_id,
                name:   self.cars[car_id.index()].spec.name.clone(),
                finish: self.context.finish(car_id),
            })
            .collect();
        // Finishers in finish order; DNFs keep their running order behind them.
        entries.sort_by_key(|e| e.finish.map_or(i64::MAX, |f| f.position as i64));
        Classification { entries }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: RaceObserver>(&mut self, observer: &mut O) {
        // Snapshot the order at tick start: each car moves exactly once per
        // tick even if the ordering shifts underneath the iteration.
        let order: Vec<CarId> = self.context.ordering().to_vec();

        for car_id in order {
            if self.context.is_finished(car_id) {
                continue;
            }
            let pos = self.context.position_of(car_id);
            let idx = car_id.index();

            // Lap completed during the previous tick?
            if self.cars[idx].lap_location(self.track.lap_length) > self.track.lap_length {
                self.cars[idx].state.lap_count += 1;
                let lap = self.cars[idx].state.lap_count;
                log::debug!(
                    "{}: {} completed lap {lap} in position {pos}",
                    self.context.clock,
                    self.cars[idx],
                );
                observer.on_lap(car_id, lap);
            }

            // Crossed the finish distance during the previous tick?
            if self.cars[idx].state.distance > self.race_distance {
                let finish = Finish {
                    position: pos as u32,
                    time:     self.context.clock.elapsed_secs(),
                };
                self.context.record_finish(car_id, finish);
                log::debug!(
                    "{}: {} finished in position {pos}",
                    self.context.clock,
                    self.cars[idx],
                );
                observer.on_finish(car_id, &finish);
                continue;
            }

            self.advance_car(pos, car_id, observer);
        }
    }

    /// Resolve one car's sub-increments for this macro-tick.
    fn advance_car<O: RaceObserver>(&mut self, mut pos: usize, car_id: CarId, observer: &mut O) {
        let budget = self.params.tick_secs;
        let idx = car_id.index();
        let mut sum_t = 0.0;
        let mut blocked = false;

        while sum_t < budget - TIME_EPS && !blocked {
            let time_left = budget - sum_t;

            // ── Pit lane ──────────────────────────────────────────────────
            if self.cars[idx].state.in_pit {
                self.cars[idx].state.corner_penalty = 0.0;
                match pit::phase(&self.cars[idx], &self.track) {
                    PitPhase::Exit => {
                        self.cars[idx].state.in_pit = false;
                        log::debug!(
                            "{}: {} has left the pits",
                            self.context.clock,
                            self.cars[idx],
                        );
                    }
                    PitPhase::InBox => {
                        let t = pit::phase_time_left(&self.cars[idx], &self.track)
                            .min(1.0)
                            .min(time_left)
                            .max(MIN_SUB_STEP);
                        let state = &mut self.cars[idx].state;
                        state.fit_new_tyres();
                        state.speed = 0.0;
                        state.distance_step = 0.0;
                        state.pit_duration += t;
                        sum_t += t;
                        self.emit_frame(observer, car_id, pos, sum_t);
                    }
                    PitPhase::Approaching | PitPhase::Leaving => {
                        let t = pit::phase_time_left(&self.cars[idx], &self.track)
                            .min(1.0)
                            .min(time_left)
                            .max(MIN_SUB_STEP);
                        let limit = self.track.pit_speed_limit;
                        let res = overtake::resolve(
                            &mut self.context,
                            &self.cars,
                            &self.track,
                            pos,
                            t * limit,
                            limit,
                        );
                        let state = &mut self.cars[idx].state;
                        state.distance += res.distance;
                        state.distance_step = res.distance;
                        state.speed = res.speed;
                        state.pit_duration += t;
                        blocked = res.blocked;
                        pos = res.position;
                        sum_t += t;
                        self.emit_frame(observer, car_id, pos, sum_t);
                    }
                }
                continue;
            }

            // ── On-track sub-increment ────────────────────────────────────
            //
            // Commit last step's wear, refresh effective rates, then plan
            // the next phase against the upcoming apex.
            self.fuel.apply(&mut self.cars[idx]);

            let car = &self.cars[idx];
            let next = self.track.corner(car.state.next_corner);
            let adjusted_apex =
                next.apex_speed_for(car.state.tyre_performance, car.spec.cornering);
            let target_apex = adjusted_apex * car.spec.drive_style;
            let mut apex_dist = next.apex
                + self.track.lap_length * car.state.lap_count as f64
                - car.state.distance;
            if apex_dist < 0.0 {
                // First corner of the next lap: wrap across the line.
                apex_dist += self.track.lap_length;
            }
            let plan = plan_step(
                car.state.speed,
                car.state.accel,
                car.state.brake,
                car.spec.max_speed,
                target_apex,
                apex_dist,
                time_left,
            );

            let res = overtake::resolve(
                &mut self.context,
                &self.cars,
                &self.track,
                pos,
                plan.distance,
                plan.end_speed,
            );
            {
                let state = &mut self.cars[idx].state;
                state.distance += res.distance;
                state.distance_step = res.distance;
                state.speed = res.speed;
            }
            blocked = res.blocked;
            pos = res.position;
            sum_t += plan.duration;
            self.emit_frame(observer, car_id, pos, sum_t);

            if res.distance >= apex_dist - APEX_EPS {
                self.cross_apex(car_id, adjusted_apex);
            }
        }
    }

    /// Corner-apex bookkeeping: overshoot penalty, pit entry, and the
    /// cyclic corner-pointer advance.
    fn cross_apex(&mut self, car_id: CarId, adjusted_apex: f64) {
        let idx = car_id.index();
        let corner_id = self.cars[idx].state.next_corner;
        let corner = self.track.corner(corner_id);
        let corner_span = corner.end - corner.start;
        let corner_kind = corner.kind;

        // Cubic overshoot penalty: exceeding the achievable apex speed is
        // punished disproportionately.
        let speed_delta = self.cars[idx].state.speed - adjusted_apex;
        self.cars[idx].state.corner_penalty = (speed_delta.powi(3) * corner_span).max(0.0);

        if corner_kind == CornerKind::PitEntry {
            let state = &mut self.cars[idx].state;
            state.in_pit = true;
            state.pit_duration = 0.0;
            log::debug!(
                "{}: {} has entered the pits",
                self.context.clock,
                self.cars[idx],
            );
        }

        // Advance the corner pointer; hide the pit-entry marker from cars
        // not stopping on the lap they are about to start.
        let pit_lap = self.cars[idx].spec.pit_lap;
        let lap_count = self.cars[idx].state.lap_count;
        let mut next = self.track.next_corner_id(corner_id);
        if self.track.corner(next).kind == CornerKind::PitEntry && lap_count + 1 != pit_lap {
            next = self.track.next_corner_id(next);
        }
        self.cars[idx].state.next_corner = next;
    }

    fn emit_frame<O: RaceObserver>(
        &self,
        observer: &mut O,
        car_id: CarId,
        pos: usize,
        sum_t: f64,
    ) {
        let car = &self.cars[car_id.index()];
        let frame = TelemetryFrame {
            sim_time:         self.context.clock.elapsed_secs() + sum_t,
            car:              car_id,
            lap:              car.state.lap_count,
            position:         pos as u32,
            distance:         car.state.distance,
            speed:            car.state.speed,
            tyre_wear:        car.state.tyre_wear,
            tyre_performance: car.state.tyre_performance,
        };
        observer.on_frame(&frame);
    }
}
