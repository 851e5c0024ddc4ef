//! Per-run race context.
//!
//! Everything here was ambient global state in older race simulators: the
//! shared clock, the position ordering, the finished set, the following
//! distance.  Bundling it into a value owned by exactly one [`RaceSim`]
//! removes the hidden coupling between the overtake resolver and the tick
//! loop and makes independent runs safe to execute concurrently.

use race_core::{CarId, RaceClock};

/// A car's final result, recorded the tick it crosses the finish distance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finish {
    /// Position in the running order at the moment of finishing, 0-based.
    pub position: u32,
    /// Race time, seconds.
    pub time: f64,
}

/// Mutable shared state for one simulation run.
#[derive(Debug)]
pub struct RaceContext {
    /// The race clock, advanced once per macro-tick.
    pub clock: RaceClock,
    /// Minimum following gap between ordered cars, metres.
    pub car_length: f64,
    /// Current running order, leader first.
    ordering: Vec<CarId>,
    /// Finish records indexed by `CarId`; `None` while still racing.
    finishes: Vec<Option<Finish>>,
    finished_count: usize,
}

impl RaceContext {
    /// Build a context from the starting order (leader first).
    pub fn new(ordering: Vec<CarId>, car_length: f64, tick_secs: f64) -> Self {
        let n = ordering.len();
        Self {
            clock: RaceClock::new(tick_secs),
            car_length,
            ordering,
            finishes: vec![None; n],
            finished_count: 0,
        }
    }

    pub fn car_count(&self) -> usize {
        self.ordering.len()
    }

    /// Current running order, leader first.
    pub fn ordering(&self) -> &[CarId] {
        &self.ordering
    }

    /// The car currently holding `position` (0 = leader).
    #[inline]
    pub fn car_at(&self, position: usize) -> CarId {
        self.ordering[position]
    }

    /// The position currently held by `car`.
    ///
    /// # Panics
    /// Panics if `car` is not part of this run.
    pub fn position_of(&self, car: CarId) -> usize {
        self.ordering
            .iter()
            .position(|&c| c == car)
            .expect("car is part of this run")
    }

    /// Swap two positions in the running order.
    pub(crate) fn swap_positions(&mut self, a: usize, b: usize) {
        self.ordering.swap(a, b);
    }

    #[inline]
    pub fn is_finished(&self, car: CarId) -> bool {
        self.finishes[car.index()].is_some()
    }

    pub fn finish(&self, car: CarId) -> Option<Finish> {
        self.finishes[car.index()]
    }

    pub(crate) fn record_finish(&mut self, car: CarId, finish: Finish) {
        if self.finishes[car.index()].is_none() {
            self.finishes[car.index()] = Some(finish);
            self.finished_count += 1;
        }
    }

    pub fn finished_count(&self) -> usize {
        self.finished_count
    }

    pub fn all_finished(&self) -> bool {
        self.finished_count == self.ordering.len()
    }
}
