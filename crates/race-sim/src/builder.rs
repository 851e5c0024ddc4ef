//! Fluent builder for constructing a [`RaceSim`].

use race_core::{CarId, CornerId};
use race_dynamics::FuelModel;
use race_model::{Car, CarSpec, CornerKind, Track};

use crate::context::RaceContext;
use crate::params::RaceParams;
use crate::sim::RaceSim;
use crate::{SimError, SimResult};

/// One slot on the starting grid: a car specification and its start line
/// offset (0 for pole, negative for cars further back).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridEntry {
    pub spec:           CarSpec,
    pub start_distance: f64,
}

/// Fluent builder for [`RaceSim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = RaceBuilder::new(track, RaceParams::new(10, 5.0))
///     .entry(pole_spec, 0.0)
///     .entry(second_spec, -8.0)
///     .build()?;
/// ```
pub struct RaceBuilder {
    track:   Track,
    params:  RaceParams,
    entries: Vec<GridEntry>,
}

impl RaceBuilder {
    pub fn new(track: Track, params: RaceParams) -> Self {
        Self {
            track,
            params,
            entries: Vec::new(),
        }
    }

    /// Append one grid slot (front to back).
    pub fn entry(mut self, spec: CarSpec, start_distance: f64) -> Self {
        self.entries.push(GridEntry { spec, start_distance });
        self
    }

    /// Replace the whole grid with `entries` (front to back).
    pub fn grid(mut self, entries: Vec<GridEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Validate everything and return a ready-to-run [`RaceSim`].
    ///
    /// Fails fast on degenerate car capabilities (via `Car::new`), an empty
    /// grid, bad race parameters, or a pit box that lies beyond the pit
    /// lane and could never be reached.
    pub fn build(self) -> SimResult<RaceSim> {
        self.params.validate()?;
        if self.entries.is_empty() {
            return Err(SimError::EmptyGrid);
        }

        let mut cars = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            if entry.spec.pit_lap >= 1 && entry.spec.box_location >= self.track.pit_lane_secs {
                return Err(SimError::PitBoxUnreachable {
                    car:           entry.spec.name.clone(),
                    box_location:  entry.spec.box_location,
                    pit_lane_secs: self.track.pit_lane_secs,
                });
            }
            let mut car = Car::new(entry.spec)?;
            car.state.distance = entry.start_distance;
            // The first corner of the lap could be the pit-entry marker;
            // point cars not stopping on lap 1 past it.
            if self.track.corner(CornerId(0)).kind == CornerKind::PitEntry
                && car.spec.pit_lap != 1
            {
                car.state.next_corner = self.track.next_corner_id(CornerId(0));
            }
            cars.push(car);
        }

        let ordering: Vec<CarId> = (0..cars.len() as u32).map(CarId).collect();
        let context = RaceContext::new(ordering, self.params.car_length, self.params.tick_secs);
        let fuel = FuelModel::new(
            self.track.lap_fuel_effect,
            self.track.lap_length,
            self.params.lap_count,
        );
        let race_distance = self.track.lap_length * self.params.lap_count as f64;

        Ok(RaceSim {
            track: self.track,
            params: self.params,
            cars,
            context,
            fuel,
            race_distance,
        })
    }
}
