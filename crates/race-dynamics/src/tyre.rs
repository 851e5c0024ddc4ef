//! Tyre wear and fuel-load effects.
//!
//! Wear accrues with distance travelled (plus any pending corner-overshoot
//! penalty), scaled up by fuel load: a heavy car early in the race wears its
//! tyres faster.  Degradation is the normalized wear ratio, and performance
//! follows `max(1 − degradation², 0.25)` — quadratic falloff with a hard
//! floor.  Effective acceleration and braking scale by both tyre
//! performance and the remaining fuel load.

use race_model::Car;

/// Fuel parameters fixed for one race.
///
/// `max_fuel_effect` is the full-tank performance penalty
/// (`track.lap_fuel_effect × lap_count`); it decays linearly to zero as the
/// car covers `race_distance`.
#[derive(Copy, Clone, Debug)]
pub struct FuelModel {
    max_fuel_effect: f64,
    race_distance:   f64,
}

impl FuelModel {
    pub fn new(lap_fuel_effect: f64, lap_length: f64, lap_count: u32) -> Self {
        Self {
            max_fuel_effect: lap_fuel_effect * lap_count as f64,
            race_distance:   lap_length * lap_count as f64,
        }
    }

    /// Fraction of the race distance still ahead of a car at `distance`.
    ///
    /// Slightly above 1 for cars starting behind the line, and below 0 once
    /// a car is past the flag; both extremes are harmless in the scaling
    /// formulas below.
    #[inline]
    fn remaining_fraction(&self, distance: f64) -> f64 {
        (self.race_distance - distance) / self.race_distance
    }

    /// Wear multiplier at `distance`: 1 + max_fuel_effect × remaining.
    #[inline]
    pub fn fuel_effect(&self, distance: f64) -> f64 {
        1.0 + self.max_fuel_effect * self.remaining_fraction(distance)
    }

    /// Apply one sub-increment's wear and refresh the car's effective
    /// acceleration and braking.
    ///
    /// Call once per car per sub-increment, after the previous step's
    /// displacement has been committed.  The pending corner penalty is
    /// folded into wear here and then consumed.
    pub fn apply(&self, car: &mut Car) {
        let remaining = self.remaining_fraction(car.state.distance);
        let fuel_effect = 1.0 + self.max_fuel_effect * remaining;

        let state = &mut car.state;
        state.tyre_wear += (state.distance_step + state.corner_penalty) * fuel_effect;
        state.corner_penalty = 0.0;
        state.tyre_degradation = state.tyre_wear / car.spec.max_tyre_life;
        state.tyre_performance = (1.0 - state.tyre_degradation * state.tyre_degradation).max(0.25);

        let fuel_load = 1.0 - self.max_fuel_effect * remaining;
        state.accel = car.spec.max_accel * state.tyre_performance * fuel_load;
        state.brake = car.spec.max_brake * state.tyre_performance * fuel_load;
    }
}
