//! Randomized competitor roster generation.
//!
//! Capability values are drawn from normal distributions (uniform for tyre
//! life, a discrete choice for the pit lap) and rounded to the precision a
//! team sheet would quote.  Every draw goes through the injected
//! [`SimRng`], so a fixed seed reproduces the identical field.

use race_core::SimRng;
use race_model::CarSpec;
use rand_distr::{Distribution, Normal};

use crate::{GridError, GridResult};

/// Distribution parameters for a generated field of competitors.
///
/// Means follow the `CarSpec` conventions; `tyre_life_spread` bounds a
/// uniform draw at `mean_tyre_life ± tyre_life_spread`.
#[derive(Clone, Debug)]
pub struct RosterParams {
    pub competitor_count: usize,

    pub mean_max_accel: f64,
    pub std_max_accel:  f64,
    pub mean_max_brake: f64,
    pub std_max_brake:  f64,
    pub mean_max_speed: f64,
    pub std_max_speed:  f64,

    pub mean_tyre_life:   f64,
    pub tyre_life_spread: f64,

    pub mean_cornering:   f64,
    pub std_cornering:    f64,
    pub mean_drive_style: f64,
    pub std_drive_style:  f64,

    /// Candidate laps for each competitor's pit stop (chosen uniformly).
    pub pit_laps: Vec<u32>,
    /// Stationary box time shared by the whole field, seconds.
    pub box_time: f64,
}

impl Default for RosterParams {
    fn default() -> Self {
        Self {
            competitor_count: 19,
            mean_max_accel:   14.0,
            std_max_accel:    0.8,
            mean_max_brake:   28.0,
            std_max_brake:    1.2,
            mean_max_speed:   88.0,
            std_max_speed:    2.5,
            mean_tyre_life:   150_000.0,
            tyre_life_spread: 20_000.0,
            mean_cornering:   1.0,
            std_cornering:    0.03,
            mean_drive_style: 1.0,
            std_drive_style:  0.05,
            pit_laps:         vec![4, 5, 6],
            box_time:         4.0,
        }
    }
}

/// Generate `competitor_count` car specs from the configured distributions.
///
/// Pit boxes are left at 0 — they are assigned from qualifying rank.
/// Each spec is validated before it is returned, so a pathological
/// parameter set fails here rather than mid-race.
pub fn generate_roster(params: &RosterParams, rng: &mut SimRng) -> GridResult<Vec<CarSpec>> {
    if params.pit_laps.is_empty() {
        return Err(GridError::NoPitLaps);
    }

    let accel = normal("max_accel", params.mean_max_accel, params.std_max_accel)?;
    let brake = normal("max_brake", params.mean_max_brake, params.std_max_brake)?;
    let speed = normal("max_speed", params.mean_max_speed, params.std_max_speed)?;
    let cornering = normal("cornering", params.mean_cornering, params.std_cornering)?;
    let drive_style = normal("drive_style", params.mean_drive_style, params.std_drive_style)?;

    let tyre_lo = params.mean_tyre_life - params.tyre_life_spread;
    let tyre_hi = params.mean_tyre_life + params.tyre_life_spread;

    let mut roster = Vec::with_capacity(params.competitor_count);
    for i in 0..params.competitor_count {
        let spec = CarSpec {
            name:          format!("Car {}", i + 1),
            max_accel:     round2(accel.sample(rng.inner())),
            max_brake:     round2(brake.sample(rng.inner())),
            max_speed:     round2(speed.sample(rng.inner())),
            max_tyre_life: rng.gen_range(tyre_lo..=tyre_hi).round(),
            cornering:     round3(cornering.sample(rng.inner())),
            drive_style:   round3(drive_style.sample(rng.inner())),
            pit_lap:       *rng.choose(&params.pit_laps).ok_or(GridError::NoPitLaps)?,
            box_time:      params.box_time,
            box_location:  0.0,
        };
        spec.validate()?;
        roster.push(spec);
    }

    log::info!("generated roster of {} competitors", roster.len());
    Ok(roster)
}

fn normal(what: &'static str, mean: f64, std: f64) -> GridResult<Normal<f64>> {
    Normal::new(mean, std).map_err(|_| GridError::BadDistribution { what })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round3(x: f64) -> f64 {
    (x * 1_000.0).round() / 1_000.0
}
