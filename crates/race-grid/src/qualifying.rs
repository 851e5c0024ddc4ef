//! Qualifying sessions and starting-grid assembly.
//!
//! Each entrant gets a fresh one-car race context for a two-lap solo run:
//! an out-lap from a standing start, then the flying lap that counts.
//! Because the engine commits whole sub-increments, the measured "lap" can
//! overshoot the geometric lap length slightly; the ranking therefore uses
//! a distance-corrected time rather than the raw frame delta.

use race_model::{CarSpec, Track};
use race_sim::{GridEntry, RaceBuilder, RaceParams, TelemetryLog};

use crate::{GridError, GridResult};

/// Laps per qualifying session: an out-lap plus one flying lap.
const QUAL_LAPS: u32 = 2;

/// Scale of the lap-length overshoot correction applied to the raw flying
/// lap time.
const DIST_CORRECTION_FACTOR: f64 = 1.3;

/// Grid-assembly parameters.
#[derive(Clone, Debug)]
pub struct GridParams {
    /// Gap between adjacent grid slots, metres.
    pub grid_spacing: f64,
    /// Car length passed to the solo sessions (irrelevant to a lone car,
    /// but part of the engine's interface).
    pub car_length: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            grid_spacing: 8.0,
            car_length:   5.0,
        }
    }
}

/// One entrant's qualifying outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct QualifyingResult {
    pub name: String,
    /// Raw flying-lap time from telemetry, seconds.
    pub lap_time: f64,
    /// Distance actually covered over those frames, metres.
    pub lap_distance: f64,
    /// Overshoot-corrected time used for ranking.
    pub adjusted_time: f64,
}

/// The assembled grid: entries front-to-back with pit boxes assigned, and
/// the qualifying results in the same order.
#[derive(Clone, Debug)]
pub struct GridAssignment {
    pub entries: Vec<GridEntry>,
    pub results: Vec<QualifyingResult>,
}

/// Run one entrant's two-lap solo session and measure its flying lap.
///
/// The session copy of the spec has its pit stop disabled — a scheduled
/// stop must not contaminate the qualifying time.
pub fn run_session(
    track:      &Track,
    spec:       &CarSpec,
    car_length: f64,
) -> GridResult<QualifyingResult> {
    let mut session_spec = spec.clone();
    session_spec.pit_lap = 0;

    let mut sim = RaceBuilder::new(track.clone(), RaceParams::new(QUAL_LAPS, car_length))
        .entry(session_spec, 0.0)
        .build()?;
    let mut telemetry = TelemetryLog::new();
    sim.run(&mut telemetry);

    // Flying lap: everything past the out-lap.
    let mut flying = telemetry
        .frames()
        .iter()
        .filter(|f| f.distance >= track.lap_length);
    let first = *flying.next().ok_or_else(|| GridError::NoFlyingLap {
        car: spec.name.clone(),
    })?;
    let last = flying.last().copied().unwrap_or(first);

    let lap_time = last.sim_time - first.sim_time;
    let lap_distance = last.distance - first.distance;
    if lap_time <= 0.0 {
        return Err(GridError::NoFlyingLap {
            car: spec.name.clone(),
        });
    }

    // Correct for the overshoot past one geometric lap.
    let overshoot = (lap_distance - track.lap_length) / track.lap_length;
    let adjusted_time = lap_time - overshoot * (lap_time / DIST_CORRECTION_FACTOR);

    log::debug!(
        "qualifying: {} lap {lap_time:.3} s over {lap_distance:.1} m (adjusted {adjusted_time:.3} s)",
        spec.name,
    );

    Ok(QualifyingResult {
        name: spec.name.clone(),
        lap_time,
        lap_distance,
        adjusted_time,
    })
}

/// Qualify every entrant and assemble the starting grid.
///
/// Rank `i` (0 = pole) receives start offset `−i × grid_spacing` and pit
/// box location `(i + 2) / 2` seconds down the lane — the faster you
/// qualify, the closer your box sits to pit entry.
///
/// With the `parallel` feature the solo sessions fan out across Rayon;
/// each session owns its context and cars, so nothing is shared.
pub fn build_grid(
    track:  &Track,
    specs:  &[CarSpec],
    params: &GridParams,
) -> GridResult<GridAssignment> {
    if specs.is_empty() {
        return Err(GridError::NoEntrants);
    }

    #[cfg(feature = "parallel")]
    let sessions: Vec<GridResult<QualifyingResult>> = {
        use rayon::prelude::*;
        specs
            .par_iter()
            .map(|spec| run_session(track, spec, params.car_length))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let sessions: Vec<GridResult<QualifyingResult>> = specs
        .iter()
        .map(|spec| run_session(track, spec, params.car_length))
        .collect();

    let mut ranked: Vec<(QualifyingResult, &CarSpec)> = sessions
        .into_iter()
        .zip(specs)
        .map(|(session, spec)| session.map(|result| (result, spec)))
        .collect::<GridResult<Vec<_>>>()?;

    // Fastest adjusted time first; name as a deterministic tie-break.
    ranked.sort_by(|a, b| {
        a.0.adjusted_time
            .total_cmp(&b.0.adjusted_time)
            .then_with(|| a.1.name.cmp(&b.1.name))
    });

    let mut entries = Vec::with_capacity(ranked.len());
    let mut results = Vec::with_capacity(ranked.len());
    for (rank, (result, spec)) in ranked.into_iter().enumerate() {
        let mut spec = spec.clone();
        spec.box_location = (rank as f64 + 2.0) / 2.0;
        log::info!(
            "grid {}: {} ({:.3} s adjusted)",
            rank + 1,
            spec.name,
            result.adjusted_time,
        );
        entries.push(GridEntry {
            spec,
            start_distance: -(rank as f64) * params.grid_spacing,
        });
        results.push(result);
    }

    Ok(GridAssignment { entries, results })
}
