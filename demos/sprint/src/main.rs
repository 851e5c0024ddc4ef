//! sprint — smallest end-to-end demo for the rust_race workspace.
//!
//! Generates a randomized field around one configured team car, qualifies
//! everyone on solo flying laps, runs a short race, and writes the
//! telemetry and classification to CSV.

use std::path::Path;

use anyhow::Result;

use race_core::{SimRng, Stopwatch};
use race_grid::{GridParams, RosterParams, build_grid, generate_roster};
use race_model::{CarSpec, Corner, CornerKind, Track};
use race_output::{CsvWriter, RaceOutputObserver};
use race_sim::{RaceBuilder, RaceParams};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const COMPETITORS: usize = 9;
const RACE_LAPS:   u32 = 8;
const CAR_LENGTH:  f64 = 5.0;

// ── Track ─────────────────────────────────────────────────────────────────────

/// A 4.2 km lap: three ordinary corners plus the pit-entry marker.
fn build_track() -> Result<Track> {
    fn turn(name: &str, start: f64, apex: f64, end: f64, max_speed: f64, overtake: f64) -> Corner {
        Corner {
            name: name.to_owned(),
            kind: CornerKind::Ordinary,
            start,
            apex,
            end,
            max_speed,
            overtake,
        }
    }

    let corners = vec![
        turn("Village", 700.0, 850.0, 1_000.0, 32.0, 5.0),
        turn("Loop", 1_900.0, 2_050.0, 2_200.0, 24.0, 4.0),
        turn("Chapel", 3_100.0, 3_250.0, 3_400.0, 38.0, 6.0),
        Corner {
            name:      "Pit Entry".to_owned(),
            kind:      CornerKind::PitEntry,
            start:     4_050.0,
            apex:      4_050.0,
            end:       4_050.0,
            max_speed: 30.0,
            overtake:  0.0,
        },
    ];

    Ok(Track::new("Riverside", 4_200.0, 24.0, 20.0, corners, 0.003)?)
}

fn team_car() -> CarSpec {
    CarSpec {
        name:          "Team Orange".to_owned(),
        max_accel:     14.5,
        max_brake:     28.5,
        max_speed:     89.0,
        max_tyre_life: 160_000.0,
        cornering:     0.98,
        drive_style:   1.02,
        pit_lap:       5,
        box_time:      4.0,
        box_location:  0.0, // assigned from qualifying rank
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== sprint — rust_race demo ===");
    println!("Competitors: {COMPETITORS}  |  Laps: {RACE_LAPS}  |  Seed: {SEED}");
    println!();

    let track = build_track()?;
    println!(
        "Track: {} ({} m/lap, {} corners)",
        track.name,
        track.lap_length,
        track.corner_count()
    );

    // 1. Field: one team car plus a randomized roster.
    let roster_params = RosterParams {
        competitor_count: COMPETITORS,
        pit_laps: vec![4, 5, 6],
        ..RosterParams::default()
    };
    let mut rng = SimRng::new(SEED);
    let mut field = vec![team_car()];
    field.extend(generate_roster(&roster_params, &mut rng)?);

    // 2. Qualifying: solo flying laps decide the grid and the pit boxes.
    let grid = build_grid(&track, &field, &GridParams::default())?;
    println!();
    println!("Qualifying:");
    for (rank, result) in grid.results.iter().enumerate() {
        println!(
            "  P{:<3} {:<12} {:>8.3} s (raw {:.3} s)",
            rank + 1,
            result.name,
            result.adjusted_time,
            result.lap_time,
        );
    }

    // 3. Race.
    let mut sim = RaceBuilder::new(track, RaceParams::new(RACE_LAPS, CAR_LENGTH))
        .grid(grid.entries)
        .build()?;

    std::fs::create_dir_all("output/sprint")?;
    let writer = CsvWriter::new(Path::new("output/sprint"))?;
    let mut observer = RaceOutputObserver::new(writer);

    let mut stopwatch = Stopwatch::new();
    stopwatch.start()?;
    let classification = sim.run(&mut observer);
    let elapsed = stopwatch.stop()?;

    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!();
    println!("Race complete in {:.3} s wall clock", elapsed.as_secs_f64());
    println!();
    println!("{:<5} {:<12} {:>10}", "Pos", "Car", "Time");
    println!("{}", "-".repeat(30));
    for entry in &classification.entries {
        match entry.finish {
            Some(finish) => println!(
                "{:<5} {:<12} {:>9.1}s",
                finish.position + 1,
                entry.name,
                finish.time
            ),
            None => println!("{:<5} {:<12} {:>10}", "-", entry.name, "DNF"),
        }
    }
    println!();
    println!("Telemetry written to output/sprint/");

    Ok(())
}
