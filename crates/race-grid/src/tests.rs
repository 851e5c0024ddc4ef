//! Tests for roster generation and qualifying.

use race_core::SimRng;
use race_model::{CarSpec, Corner, CornerKind, Track};

use crate::qualifying::{GridParams, build_grid, run_session};
use crate::roster::{RosterParams, generate_roster};
use crate::GridError;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn quali_track() -> Track {
    Track::new(
        "Quali",
        1_000.0,
        10.0,
        15.0,
        vec![Corner {
            name:      "T1".to_owned(),
            kind:      CornerKind::Ordinary,
            start:     400.0,
            apex:      500.0,
            end:       600.0,
            max_speed: 30.0,
            overtake:  4.0,
        }],
        0.002,
    )
    .unwrap()
}

fn entrant(name: &str, max_accel: f64, max_speed: f64) -> CarSpec {
    CarSpec {
        name:          name.to_owned(),
        max_accel,
        max_brake:     25.0,
        max_speed,
        max_tyre_life: 200_000.0,
        cornering:     1.0,
        drive_style:   1.0,
        pit_lap:       3,
        box_time:      4.0,
        box_location:  0.0,
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster_tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_field() {
        let params = RosterParams::default();
        let a = generate_roster(&params, &mut SimRng::new(7)).unwrap();
        let b = generate_roster(&params, &mut SimRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let params = RosterParams::default();
        let a = generate_roster(&params, &mut SimRng::new(7)).unwrap();
        let b = generate_roster(&params, &mut SimRng::new(8)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn count_names_and_unassigned_boxes() {
        let params = RosterParams {
            competitor_count: 5,
            ..RosterParams::default()
        };
        let roster = generate_roster(&params, &mut SimRng::new(1)).unwrap();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].name, "Car 1");
        assert_eq!(roster[4].name, "Car 5");
        assert!(roster.iter().all(|s| s.box_location == 0.0));
        assert!(roster.iter().all(|s| params.pit_laps.contains(&s.pit_lap)));
    }

    #[test]
    fn tyre_life_within_spread() {
        let params = RosterParams::default();
        let roster = generate_roster(&params, &mut SimRng::new(3)).unwrap();
        let lo = params.mean_tyre_life - params.tyre_life_spread;
        let hi = params.mean_tyre_life + params.tyre_life_spread;
        assert!(roster.iter().all(|s| (lo..=hi).contains(&s.max_tyre_life)));
    }

    #[test]
    fn empty_pit_lap_list_rejected() {
        let params = RosterParams {
            pit_laps: vec![],
            ..RosterParams::default()
        };
        let err = generate_roster(&params, &mut SimRng::new(1)).unwrap_err();
        assert!(matches!(err, GridError::NoPitLaps));
    }

    #[test]
    fn degenerate_distribution_rejected() {
        let params = RosterParams {
            std_max_accel: -1.0,
            ..RosterParams::default()
        };
        let err = generate_roster(&params, &mut SimRng::new(1)).unwrap_err();
        assert!(matches!(err, GridError::BadDistribution { what: "max_accel" }));
    }
}

// ── Qualifying ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod qualifying_tests {
    use super::*;

    #[test]
    fn flying_lap_measured() {
        let result = run_session(&quali_track(), &entrant("Q", 14.0, 90.0), 5.0).unwrap();
        assert!(result.lap_time > 0.0);
        assert!(result.lap_distance >= 1_000.0);
        // The overshoot correction can only shorten the raw time.
        assert!(result.adjusted_time <= result.lap_time);
    }

    #[test]
    fn scheduled_pit_stop_does_not_contaminate_session() {
        let mut early_stopper = entrant("Q", 14.0, 90.0);
        early_stopper.pit_lap = 1;
        let clean = run_session(&quali_track(), &entrant("Q", 14.0, 90.0), 5.0).unwrap();
        let stopper = run_session(&quali_track(), &early_stopper, 5.0).unwrap();
        assert_eq!(clean, stopper, "session must suppress the scheduled stop");
    }

    #[test]
    fn faster_car_takes_pole() {
        let grid = build_grid(
            &quali_track(),
            &[entrant("Slow", 10.0, 70.0), entrant("Fast", 14.0, 90.0)],
            &GridParams::default(),
        )
        .unwrap();

        assert_eq!(grid.entries.len(), 2);
        assert_eq!(grid.entries[0].spec.name, "Fast");
        assert_eq!(grid.entries[1].spec.name, "Slow");
        assert!(grid.results[0].adjusted_time < grid.results[1].adjusted_time);
    }

    #[test]
    fn grid_spacing_and_boxes_follow_rank() {
        let grid = build_grid(
            &quali_track(),
            &[entrant("Slow", 10.0, 70.0), entrant("Fast", 14.0, 90.0)],
            &GridParams {
                grid_spacing: 8.0,
                car_length:   5.0,
            },
        )
        .unwrap();

        assert_eq!(grid.entries[0].start_distance, 0.0);
        assert_eq!(grid.entries[1].start_distance, -8.0);
        // box_location = (rank + 2) / 2.
        assert_eq!(grid.entries[0].spec.box_location, 1.0);
        assert_eq!(grid.entries[1].spec.box_location, 1.5);
    }

    #[test]
    fn no_entrants_rejected() {
        let err = build_grid(&quali_track(), &[], &GridParams::default()).unwrap_err();
        assert!(matches!(err, GridError::NoEntrants));
    }

    #[test]
    fn assignment_is_deterministic() {
        let specs = [entrant("A", 12.0, 85.0), entrant("B", 12.5, 84.0)];
        let g1 = build_grid(&quali_track(), &specs, &GridParams::default()).unwrap();
        let g2 = build_grid(&quali_track(), &specs, &GridParams::default()).unwrap();
        assert_eq!(g1.results, g2.results);
        let names1: Vec<_> = g1.entries.iter().map(|e| &e.spec.name).collect();
        let names2: Vec<_> = g2.entries.iter().map(|e| &e.spec.name).collect();
        assert_eq!(names1, names2);
    }
}
