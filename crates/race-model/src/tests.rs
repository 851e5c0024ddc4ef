//! Unit tests for the entity model.

use race_core::CornerId;

use crate::{Car, CarSpec, Corner, CornerKind, ModelError, Track};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn spec(name: &str) -> CarSpec {
    CarSpec {
        name:          name.to_owned(),
        max_accel:     14.0,
        max_brake:     28.0,
        max_speed:     90.0,
        max_tyre_life: 150_000.0,
        cornering:     1.0,
        drive_style:   1.0,
        pit_lap:       0,
        box_time:      4.0,
        box_location:  1.0,
    }
}

fn corner(name: &str, start: f64, apex: f64, end: f64) -> Corner {
    Corner {
        name: name.to_owned(),
        kind: CornerKind::Ordinary,
        start,
        apex,
        end,
        max_speed: 40.0,
        overtake:  5.0,
    }
}

// ── Car ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car {
    use super::*;

    #[test]
    fn valid_spec_builds() {
        let car = Car::new(spec("A")).unwrap();
        assert_eq!(car.state.speed, 0.0);
        assert_eq!(car.state.tyre_performance, 1.0);
        assert_eq!(car.state.next_corner, CornerId(0));
        assert_eq!(car.to_string(), "A");
    }

    #[test]
    fn zero_accel_rejected() {
        let mut s = spec("A");
        s.max_accel = 0.0;
        assert!(matches!(
            Car::new(s),
            Err(ModelError::NonPositive { what: "max_accel", .. })
        ));
    }

    #[test]
    fn negative_brake_rejected() {
        let mut s = spec("A");
        s.max_brake = -30.0;
        assert!(matches!(
            Car::new(s),
            Err(ModelError::NonPositive { what: "max_brake", .. })
        ));
    }

    #[test]
    fn zero_tyre_life_rejected() {
        let mut s = spec("A");
        s.max_tyre_life = 0.0;
        assert!(Car::new(s).is_err());
    }

    #[test]
    fn nan_speed_rejected() {
        let mut s = spec("A");
        s.max_speed = f64::NAN;
        assert!(Car::new(s).is_err());
    }

    #[test]
    fn negative_box_location_rejected() {
        let mut s = spec("A");
        s.box_location = -1.0;
        assert!(matches!(
            Car::new(s),
            Err(ModelError::Negative { what: "box_location", .. })
        ));
    }

    #[test]
    fn lap_location_subtracts_completed_laps() {
        let mut car = Car::new(spec("A")).unwrap();
        car.state.distance = 5_300.0;
        car.state.lap_count = 1;
        assert!((car.lap_location(5_000.0) - 300.0).abs() < 1e-12);
    }

    #[test]
    fn due_to_pit_on_configured_lap_only() {
        let mut s = spec("A");
        s.pit_lap = 2;
        let mut car = Car::new(s).unwrap();
        assert!(!car.due_to_pit()); // lap_count 0 → completing lap 1
        car.state.lap_count = 1;
        assert!(car.due_to_pit()); // completing lap 2
        car.state.lap_count = 2;
        assert!(!car.due_to_pit());
    }

    #[test]
    fn pit_lap_zero_never_due() {
        let car = Car::new(spec("A")).unwrap();
        assert!(!car.due_to_pit());
    }

    #[test]
    fn fit_new_tyres_resets_wear() {
        let mut car = Car::new(spec("A")).unwrap();
        car.state.tyre_wear = 9_000.0;
        car.state.tyre_degradation = 0.6;
        car.state.tyre_performance = 0.64;
        car.state.fit_new_tyres();
        assert_eq!(car.state.tyre_wear, 0.0);
        assert_eq!(car.state.tyre_degradation, 0.0);
        assert_eq!(car.state.tyre_performance, 1.0);
    }
}

// ── Corner ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod corner_tests {
    use super::*;

    #[test]
    fn apex_speed_scales_with_perf_and_cornering() {
        let c = corner("T1", 100.0, 150.0, 200.0);
        assert!((c.apex_speed_for(1.0, 1.0) - 40.0).abs() < 1e-12);
        assert!((c.apex_speed_for(0.5, 1.0) - 20.0).abs() < 1e-12);
        assert!((c.apex_speed_for(1.0, 0.9) - 36.0).abs() < 1e-12);
    }

    #[test]
    fn contains_is_exclusive_at_markers() {
        let c = corner("T1", 100.0, 150.0, 200.0);
        assert!(c.contains(150.0));
        assert!(!c.contains(100.0));
        assert!(!c.contains(200.0));
        assert!(!c.contains(99.0));
    }
}

// ── Track ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod track_tests {
    use super::*;

    fn pit_entry(start: f64) -> Corner {
        Corner {
            name:      "Pit Entry".to_owned(),
            kind:      CornerKind::PitEntry,
            start,
            apex:      start,
            end:       start,
            max_speed: 30.0,
            overtake:  0.0,
        }
    }

    #[test]
    fn valid_track_builds() {
        let track = Track::new(
            "Ring",
            5_000.0,
            22.0,
            20.0,
            vec![corner("T1", 1_000.0, 1_100.0, 1_200.0), pit_entry(4_800.0)],
            0.002,
        )
        .unwrap();
        assert_eq!(track.corner_count(), 2);
    }

    #[test]
    fn empty_corner_list_rejected() {
        let err = Track::new("Ring", 5_000.0, 22.0, 20.0, vec![], 0.002).unwrap_err();
        assert!(matches!(err, ModelError::NoCorners { .. }));
    }

    #[test]
    fn inverted_markers_rejected() {
        let bad = corner("T1", 1_200.0, 1_100.0, 1_300.0); // apex before start
        let err = Track::new("Ring", 5_000.0, 22.0, 20.0, vec![bad], 0.002).unwrap_err();
        assert!(matches!(err, ModelError::CornerMarkerOrder { .. }));
    }

    #[test]
    fn corner_past_lap_end_rejected() {
        let bad = corner("T1", 4_900.0, 5_000.0, 5_100.0);
        let err = Track::new("Ring", 5_000.0, 22.0, 20.0, vec![bad], 0.002).unwrap_err();
        assert!(matches!(err, ModelError::CornerOutsideLap { .. }));
    }

    #[test]
    fn unordered_corners_rejected() {
        let corners = vec![
            corner("T2", 2_000.0, 2_100.0, 2_200.0),
            corner("T1", 1_000.0, 1_100.0, 1_200.0),
        ];
        let err = Track::new("Ring", 5_000.0, 22.0, 20.0, corners, 0.002).unwrap_err();
        assert!(matches!(err, ModelError::UnorderedCorners { .. }));
    }

    #[test]
    fn two_pit_entries_rejected() {
        let corners = vec![pit_entry(1_000.0), pit_entry(4_000.0)];
        let err = Track::new("Ring", 5_000.0, 22.0, 20.0, corners, 0.002).unwrap_err();
        assert!(matches!(err, ModelError::MultiplePitEntries { .. }));
    }

    #[test]
    fn zero_lap_length_rejected() {
        let err = Track::new(
            "Ring",
            0.0,
            22.0,
            20.0,
            vec![corner("T1", 0.0, 0.0, 0.0)],
            0.002,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::TrackNonPositive { what: "lap_length", .. }
        ));
    }

    #[test]
    fn corner_ids_wrap() {
        let track = Track::new(
            "Ring",
            5_000.0,
            22.0,
            20.0,
            vec![
                corner("T1", 1_000.0, 1_100.0, 1_200.0),
                corner("T2", 3_000.0, 3_100.0, 3_200.0),
            ],
            0.002,
        )
        .unwrap();
        assert_eq!(track.next_corner_id(CornerId(0)), CornerId(1));
        assert_eq!(track.next_corner_id(CornerId(1)), CornerId(0));
    }

    #[test]
    fn prev_corner_skips_pit_entry() {
        let track = Track::new(
            "Ring",
            5_000.0,
            22.0,
            20.0,
            vec![
                corner("T1", 1_000.0, 1_100.0, 1_200.0),
                corner("T2", 3_000.0, 3_100.0, 3_200.0),
                pit_entry(4_800.0),
            ],
            0.002,
        )
        .unwrap();
        // Heading for T1 (index 0): the previous corner is the pit entry,
        // which is skipped in favour of T2.
        assert_eq!(track.prev_corner(CornerId(0)).name, "T2");
        // Heading for T2: previous is T1 as normal.
        assert_eq!(track.prev_corner(CornerId(1)).name, "T1");
    }
}
