//! The track: lap geometry, pit-lane parameters, and the cyclic corner list.

use race_core::CornerId;

use crate::{Corner, CornerKind, ModelError, ModelResult};

/// A closed circuit.
///
/// `pit_lane_secs` is the full pit-lane transit time at `pit_speed_limit`
/// (entry to exit, excluding the box dwell).  `lap_fuel_effect` is the
/// fractional performance swing attributable to one lap's worth of fuel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub name:            String,
    pub lap_length:      f64,
    pub pit_lane_secs:   f64,
    pub pit_speed_limit: f64,
    pub lap_fuel_effect: f64,
    corners:             Vec<Corner>,
}

impl Track {
    /// Validate geometry and build the track.
    ///
    /// Rejects: non-positive lap length / pit parameters, an empty or
    /// unordered corner list, corners outside the lap or with non-monotonic
    /// markers, and more than one pit-entry corner.
    pub fn new(
        name:            impl Into<String>,
        lap_length:      f64,
        pit_lane_secs:   f64,
        pit_speed_limit: f64,
        corners:         Vec<Corner>,
        lap_fuel_effect: f64,
    ) -> ModelResult<Self> {
        let name = name.into();

        let positive = [
            ("lap_length", lap_length),
            ("pit_lane_secs", pit_lane_secs),
            ("pit_speed_limit", pit_speed_limit),
        ];
        for (what, got) in positive {
            if !(got > 0.0) {
                return Err(ModelError::TrackNonPositive {
                    track: name.clone(),
                    what,
                    got,
                });
            }
        }

        if corners.is_empty() {
            return Err(ModelError::NoCorners { track: name });
        }
        for corner in &corners {
            corner.validate(&name, lap_length)?;
        }
        if corners.windows(2).any(|w| w[0].start > w[1].start) {
            return Err(ModelError::UnorderedCorners { track: name });
        }
        let pit_entries = corners
            .iter()
            .filter(|c| c.kind == CornerKind::PitEntry)
            .count();
        if pit_entries > 1 {
            return Err(ModelError::MultiplePitEntries { track: name });
        }

        Ok(Self {
            name,
            lap_length,
            pit_lane_secs,
            pit_speed_limit,
            lap_fuel_effect,
            corners,
        })
    }

    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Read-only slice of all corners in lap order.
    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    #[inline]
    pub fn corner(&self, id: CornerId) -> &Corner {
        &self.corners[id.index()]
    }

    /// The corner after `id`, wrapping across the start/finish line.
    #[inline]
    pub fn next_corner_id(&self, id: CornerId) -> CornerId {
        CornerId(((id.index() + 1) % self.corners.len()) as u16)
    }

    /// The corner a car heading for `id` most recently negotiated.
    ///
    /// Skips over the pit-entry marker: it is not a contest zone, so the
    /// corner before it supplies the trailing overtake threshold.
    pub fn prev_corner(&self, id: CornerId) -> &Corner {
        let n = self.corners.len();
        let mut idx = (id.index() + n - 1) % n;
        if self.corners[idx].kind == CornerKind::PitEntry {
            idx = (idx + n - 1) % n;
        }
        &self.corners[idx]
    }
}
