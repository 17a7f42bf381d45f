use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;

use crate::location::LocationSample;

// Totals shown next to the map: distance, time and pace of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub start_time: DateTime<Utc>,
    pub distance_m: f64,
    pub duration: Duration,
}

impl RunSummary {
    pub fn from_samples(samples: &[LocationSample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        let distance_m: f64 = samples
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.point.haversine_distance(&b.point))
            .sum();
        Some(RunSummary {
            start_time: first.timestamp,
            distance_m,
            duration: last.timestamp - first.timestamp,
        })
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / 1000.
    }

    /// Seconds per meter. `None` for a run that never moved.
    pub fn pace_secs_per_meter(&self) -> Option<f64> {
        if self.distance_m > 0. {
            Some(self.duration_secs() / self.distance_m)
        } else {
            None
        }
    }

    pub fn average_speed_mps(&self) -> Option<f64> {
        let secs = self.duration_secs();
        if secs > 0. {
            Some(self.distance_m / secs)
        } else {
            None
        }
    }
}
