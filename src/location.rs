use chrono::{DateTime, Utc};

const EARTH_RADIUS: f64 = 6371000.0; // unit: meter

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    // Result unit in meters.
    pub fn haversine_distance(&self, other: &Point) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        // rounding can push it over 1 for nearly antipodal points
        let a = a.min(1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS * c
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(point: geo_types::Point<f64>) -> Self {
        Point {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(point: Point) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}

/// One recorded location of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationSample {
    pub point: Point,
    pub timestamp: DateTime<Utc>,
}

impl LocationSample {
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        LocationSample {
            point: Point {
                latitude,
                longitude,
            },
            timestamp,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.point.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.point.longitude
    }
}

/// Seconds between two samples, negative if `next` was recorded before `prev`.
pub fn elapsed_secs(prev: &LocationSample, next: &LocationSample) -> f64 {
    let delta = next.timestamp - prev.timestamp;
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        // only overflows for gaps of a few hundred years
        None => delta.num_microseconds().unwrap_or(i64::MAX) as f64 / 1e6,
    }
}
