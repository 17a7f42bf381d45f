#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use run_route_core::{import_data, LocationSample};

pub const START_TIMESTAMP: i64 = 1711926000;

pub fn time_at(secs: f64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(START_TIMESTAMP * 1000 + (secs * 1000.) as i64)
        .unwrap()
}

pub fn sample(lat: f64, lng: f64, secs: f64) -> LocationSample {
    LocationSample::new(lat, lng, time_at(secs))
}

// Three samples along the equator, the second leg being much slower.
pub fn slowing_down_run() -> Vec<LocationSample> {
    vec![
        sample(0., 0., 0.),
        sample(0., 0.001, 10.),
        sample(0., 0.002, 100.),
    ]
}

pub fn load_run_gpx_for_test() -> Vec<LocationSample> {
    import_data::load_gpx("./tests/data/run.gpx").unwrap()
}
