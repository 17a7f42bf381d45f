pub mod test_utils;

use run_route_core::import_data;
use test_utils::time_at;

#[test]
fn load_gpx() {
    let samples = test_utils::load_run_gpx_for_test();
    // both track segments end up in one run
    assert_eq!(samples.len(), 6);
    assert_eq!(samples[0].latitude(), 31.230416);
    assert_eq!(samples[0].longitude(), 121.473701);
    assert_eq!(samples[0].timestamp, time_at(0.));
    assert_eq!(samples[5].timestamp, time_at(55.));
    assert!(samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[test]
fn point_without_time() {
    let gpx = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk><trkseg>
    <trkpt lat="1.0" lon="2.0"><time>2024-03-31T23:00:00Z</time></trkpt>
    <trkpt lat="1.1" lon="2.1"></trkpt>
  </trkseg></trk>
</gpx>"#;
    let result = import_data::load_gpx_from_reader(gpx.as_bytes());
    assert!(result.is_err());
}

#[test]
fn missing_file() {
    assert!(import_data::load_gpx("./tests/data/does_not_exist.gpx").is_err());
}
