use crate::location::LocationSample;
use anyhow::Result;
use chrono::{DateTime, Utc};
use gpx::read;
use std::{
    fs::File,
    io::{BufReader, Read},
};

pub fn load_gpx(file_path: &str) -> Result<Vec<LocationSample>> {
    let samples = load_gpx_from_reader(BufReader::new(File::open(file_path)?))?;
    info!("loaded {} samples from {}", samples.len(), file_path);
    Ok(samples)
}

// All tracks and segments are flattened into one run, in file order.
pub fn load_gpx_from_reader<R: Read>(reader: R) -> Result<Vec<LocationSample>> {
    let gpx_data = read(reader)?;
    gpx_data
        .tracks
        .iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter())
        .enumerate()
        .map(|(i, point)| -> Result<LocationSample> {
            let time = match &point.time {
                Some(time) => time.format()?,
                None => bail!("track point {} has no time", i),
            };
            let timestamp = DateTime::<Utc>::from(DateTime::parse_from_rfc3339(&time)?);
            Ok(LocationSample {
                point: point.point().into(),
                timestamp,
            })
        })
        .collect()
}
