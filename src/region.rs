use crate::{
    error::RouteError,
    location::{LocationSample, Point},
};

pub const DEFAULT_PADDING_FACTOR: f64 = 1.1;

/// The viewport that frames a whole route. Spans are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub center_lat: f64,
    pub center_lng: f64,
    pub lat_span: f64,
    pub lng_span: f64,
}

impl Region {
    pub fn contains(&self, point: &Point) -> bool {
        (point.latitude - self.center_lat).abs() <= self.lat_span / 2.
            && (point.longitude - self.center_lng).abs() <= self.lng_span / 2.
    }

    // Map views usually refuse a zero sized region (e.g. a run with a single
    // location), so renderers can widen it before use.
    pub fn with_min_span(self, min_span: f64) -> Self {
        Region {
            lat_span: self.lat_span.max(min_span),
            lng_span: self.lng_span.max(min_span),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Bounds {
    fn new(point: &Point) -> Self {
        Bounds {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lng: point.longitude,
            max_lng: point.longitude,
        }
    }

    fn extend(self, point: &Point) -> Self {
        Bounds {
            min_lat: self.min_lat.min(point.latitude),
            max_lat: self.max_lat.max(point.latitude),
            min_lng: self.min_lng.min(point.longitude),
            max_lng: self.max_lng.max(point.longitude),
        }
    }
}

pub fn compute_region(samples: &[LocationSample]) -> Result<Region, RouteError> {
    compute_region_with_padding(samples, DEFAULT_PADDING_FACTOR)
}

pub fn compute_region_with_padding(
    samples: &[LocationSample],
    padding_factor: f64,
) -> Result<Region, RouteError> {
    if !(padding_factor.is_finite() && padding_factor >= 0.) {
        return Err(RouteError::InvalidInput);
    }
    let (first, rest) = samples.split_first().ok_or(RouteError::InvalidInput)?;
    let bounds = rest
        .iter()
        .fold(Bounds::new(&first.point), |bounds, sample| {
            bounds.extend(&sample.point)
        });

    Ok(Region {
        center_lat: (bounds.min_lat + bounds.max_lat) / 2.,
        center_lng: (bounds.min_lng + bounds.max_lng) / 2.,
        lat_span: (bounds.max_lat - bounds.min_lat) * padding_factor,
        lng_span: (bounds.max_lng - bounds.min_lng) * padding_factor,
    })
}
