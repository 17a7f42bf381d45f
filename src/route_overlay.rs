use crate::{
    config::RouteStyle,
    error::RouteError,
    location::LocationSample,
    region::{compute_region_with_padding, Region},
    speed_colorizer::{colorize, Rgb},
};

/// The line between two consecutive samples and the color it is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColoredSegment {
    pub start: LocationSample,
    pub end: LocationSample,
    pub color: Rgb,
}

/// Anything that can show a route: a map view, an image, a test recorder.
pub trait RouteCanvas {
    fn set_region(&mut self, region: &Region);
    fn draw_segment(&mut self, segment: &ColoredSegment, stroke_width: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteOverlay {
    pub region: Region,
    pub segments: Vec<ColoredSegment>,
    pub stroke_width: f32,
}

impl RouteOverlay {
    pub fn build(samples: &[LocationSample], style: &RouteStyle) -> Result<Self, RouteError> {
        if samples.is_empty() {
            warn!("this run has no locations saved");
            return Err(RouteError::InvalidInput);
        }
        let region = compute_region_with_padding(samples, style.padding_factor)?;
        let segments = colorize(samples, &style.colorize_options())?;
        debug!(
            "built route overlay: samples={}, segments={}, region={:?}",
            samples.len(),
            segments.len(),
            region
        );
        Ok(RouteOverlay {
            region,
            segments,
            stroke_width: style.stroke_width,
        })
    }

    pub fn render_to<C: RouteCanvas>(&self, canvas: &mut C) {
        canvas.set_region(&self.region);
        for segment in &self.segments {
            canvas.draw_segment(segment, self.stroke_width);
        }
    }
}
