use crate::{
    region::DEFAULT_PADDING_FACTOR,
    speed_colorizer::{ColorizeOptions, UniformSpeedPolicy, ZeroElapsedPolicy},
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteStyle {
    /// Multiplier applied to the route's extent on each axis.
    pub padding_factor: f64,
    pub stroke_width: f32,
    pub zero_elapsed: ZeroElapsedPolicy,
    pub uniform_speed: UniformSpeedPolicy,
}

impl Default for RouteStyle {
    fn default() -> Self {
        RouteStyle {
            padding_factor: DEFAULT_PADDING_FACTOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            zero_elapsed: ZeroElapsedPolicy::default(),
            uniform_speed: UniformSpeedPolicy::default(),
        }
    }
}

impl RouteStyle {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let style: RouteStyle = serde_json::from_str(json)?;
        if !(style.padding_factor.is_finite() && style.padding_factor >= 0.) {
            bail!("invalid padding_factor: {}", style.padding_factor);
        }
        if !(style.stroke_width.is_finite() && style.stroke_width > 0.) {
            bail!("invalid stroke_width: {}", style.stroke_width);
        }
        Ok(style)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let style = Self::from_json_str(&content)?;
        info!("loaded route style from {:?}: {:?}", path.as_ref(), style);
        Ok(style)
    }

    pub fn colorize_options(&self) -> ColorizeOptions {
        ColorizeOptions {
            zero_elapsed: self.zero_elapsed,
            uniform_speed: self.uniform_speed,
        }
    }
}
