use crate::{
    error::RouteError,
    location::{elapsed_secs, LocationSample},
    route_overlay::ColoredSegment,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const RED: Rgb = Rgb {
        r: 1.0,
        g: 20.0 / 255.0,
        b: 44.0 / 255.0,
    };
    pub const YELLOW: Rgb = Rgb {
        r: 1.0,
        g: 215.0 / 255.0,
        b: 0.0,
    };
    pub const GREEN: Rgb = Rgb {
        r: 0.0,
        g: 146.0 / 255.0,
        b: 78.0 / 255.0,
    };

    // Written as `a * (1 - t) + b * t` so both ends are hit exactly.
    pub fn lerp(from: Rgb, to: Rgb, ratio: f64) -> Rgb {
        let channel = |a: f64, b: f64| a * (1.0 - ratio) + b * ratio;
        Rgb {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
        }
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }
}

/// What to do with two consecutive samples recorded at the same instant.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZeroElapsedPolicy {
    #[default]
    Reject,
    // The pair is kept with a speed of 0 so the segment is still drawn.
    Stationary,
}

/// What to do when every segment has the same speed, leaving no range to
/// interpolate over.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UniformSpeedPolicy {
    // Every segment is colored as the midpoint, i.e. yellow.
    #[default]
    Midpoint,
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorizeOptions {
    pub zero_elapsed: ZeroElapsedPolicy,
    pub uniform_speed: UniformSpeedPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub fn from_speeds(speeds: &[f64]) -> Option<SpeedRange> {
        let (first, rest) = speeds.split_first()?;
        Some(rest.iter().fold(
            SpeedRange {
                min: *first,
                max: *first,
            },
            |range, &speed| SpeedRange {
                min: range.min.min(speed),
                max: range.max.max(speed),
            },
        ))
    }

    // NOTE: this is the middle of the range, not the average of the speeds.
    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.
    }

    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}

/// Speed in m/s of every pair of consecutive samples.
pub fn segment_speeds(
    samples: &[LocationSample],
    policy: ZeroElapsedPolicy,
) -> Result<Vec<f64>, RouteError> {
    samples
        .iter()
        .tuple_windows()
        .enumerate()
        .map(|(i, (prev, next))| {
            let distance = prev.point.haversine_distance(&next.point);
            if next.timestamp < prev.timestamp {
                Err(RouteError::DegenerateInput {
                    index: i + 1,
                    reason: "timestamp goes backwards",
                })
            } else if next.timestamp == prev.timestamp {
                match policy {
                    ZeroElapsedPolicy::Reject => Err(RouteError::DegenerateInput {
                        index: i + 1,
                        reason: "zero elapsed time",
                    }),
                    ZeroElapsedPolicy::Stationary => {
                        debug!("zero elapsed time at sample {}, treated as stationary", i + 1);
                        Ok(0.)
                    }
                }
            } else {
                Ok(distance / elapsed_secs(prev, next))
            }
        })
        .collect()
}

pub fn speed_to_color(
    speed: f64,
    range: &SpeedRange,
    policy: UniformSpeedPolicy,
) -> Result<Rgb, RouteError> {
    let mean = range.mean();
    if range.is_uniform() {
        return match policy {
            UniformSpeedPolicy::Midpoint => Ok(Rgb::YELLOW),
            UniformSpeedPolicy::Reject => Err(RouteError::DegenerateRange { speed: range.min }),
        };
    }

    // Rounding can push the ratio slightly outside of [0, 1].
    let color = if speed < mean {
        let ratio = (speed - range.min) / (mean - range.min);
        Rgb::lerp(Rgb::RED, Rgb::YELLOW, ratio.clamp(0., 1.))
    } else {
        let ratio = (speed - mean) / (range.max - mean);
        Rgb::lerp(Rgb::YELLOW, Rgb::GREEN, ratio.clamp(0., 1.))
    };
    Ok(color)
}

/// One colored segment per pair of consecutive samples, in input order.
pub fn colorize(
    samples: &[LocationSample],
    options: &ColorizeOptions,
) -> Result<Vec<ColoredSegment>, RouteError> {
    let speeds = segment_speeds(samples, options.zero_elapsed)?;
    let range = match SpeedRange::from_speeds(&speeds) {
        Some(range) => range,
        None => return Ok(Vec::new()),
    };
    if range.is_uniform() {
        info!("uniform speed route: {} m/s", range.min);
    }

    samples
        .iter()
        .tuple_windows()
        .zip(speeds)
        .map(|((start, end), speed)| {
            Ok(ColoredSegment {
                start: *start,
                end: *end,
                color: speed_to_color(speed, &range, options.uniform_speed)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(Rgb::lerp(Rgb::RED, Rgb::YELLOW, 0.), Rgb::RED);
        assert_eq!(Rgb::lerp(Rgb::RED, Rgb::YELLOW, 1.), Rgb::YELLOW);
        assert_eq!(Rgb::lerp(Rgb::YELLOW, Rgb::GREEN, 1.), Rgb::GREEN);
    }

    #[test]
    fn rgb8() {
        assert_eq!(Rgb::RED.to_rgb8(), [255, 20, 44]);
        assert_eq!(Rgb::YELLOW.to_rgb8(), [255, 215, 0]);
        assert_eq!(Rgb::GREEN.to_rgb8(), [0, 146, 78]);
    }

    #[test]
    fn range_uses_midpoint() {
        let range = SpeedRange::from_speeds(&[1., 2., 9.]).unwrap();
        assert_eq!(range.min, 1.);
        assert_eq!(range.max, 9.);
        // the average of the speeds would be 4
        assert_eq!(range.mean(), 5.);
        assert!(SpeedRange::from_speeds(&[]).is_none());
    }

    #[test]
    fn color_branches() {
        let range = SpeedRange { min: 2., max: 6. };
        let policy = UniformSpeedPolicy::Midpoint;
        assert_eq!(speed_to_color(2., &range, policy).unwrap(), Rgb::RED);
        assert_eq!(speed_to_color(4., &range, policy).unwrap(), Rgb::YELLOW);
        assert_eq!(speed_to_color(6., &range, policy).unwrap(), Rgb::GREEN);
        assert_eq!(
            speed_to_color(3., &range, policy).unwrap(),
            Rgb::lerp(Rgb::RED, Rgb::YELLOW, 0.5)
        );
    }

    #[test]
    fn uniform_range() {
        let range = SpeedRange { min: 3., max: 3. };
        assert_eq!(
            speed_to_color(3., &range, UniformSpeedPolicy::Midpoint).unwrap(),
            Rgb::YELLOW
        );
        assert_eq!(
            speed_to_color(3., &range, UniformSpeedPolicy::Reject),
            Err(RouteError::DegenerateRange { speed: 3. })
        );
    }

    #[test]
    fn policy_names() {
        assert_eq!(ZeroElapsedPolicy::Stationary.to_string(), "stationary");
        assert_eq!(
            UniformSpeedPolicy::from_str("reject").unwrap(),
            UniformSpeedPolicy::Reject
        );
    }
}
