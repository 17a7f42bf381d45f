#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod config;
pub mod error;
pub mod import_data;
pub mod location;
pub mod logs;
pub mod region;
pub mod route_overlay;
pub mod run_summary;
pub mod speed_colorizer;

pub use config::RouteStyle;
pub use error::RouteError;
pub use location::{LocationSample, Point};
pub use region::{compute_region, Region};
pub use route_overlay::{ColoredSegment, RouteCanvas, RouteOverlay};
pub use speed_colorizer::{colorize, ColorizeOptions, Rgb};
