use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("route has no location samples")]
    InvalidInput,
    // `index` is the position of the later sample of the offending pair.
    #[error("degenerate input at sample {index}: {reason}")]
    DegenerateInput { index: usize, reason: &'static str },
    #[error("every segment has the same speed ({speed} m/s)")]
    DegenerateRange { speed: f64 },
}
