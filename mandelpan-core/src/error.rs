use thiserror::Error;

/// Errors originating from the viewport transform and evaluator.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid resolution: {width}×{height} (both axes must be >= 2)")]
    InvalidResolution { width: u32, height: u32 },

    #[error("invalid iteration cap: {0} (must be >= 1)")]
    InvalidIterationCap(u32),

    #[error("invalid scale: {0} (must be positive and finite)")]
    InvalidScale(f64),

    #[error("invalid plane bounds: {reason}")]
    InvalidPlaneBounds { reason: String },
}
