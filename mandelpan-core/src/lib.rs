pub mod complex;
pub mod error;
pub mod escape;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use escape::{EscapeTime, IterationResult, ESCAPE_RADIUS_SQ};
pub use viewport::{PlaneBounds, PlaneMapping, ViewState, WHEEL_NOTCH, ZOOM_PER_NOTCH};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
