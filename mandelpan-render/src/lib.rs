pub mod band;
pub mod buffer;
pub mod config;
pub mod error;
pub mod explorer;
pub mod palette;
pub mod renderer;

pub use band::{partition, Band, DEFAULT_WORKERS};
pub use buffer::{BandSlice, PixelBuffer};
pub use config::EngineConfig;
pub use error::RenderError;
pub use explorer::Explorer;
pub use palette::{BandedColoring, ColorTable, Coloring, CLASSIC, MEMBER_BLACK};
pub use renderer::{check_resolution, BandRenderer, RenderStats};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
