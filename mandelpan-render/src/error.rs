use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid resolution: {width}×{height} for {workers} workers (need both axes >= 2 and >= workers)")]
    InvalidResolution {
        width: u32,
        height: u32,
        workers: usize,
    },

    #[error("failed to start render workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Core(#[from] mandelpan_core::CoreError),
}
