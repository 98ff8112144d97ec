use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use mandelpan_core::{Complex, EscapeTime, PlaneMapping, ViewState};

use crate::buffer::{BandSlice, PixelBuffer};
use crate::error::RenderError;
use crate::palette::Coloring;

/// Timing and layout of one finished frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub elapsed: Duration,
    /// Worker bands plus the coordinator's band.
    pub bands: usize,
    /// Rows in each worker band; the coordinator's band may hold more.
    pub rows_per_band: u32,
}

/// Reject resolutions the band layout cannot serve.
///
/// Both axes need at least 2 pixels for the plane mapping, and neither may
/// be smaller than the worker count.
pub fn check_resolution(width: u32, height: u32, workers: usize) -> crate::Result<()> {
    if width < 2 || height < 2 || (width as usize) < workers || (height as usize) < workers {
        return Err(RenderError::InvalidResolution {
            width,
            height,
            workers,
        });
    }
    Ok(())
}

/// Renders full frames by splitting rows into bands.
///
/// Owns a pool of exactly `workers` threads. Each frame fans out one band per
/// worker while the calling thread renders the last band, then waits for
/// every worker before returning. Workers write only their own rows, so the
/// join at the end of the scope is the only synchronisation.
#[derive(Debug)]
pub struct BandRenderer {
    pool: Option<ThreadPool>,
    workers: usize,
    evaluator: EscapeTime,
}

impl BandRenderer {
    /// Start the worker threads. With `workers == 0` every frame renders on
    /// the calling thread.
    pub fn new(workers: usize, evaluator: EscapeTime) -> crate::Result<Self> {
        let pool = if workers == 0 {
            None
        } else {
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("band-worker-{i}"))
                    .build()?,
            )
        };
        debug!(
            workers,
            iteration_cap = evaluator.iteration_cap(),
            "Band renderer ready"
        );
        Ok(Self {
            pool,
            workers,
            evaluator,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn evaluator(&self) -> &EscapeTime {
        &self.evaluator
    }

    /// Allocate a `width × height` buffer and render `view` into it.
    ///
    /// The resolution is checked before anything is allocated.
    pub fn render<C: Coloring + Sync>(
        &self,
        view: &ViewState,
        coloring: &C,
        width: u32,
        height: u32,
    ) -> crate::Result<(PixelBuffer, RenderStats)> {
        check_resolution(width, height, self.workers)?;
        let mut buffer = PixelBuffer::new(width, height);
        let stats = self.render_into(view, coloring, &mut buffer)?;
        Ok((buffer, stats))
    }

    /// Render `view` into a caller-owned buffer at the buffer's resolution.
    ///
    /// Every pixel is overwritten. Identical inputs and worker count give
    /// byte-identical output.
    pub fn render_into<C: Coloring + Sync>(
        &self,
        view: &ViewState,
        coloring: &C,
        buffer: &mut PixelBuffer,
    ) -> crate::Result<RenderStats> {
        let start = Instant::now();
        let (width, height) = buffer.size();
        check_resolution(width, height, self.workers)?;
        let mapping = view.mapping(width, height)?;

        let (slices, own) = buffer.split_bands(self.workers);
        let band_count = slices.len() + 1;
        let rows_per_band = slices.first().unwrap_or(&own).band().rows();
        debug!(
            width,
            height,
            bands = band_count,
            rows_per_band,
            "Starting banded render"
        );

        let evaluator = self.evaluator;

        match &self.pool {
            Some(pool) => pool.in_place_scope(|scope| {
                for slice in slices {
                    scope.spawn(move |_| fill_band(&mapping, &evaluator, coloring, slice));
                }
                fill_band(&mapping, &evaluator, coloring, own);
            }),
            None => fill_band(&mapping, &evaluator, coloring, own),
        }

        let elapsed = start.elapsed();
        info!(
            elapsed_ms = elapsed.as_millis(),
            width,
            height,
            bands = band_count,
            "Frame rendered"
        );

        Ok(RenderStats {
            elapsed,
            bands: band_count,
            rows_per_band,
        })
    }
}

/// Evaluate and color every pixel of one band.
fn fill_band<C: Coloring>(
    mapping: &PlaneMapping,
    evaluator: &EscapeTime,
    coloring: &C,
    mut slice: BandSlice<'_>,
) {
    let band = slice.band();
    for y in band.start..band.end {
        let im = mapping.row_im(y);
        for x in 0..mapping.width() {
            let c = Complex::new(mapping.column_re(x), im);
            slice.set(x, y, coloring.color(evaluator.iterate(c)));
        }
    }
}
