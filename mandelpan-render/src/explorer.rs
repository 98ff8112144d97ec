use tracing::debug;

use mandelpan_core::ViewState;

use crate::buffer::PixelBuffer;
use crate::config::EngineConfig;
use crate::palette::BandedColoring;
use crate::renderer::{check_resolution, BandRenderer, RenderStats};

/// The render engine as seen by a window shell.
///
/// The shell forwards wheel, drag and resize events; each call updates the
/// view and returns a freshly rendered frame at the requested size. A call
/// whose size is rejected leaves the view untouched.
#[derive(Debug)]
pub struct Explorer {
    view: ViewState,
    renderer: BandRenderer,
    coloring: BandedColoring,
    last_stats: Option<RenderStats>,
}

impl Explorer {
    /// Validate `config` and start the worker threads.
    pub fn new(config: &EngineConfig) -> crate::Result<Self> {
        config.validate()?;
        let renderer = BandRenderer::new(config.worker_count, config.evaluator()?)?;
        Ok(Self {
            view: ViewState::new(config.plane),
            renderer,
            coloring: config.coloring(),
            last_stats: None,
        })
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn workers(&self) -> usize {
        self.renderer.workers()
    }

    /// Timing of the most recent frame.
    pub fn last_stats(&self) -> Option<RenderStats> {
        self.last_stats
    }

    /// Zoom by a signed wheel delta (120 units per notch) and render at `size`.
    pub fn on_zoom(&mut self, wheel_delta: i32, size: (u32, u32)) -> crate::Result<PixelBuffer> {
        self.check(size)?;
        self.view = self.view.zoomed(wheel_delta);
        self.render(size)
    }

    /// Pan by a pointer drag in pixels and render at `size`.
    pub fn on_pan(&mut self, delta: (i32, i32), size: (u32, u32)) -> crate::Result<PixelBuffer> {
        self.check(size)?;
        self.view = self.view.panned(delta);
        self.render(size)
    }

    /// Render the current view at a new size.
    pub fn on_resize(&mut self, size: (u32, u32)) -> crate::Result<PixelBuffer> {
        debug!(width = size.0, height = size.1, "Resize");
        self.render(size)
    }

    fn check(&self, (width, height): (u32, u32)) -> crate::Result<()> {
        check_resolution(width, height, self.renderer.workers())
    }

    fn render(&mut self, (width, height): (u32, u32)) -> crate::Result<PixelBuffer> {
        let (buffer, stats) = self
            .renderer
            .render(&self.view, &self.coloring, width, height)?;
        self.last_stats = Some(stats);
        Ok(buffer)
    }
}
