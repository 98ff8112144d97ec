use eframe::egui;
use tracing::error;

use mandelpan_core::WHEEL_NOTCH;
use mandelpan_render::{Explorer, PixelBuffer};

/// Scroll distance egui reports for one wheel notch, in points.
const POINTS_PER_NOTCH: f32 = 50.0;

const STATUS_MARGIN: f32 = 8.0;

/// Window shell: turns pointer and resize events into [`Explorer`] calls and
/// shows the returned frame.
pub(crate) struct MandelpanApp {
    explorer: Explorer,
    texture: Option<egui::TextureHandle>,
    /// Canvas size in physical pixels of the last rendered frame.
    frame_size: [u32; 2],
    /// Pointer position at the previous drag event, in physical pixels.
    last_pointer: Option<egui::Pos2>,
    /// Sub-notch scroll carried to the next frame.
    scroll_remainder: f32,
}

impl MandelpanApp {
    pub(crate) fn new(explorer: Explorer) -> Self {
        Self {
            explorer,
            texture: None,
            frame_size: [0, 0],
            last_pointer: None,
            scroll_remainder: 0.0,
        }
    }

    fn canvas_size(&self) -> (u32, u32) {
        (self.frame_size[0], self.frame_size[1])
    }

    fn present(&mut self, ctx: &egui::Context, frame: mandelpan_render::Result<PixelBuffer>) {
        match frame {
            Ok(buffer) => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [buffer.width() as usize, buffer.height() as usize],
                    buffer.as_bytes(),
                );
                self.texture =
                    Some(ctx.load_texture("fractal", image, egui::TextureOptions::NEAREST));
            }
            Err(e) => error!("Render failed: {e}"),
        }
    }

    fn handle_resize(&mut self, ctx: &egui::Context, size: [u32; 2]) {
        if size == self.frame_size {
            return;
        }
        self.frame_size = size;
        let frame = self.explorer.on_resize((size[0], size[1]));
        self.present(ctx, frame);
    }

    fn handle_zoom(&mut self, ctx: &egui::Context, response: &egui::Response) {
        if !response.hovered() {
            return;
        }
        let scroll_y = ctx.input(|i| i.raw_scroll_delta.y);
        if scroll_y == 0.0 {
            return;
        }
        let units = (scroll_y + self.scroll_remainder) / POINTS_PER_NOTCH * WHEEL_NOTCH as f32;
        let delta = units.trunc();
        self.scroll_remainder = (units - delta) * POINTS_PER_NOTCH / WHEEL_NOTCH as f32;
        if delta != 0.0 {
            let frame = self.explorer.on_zoom(delta as i32, self.canvas_size());
            self.present(ctx, frame);
        }
    }

    fn handle_pan(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let ppp = ctx.pixels_per_point();
        let pointer = response.interact_pointer_pos().map(|p| (p.to_vec2() * ppp).to_pos2());

        if response.drag_started_by(egui::PointerButton::Primary) {
            self.last_pointer = pointer;
        }
        if response.dragged_by(egui::PointerButton::Primary) {
            if let (Some(prev), Some(now)) = (self.last_pointer, pointer) {
                let dx = (now.x - prev.x).round();
                let dy = (now.y - prev.y).round();
                if dx != 0.0 || dy != 0.0 {
                    // Only consume whole pixels so slow drags still accumulate.
                    self.last_pointer = Some(egui::pos2(prev.x + dx, prev.y + dy));
                    let size = self.canvas_size();
                    let frame = self.explorer.on_pan((dx as i32, dy as i32), size);
                    self.present(ctx, frame);
                }
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.last_pointer = None;
        }
    }

    fn status_line(&self) -> String {
        let view = self.explorer.view();
        let [w, h] = self.frame_size;
        let centre = view
            .pixel_to_complex(w / 2, h / 2, w, h)
            .map(|c| c.to_string())
            .unwrap_or_else(|_| "-".to_string());
        let timing = self
            .explorer
            .last_stats()
            .map(|s| format!("{} ms, {} bands", s.elapsed.as_millis(), s.bands))
            .unwrap_or_default();
        format!(
            "centre {centre}   scale {:.3e}   {w}×{h}   {timing}",
            view.scale()
        )
    }
}

impl eframe::App for MandelpanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (rect, response) =
                    ui.allocate_exact_size(available, egui::Sense::click_and_drag());

                let ppp = ctx.pixels_per_point();
                let size = [
                    (available.x * ppp).round().max(0.0) as u32,
                    (available.y * ppp).round().max(0.0) as u32,
                ];
                self.handle_resize(ctx, size);
                self.handle_zoom(ctx, &response);
                self.handle_pan(ctx, &response);

                let painter = ui.painter_at(rect);
                if let Some(texture) = &self.texture {
                    painter.image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                } else {
                    painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
                }
                painter.text(
                    rect.left_top() + egui::vec2(STATUS_MARGIN, STATUS_MARGIN),
                    egui::Align2::LEFT_TOP,
                    self.status_line(),
                    egui::FontId::monospace(12.0),
                    egui::Color32::from_white_alpha(220),
                );
            });
    }
}
