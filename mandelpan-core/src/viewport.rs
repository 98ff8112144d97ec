use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::complex::Complex;
use crate::error::CoreError;

/// Wheel units reported for one detent of a conventional mouse wheel.
pub const WHEEL_NOTCH: f64 = 120.0;

/// Scale multiplier applied per wheel notch. Positive deltas zoom in.
pub const ZOOM_PER_NOTCH: f64 = 0.9;

/// The rectangle of the complex plane shown at scale 1 with no pan.
///
/// Only the lower imaginary bound is fixed; the upper one follows the output
/// aspect ratio (see [`PlaneBounds::max_im`]) so non-square windows are not
/// stretched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneBounds {
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
}

impl PlaneBounds {
    pub const DEFAULT: Self = Self {
        min_re: -2.0,
        max_re: 1.0,
        min_im: -1.2,
    };

    pub fn new(min_re: f64, max_re: f64, min_im: f64) -> crate::Result<Self> {
        let bounds = Self {
            min_re,
            max_re,
            min_im,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !(self.min_re.is_finite() && self.max_re.is_finite() && self.min_im.is_finite()) {
            return Err(CoreError::InvalidPlaneBounds {
                reason: format!("bounds must be finite, got {self:?}"),
            });
        }
        if self.min_re >= self.max_re {
            return Err(CoreError::InvalidPlaneBounds {
                reason: format!(
                    "min_re ({}) must be below max_re ({})",
                    self.min_re, self.max_re
                ),
            });
        }
        Ok(())
    }

    /// Width of the real extent.
    #[inline]
    pub fn re_extent(&self) -> f64 {
        self.max_re - self.min_re
    }

    /// Upper imaginary bound that locks the imaginary extent to the real
    /// extent at the pixel aspect ratio `height / width`.
    #[inline]
    pub fn max_im(&self, width: u32, height: u32) -> f64 {
        self.min_im + self.re_extent() * height as f64 / width as f64
    }
}

impl Default for PlaneBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Snapshot of the user-controlled view transform.
///
/// Pan and zoom never mutate a snapshot in place: [`zoomed`](Self::zoomed)
/// and [`panned`](Self::panned) return the next one, so a frame always
/// renders against a single consistent state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    plane: PlaneBounds,
    /// Multiplicative zoom; 1.0 shows `plane`. Always positive and finite.
    scale: f64,
    /// Pan accumulator in pixels, measured from the home view.
    offset: (f64, f64),
}

impl ViewState {
    /// Home view over `plane`: scale 1, no pan.
    pub fn new(plane: PlaneBounds) -> Self {
        Self {
            plane,
            scale: 1.0,
            offset: (0.0, 0.0),
        }
    }

    /// A view with explicit parameters.
    pub fn with_transform(
        plane: PlaneBounds,
        scale: f64,
        offset: (f64, f64),
    ) -> crate::Result<Self> {
        plane.validate()?;
        if scale <= 0.0 || !scale.is_finite() {
            return Err(CoreError::InvalidScale(scale));
        }
        Ok(Self {
            plane,
            scale,
            offset,
        })
    }

    pub fn plane(&self) -> &PlaneBounds {
        &self.plane
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    /// Apply a wheel delta: `scale *= 0.9^(delta / 120)`.
    ///
    /// A delta that would push the scale to zero or infinity is ignored and
    /// the current snapshot is returned unchanged.
    #[must_use]
    pub fn zoomed(self, wheel_delta: i32) -> Self {
        let factor = ZOOM_PER_NOTCH.powf(wheel_delta as f64 / WHEEL_NOTCH);
        let scale = self.scale * factor;
        if scale <= 0.0 || !scale.is_finite() {
            warn!(
                wheel_delta,
                current = self.scale,
                "Zoom would leave the representable scale range, ignoring"
            );
            return self;
        }
        debug!(wheel_delta, scale, "Zoom");
        Self { scale, ..self }
    }

    /// Apply a pointer drag. The offset moves opposite to the pointer so the
    /// image follows it.
    #[must_use]
    pub fn panned(self, delta: (i32, i32)) -> Self {
        let offset = (
            self.offset.0 - delta.0 as f64,
            self.offset.1 - delta.1 as f64,
        );
        debug!(dx = delta.0, dy = delta.1, ?offset, "Pan");
        Self { offset, ..self }
    }

    /// Derive the per-axis pixel-to-plane factors for an output resolution.
    ///
    /// Both axes must be at least 2 pixels: the step sizes divide by
    /// `width - 1` and `height - 1`.
    pub fn mapping(&self, width: u32, height: u32) -> crate::Result<PlaneMapping> {
        if width < 2 || height < 2 {
            return Err(CoreError::InvalidResolution { width, height });
        }

        let max_im = self.plane.max_im(width, height);
        let re_factor = self.plane.re_extent() / (width as f64 - 1.0);
        let im_factor = (max_im - self.plane.min_im) / (height as f64 - 1.0);
        let half_w = width as f64 / 2.0;
        let half_h = height as f64 / 2.0;

        Ok(PlaneMapping {
            width,
            height,
            max_im,
            re_factor,
            im_factor,
            half_w,
            half_h,
            centre_re: self.plane.min_re + half_w * re_factor,
            centre_im: max_im - half_h * im_factor,
            scale: self.scale,
            offset: self.offset,
        })
    }

    /// One-off mapping of a single pixel. Prefer [`mapping`](Self::mapping)
    /// when converting many pixels at the same resolution.
    pub fn pixel_to_complex(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> crate::Result<Complex> {
        Ok(self.mapping(width, height)?.pixel_to_complex(x, y))
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PlaneBounds::DEFAULT)
    }
}

/// Pixel-to-plane transform derived from a [`ViewState`] at one resolution.
///
/// Pixels are centred on the buffer midpoint and shifted by the pan offset in
/// pixel space; the displacement is stepped from the plane window's midpoint
/// and the result multiplied by the zoom scale. Scaling last means zoom
/// contracts toward the plane origin rather than toward a fixed pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMapping {
    width: u32,
    height: u32,
    max_im: f64,
    re_factor: f64,
    im_factor: f64,
    half_w: f64,
    half_h: f64,
    /// Plane coordinates at the buffer midpoint, before scaling.
    centre_re: f64,
    centre_im: f64,
    scale: f64,
    offset: (f64, f64),
}

impl PlaneMapping {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_im(&self) -> f64 {
        self.max_im
    }

    /// Plane units per pixel along the real axis, before scaling.
    pub fn re_factor(&self) -> f64 {
        self.re_factor
    }

    /// Plane units per pixel along the imaginary axis, before scaling.
    pub fn im_factor(&self) -> f64 {
        self.im_factor
    }

    /// Real coordinate shared by every pixel in column `x`.
    #[inline]
    pub fn column_re(&self, x: u32) -> f64 {
        let x0 = (x as f64 - self.half_w) + self.offset.0;
        (self.centre_re + x0 * self.re_factor) * self.scale
    }

    /// Imaginary coordinate shared by every pixel in row `y`. Row 0 is the
    /// top of the image, so imaginary values decrease downward.
    #[inline]
    pub fn row_im(&self, y: u32) -> f64 {
        let y0 = (y as f64 - self.half_h) + self.offset.1;
        (self.centre_im - y0 * self.im_factor) * self.scale
    }

    #[inline]
    pub fn pixel_to_complex(&self, x: u32, y: u32) -> Complex {
        Complex::new(self.column_re(x), self.row_im(y))
    }
}
