use crate::complex::Complex;
use crate::error::CoreError;

/// Squared escape radius. An orbit with `|z|² > 4` has left the disc of
/// radius 2 and is guaranteed to diverge.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// The result of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationResult {
    /// The orbit left the escape radius at the 0-based iterate `iterations`.
    /// `norm_sq` is `|z|²` at that moment; banded coloring ignores it, but it
    /// is what a smoothed (`log2(log2|z|)`) coloring would need.
    Escaped { iterations: u32, norm_sq: f64 },

    /// The orbit stayed bounded for the whole iteration cap.
    Interior,
}

impl IterationResult {
    #[inline]
    pub fn is_interior(&self) -> bool {
        matches!(self, Self::Interior)
    }
}

/// Escape-time evaluator for `z ← z² + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTime {
    iteration_cap: u32,
}

impl EscapeTime {
    pub const DEFAULT_ITERATION_CAP: u32 = 4000;

    pub fn new(iteration_cap: u32) -> crate::Result<Self> {
        if iteration_cap < 1 {
            return Err(CoreError::InvalidIterationCap(iteration_cap));
        }
        Ok(Self { iteration_cap })
    }

    #[inline]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    /// Iterate `c` starting from `z = c`.
    ///
    /// The magnitude test runs before each update, so a point already outside
    /// radius 2 reports `iterations: 0`.
    #[inline]
    pub fn iterate(&self, c: Complex) -> IterationResult {
        let mut re = c.re;
        let mut im = c.im;

        for n in 0..self.iteration_cap {
            let re2 = re * re;
            let im2 = im * im;
            let norm_sq = re2 + im2;
            if norm_sq > ESCAPE_RADIUS_SQ {
                return IterationResult::Escaped {
                    iterations: n,
                    norm_sq,
                };
            }
            im = 2.0 * re * im + c.im;
            re = re2 - im2 + c.re;
        }

        IterationResult::Interior
    }
}

impl Default for EscapeTime {
    fn default() -> Self {
        Self {
            iteration_cap: Self::DEFAULT_ITERATION_CAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped_at(result: IterationResult) -> u32 {
        match result {
            IterationResult::Escaped { iterations, .. } => iterations,
            IterationResult::Interior => panic!("expected the point to escape"),
        }
    }

    #[test]
    fn zero_cap_rejected() {
        assert_eq!(EscapeTime::new(0), Err(CoreError::InvalidIterationCap(0)));
    }

    #[test]
    fn default_cap() {
        assert_eq!(EscapeTime::default().iteration_cap(), 4000);
    }

    #[test]
    fn origin_is_interior_for_any_cap() {
        for cap in [1, 2, 10, 256, 4000] {
            let et = EscapeTime::new(cap).unwrap();
            assert!(et.iterate(Complex::ZERO).is_interior(), "cap {cap}");
        }
    }

    #[test]
    fn far_point_escapes_immediately_for_any_cap() {
        for cap in [1, 2, 10, 4000] {
            let et = EscapeTime::new(cap).unwrap();
            let n = escaped_at(et.iterate(Complex::new(5.0, 5.0)));
            assert!(n <= 1, "cap {cap}: escaped at {n}");
        }
    }

    #[test]
    fn known_escape_count() {
        // z = 1 → 2 → 5; |2|² = 4 is not > 4, so escape is seen at n = 2.
        let n = escaped_at(EscapeTime::default().iterate(Complex::new(1.0, 0.0)));
        assert_eq!(n, 2);
    }

    #[test]
    fn cap_shorter_than_escape_reports_interior() {
        let et = EscapeTime::new(2).unwrap();
        assert!(et.iterate(Complex::new(1.0, 0.0)).is_interior());
    }

    #[test]
    fn escape_carries_norm() {
        match EscapeTime::default().iterate(Complex::new(3.0, 4.0)) {
            IterationResult::Escaped { iterations, norm_sq } => {
                assert_eq!(iterations, 0);
                assert!((norm_sq - 25.0).abs() < 1e-12);
            }
            IterationResult::Interior => panic!("3+4i should escape"),
        }
    }

    #[test]
    fn period_two_bulb_is_interior() {
        // c = -1: orbit -1 → 0 → -1 → …
        assert!(EscapeTime::default()
            .iterate(Complex::new(-1.0, 0.0))
            .is_interior());
    }

    #[test]
    fn positive_real_axis_escapes() {
        assert!(!EscapeTime::default()
            .iterate(Complex::new(0.5, 0.0))
            .is_interior());
    }
}
