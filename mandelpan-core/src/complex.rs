use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the complex plane as two `f64` components.
///
/// Kept `Copy` and free of operator overloads: the escape-time loop works on
/// the components directly so it can reuse the squared terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        write!(f, "{:.6} {} {:.6}i", self.re, sign, self.im.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_sq() {
        assert!((Complex::new(3.0, 4.0).norm_sq() - 25.0).abs() < f64::EPSILON);
        assert_eq!(Complex::ZERO.norm_sq(), 0.0);
    }

    #[test]
    fn display_sign() {
        assert_eq!(Complex::new(-0.5, 0.25).to_string(), "-0.500000 + 0.250000i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1.000000 - 2.000000i");
    }

    #[test]
    fn serde_roundtrip() {
        let c = Complex::new(-0.75, 0.1);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<Complex>(&json).unwrap(), c);
    }
}
