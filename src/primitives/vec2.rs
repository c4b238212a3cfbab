//! 2D vector type for tile sizes and offsets.

use num_traits::Float;

/// A 2D vector representing a size or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub fn splat(v: F) -> Self {
        Self { x: v, y: v }
    }

    /// Creates the unit tile size (1, 1).
    #[inline]
    pub fn one() -> Self {
        Self::splat(F::one())
    }

    /// Returns true if both components are finite and strictly positive.
    #[inline]
    pub fn is_positive_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > F::zero() && self.y > F::zero()
    }

    /// Component-wise product.
    #[inline]
    pub fn scale(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_finite() {
        assert!(Vec2::new(1.0, 0.5).is_positive_finite());
        assert!(!Vec2::new(0.0, 1.0).is_positive_finite());
        assert!(!Vec2::new(1.0, -2.0).is_positive_finite());
        assert!(!Vec2::new(f64::INFINITY, 1.0).is_positive_finite());
        assert!(!Vec2::new(1.0, f64::NAN).is_positive_finite());
    }

    #[test]
    fn test_scale() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        assert_eq!(a.scale(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 8.0));
        assert_eq!(a.scale(Vec2::one()), a);
        assert_eq!(Vec2::<f32>::one(), Vec2::splat(1.0));
    }
}
