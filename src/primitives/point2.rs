//! 2D point type for outline vertices.

use super::Vec2;
use num_traits::Float;

/// A 2D point with x and y coordinates, y increasing up.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Places an integer grid corner in world space using `tile_size`.
    ///
    /// Returns `None` if a coordinate cannot be represented in `F`.
    #[inline]
    pub fn from_corner(x: i32, y: i32, tile_size: Vec2<F>) -> Option<Self> {
        let world = Vec2::new(F::from(x)?, F::from(y)?).scale(tile_size);
        Some(Self::new(world.x, world.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_corner() {
        let p: Point2<f64> = Point2::from_corner(3, -2, Vec2::new(0.5, 2.0)).unwrap();
        assert_relative_eq!(p.x, 1.5);
        assert_relative_eq!(p.y, -4.0);
    }
}
