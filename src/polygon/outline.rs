//! Closed-outline measurements and canonical ordering.

use crate::primitives::Point2;
use num_traits::Float;

/// Rotational sense of a closed outline, with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winding {
    /// Positive shoelace area.
    #[default]
    CounterClockwise,
    /// Negative shoelace area.
    Clockwise,
}

impl Winding {
    /// Returns the winding of `vertices`, or `None` for zero area.
    pub fn of<F: Float>(vertices: &[Point2<F>]) -> Option<Self> {
        let area = polygon_signed_area(vertices);
        if area > F::zero() {
            Some(Winding::CounterClockwise)
        } else if area < F::zero() {
            Some(Winding::Clockwise)
        } else {
            None
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut twice = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        twice = twice + vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }

    twice / (F::one() + F::one())
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Returns the bounding box as (min, max) points.
pub fn bounding_box<F: Float>(vertices: &[Point2<F>]) -> Option<(Point2<F>, Point2<F>)> {
    let (first, rest) = vertices.split_first()?;
    let mut min = *first;
    let mut max = *first;

    for v in rest {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }

    Some((min, max))
}

/// Tests if every edge of the closed outline, including the closing edge, is
/// horizontal or vertical and has non-zero length.
pub fn is_closed_rectilinear<F: Float>(vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    if n < 4 {
        return false;
    }

    (0..n).all(|i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        (a.x == b.x) != (a.y == b.y)
    })
}

/// Reverses `vertices` in place if their winding differs from `winding`.
///
/// Zero-area outlines are left untouched.
pub fn orient<F: Float>(vertices: &mut [Point2<F>], winding: Winding) {
    if Winding::of(vertices) == Some(winding.reversed()) {
        vertices.reverse();
    }
}

/// Rotates `vertices` so the ring starts at its lowest vertex, taking the
/// leftmost one on ties.
pub fn rotate_to_lowest<F: Float>(vertices: &mut [Point2<F>]) {
    let start = vertices
        .iter()
        .enumerate()
        .fold(None::<(usize, Point2<F>)>, |best, (i, &p)| match best {
            Some((_, b)) if b.y < p.y || (b.y == p.y && b.x <= p.x) => best,
            _ => Some((i, p)),
        })
        .map_or(0, |(i, _)| i);
    vertices.rotate_left(start);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    }

    #[test]
    fn test_signed_area_and_winding() {
        let mut poly = square();
        assert_relative_eq!(polygon_signed_area(&poly), 4.0);
        assert_eq!(Winding::of(&poly), Some(Winding::CounterClockwise));

        poly.reverse();
        assert_relative_eq!(polygon_signed_area(&poly), -4.0);
        assert_relative_eq!(polygon_area(&poly), 4.0);
        assert_eq!(Winding::of(&poly), Some(Winding::Clockwise));
    }

    #[test]
    fn test_degenerate_has_no_winding() {
        let line = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(Winding::of(&line), None);
        assert!(!is_closed_rectilinear(&line));
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = bounding_box(&square()).unwrap();
        assert_relative_eq!(min.x, 0.0);
        assert_relative_eq!(max.y, 2.0);
        assert!(bounding_box::<f64>(&[]).is_none());
    }

    #[test]
    fn test_rectilinear() {
        assert!(is_closed_rectilinear(&square()));

        let mut slanted = square();
        slanted[2] = Point2::new(2.5, 2.0);
        assert!(!is_closed_rectilinear(&slanted));

        // Repeated vertex: zero-length edge.
        let mut repeated = square();
        repeated.insert(1, Point2::new(0.0, 0.0));
        assert!(!is_closed_rectilinear(&repeated));
    }

    #[test]
    fn test_orient() {
        let mut poly = square();
        poly.reverse();
        orient(&mut poly, Winding::CounterClockwise);
        assert_eq!(Winding::of(&poly), Some(Winding::CounterClockwise));

        orient(&mut poly, Winding::Clockwise);
        assert_eq!(Winding::of(&poly), Some(Winding::Clockwise));
    }

    #[test]
    fn test_rotate_to_lowest() {
        let mut poly = vec![
            Point2::new(2.0_f64, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        rotate_to_lowest(&mut poly);
        assert_eq!(poly, square());
    }
}
