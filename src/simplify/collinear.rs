//! Collinear vertex removal for closed axis-aligned outlines.
//!
//! A vertex is redundant when it shares its x coordinate with both
//! neighbours or its y coordinate with both neighbours. The outline is
//! treated as a ring, so the first and last vertices are neighbours.
//!
//! Time complexity: O(n) per pass; traced outlines settle in one or two
//! passes.

use crate::primitives::Point2;
use num_traits::Float;

/// Removes every redundant vertex from a closed outline.
///
/// The relative order of the remaining vertices is preserved and the result
/// is a fixed point: simplifying it again returns the same points. Inputs
/// with fewer than 3 points are returned unchanged. A ring whose vertices
/// all lie on one axis line collapses to fewer than 3 points.
///
/// # Example
///
/// ```
/// use tile_outline::{Point2, simplify::simplify};
///
/// // A 2x1 rectangle traced unit edge by unit edge.
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let simplified = simplify(&points);
/// assert_eq!(simplified.len(), 4);
/// assert_eq!(simplify(&simplified), simplified);
/// ```
pub fn simplify<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    simplify_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Returns the indices of the vertices [`simplify`] keeps, in ascending
/// order.
pub fn simplify_indices<F: Float>(points: &[Point2<F>]) -> Vec<usize> {
    let mut kept: Vec<usize> = (0..points.len()).collect();
    if kept.len() < 3 {
        return kept;
    }

    loop {
        let n = kept.len();
        if n < 3 {
            break;
        }

        let next: Vec<usize> = (0..n)
            .filter(|&k| {
                let prev = points[kept[(k + n - 1) % n]];
                let curr = points[kept[k]];
                let next = points[kept[(k + 1) % n]];
                !is_redundant(prev, curr, next)
            })
            .map(|k| kept[k])
            .collect();

        if next.len() == n {
            break;
        }
        kept = next;
    }

    kept
}

#[inline]
fn is_redundant<F: Float>(prev: Point2<F>, curr: Point2<F>, next: Point2<F>) -> bool {
    (prev.x == curr.x && curr.x == next.x) || (prev.y == curr.y && curr.y == next.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_simplify_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(simplify(&points).is_empty());
    }

    #[test]
    fn test_short_input_unchanged() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(simplify(&points), points);
    }

    #[test]
    fn test_square_already_minimal() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(simplify_indices(&points), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_removes_edge_midpoints() {
        // 3x3 square traced along unit edges.
        let points = pts(&[
            (1.0, 3.0),
            (2.0, 3.0),
            (3.0, 3.0),
            (3.0, 2.0),
            (3.0, 1.0),
            (3.0, 0.0),
            (2.0, 0.0),
            (1.0, 0.0),
            (0.0, 0.0),
            (0.0, 1.0),
            (0.0, 2.0),
            (0.0, 3.0),
        ]);
        let simplified = simplify(&points);
        assert_eq!(
            simplified,
            pts(&[(3.0, 3.0), (3.0, 0.0), (0.0, 0.0), (0.0, 3.0)])
        );
    }

    #[test]
    fn test_wraparound_vertex_removed() {
        // The first vertex sits mid-edge between the last and the second.
        let points = pts(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert_eq!(simplify_indices(&points), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_idempotent_on_l_shape() {
        let points = pts(&[
            (2.0, 2.0),
            (2.0, 1.0),
            (2.0, 0.0),
            (1.0, 0.0),
            (0.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
        ]);
        let once = simplify(&points);
        assert_eq!(once.len(), 6);
        assert_eq!(simplify(&once), once);
    }

    #[test]
    fn test_flat_ring_collapses() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert!(simplify(&points).len() < 3);
    }

    #[test]
    fn test_diagonal_points_kept() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)]);
        let simplified = simplify(&points);
        assert_eq!(simplified.len(), 4);
        assert_relative_eq!(simplified[1].x, 1.0);
    }
}
