//! Traversal cursor and the boundary-walk transition rule.

use std::cmp::Reverse;
use std::fmt;

use crate::grid::{Coord, Direction, WalkabilityGrid};
use crate::region::Region;

/// A position on the boundary: the `dir` edge of `cell`, walked clockwise.
///
/// The neighbour of `cell` in `dir` is always open; the blocked cell lies on
/// the walker's right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraverseCursor {
    pub cell: Coord,
    pub dir: Direction,
}

impl TraverseCursor {
    #[inline]
    pub fn new(cell: Coord, dir: Direction) -> Self {
        Self { cell, dir }
    }

    /// Grid corner where walking this edge begins.
    #[inline]
    pub fn start_corner(self) -> Coord {
        let ((dx, dy), _) = self.dir.edge_corners();
        self.cell.offset(dx, dy)
    }

    /// Grid corner where walking this edge ends.
    #[inline]
    pub fn end_corner(self) -> Coord {
        let (_, (dx, dy)) = self.dir.edge_corners();
        self.cell.offset(dx, dy)
    }

    /// Computes the next edge of the walk.
    ///
    /// With `r` the direction clockwise from `dir`:
    /// 1. if the neighbour towards `r` is open, turn right on the same cell;
    /// 2. otherwise, if that neighbour `n` is open towards `dir`, advance onto
    ///    the same side of `n`;
    /// 3. otherwise step around the concave corner onto the left side of the
    ///    cell beyond `n`.
    ///
    /// Returns `None` only if the walk would leave the grid, which happens
    /// when off-grid positions are treated as blocked.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, Direction, WalkabilityGrid};
    /// use tile_outline::trace::TraverseCursor;
    ///
    /// let grid: WalkabilityGrid = "XX".parse().unwrap();
    /// let top_left = TraverseCursor::new(Coord::new(0, 0), Direction::Up);
    /// assert_eq!(
    ///     top_left.next(&grid),
    ///     Some(TraverseCursor::new(Coord::new(1, 0), Direction::Up))
    /// );
    /// ```
    pub fn next(self, grid: &WalkabilityGrid) -> Option<Self> {
        let right = self.dir.clockwise();
        if grid.is_open_toward(self.cell, right) {
            return Some(Self::new(self.cell, right));
        }

        let ahead = grid.neighbor(self.cell, right)?;
        if grid.is_open_toward(ahead, self.dir) {
            return Some(Self::new(ahead, self.dir));
        }

        let around = grid.neighbor(ahead, self.dir)?;
        Some(Self::new(around, self.dir.counter_clockwise()))
    }
}

impl fmt::Display for TraverseCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.cell, self.dir)
    }
}

/// Start cursor for the outer silhouette of an obstacle region.
///
/// Cells are scanned top row first and left to right within a row; the first
/// cell open upwards is chosen. Its top edge cannot be an internal seam.
pub fn outer_start(grid: &WalkabilityGrid, region: &Region) -> Option<TraverseCursor> {
    let mut cells: Vec<Coord> = region.cells.iter().copied().collect();
    cells.sort_by_key(|c| (Reverse(c.y), c.x));
    cells
        .into_iter()
        .find(|c| grid.is_open_toward(*c, Direction::Up))
        .map(|c| TraverseCursor::new(c, Direction::Up))
}

/// Start cursor for the boundary around an enclosed open region.
///
/// The cursor sits on the top edge of the blocked cell directly below the
/// region's seed (its lowest, then leftmost cell). Returns `None` if that
/// cell is missing or walkable.
pub fn hole_start(grid: &WalkabilityGrid, hole: &Region) -> Option<TraverseCursor> {
    let seed = hole.seed()?;
    let below = grid.neighbor(seed, Direction::Down)?;
    match grid.is_walkable(below) {
        Some(false) => Some(TraverseCursor::new(below, Direction::Up)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::group_by_walkability;

    fn grid(text: &str) -> WalkabilityGrid {
        text.parse().unwrap()
    }

    #[test]
    fn test_corners() {
        let c = TraverseCursor::new(Coord::new(2, 3), Direction::Up);
        assert_eq!(c.start_corner(), Coord::new(2, 4));
        assert_eq!(c.end_corner(), Coord::new(3, 4));

        let c = TraverseCursor::new(Coord::new(2, 3), Direction::Down);
        assert_eq!(c.start_corner(), Coord::new(3, 3));
        assert_eq!(c.end_corner(), Coord::new(2, 3));
    }

    #[test]
    fn test_turn_right_in_place() {
        let g = grid("X");
        let c = TraverseCursor::new(Coord::new(0, 0), Direction::Up);
        let next = c.next(&g).unwrap();
        assert_eq!(next, TraverseCursor::new(Coord::new(0, 0), Direction::Right));
        assert_eq!(c.end_corner(), next.start_corner());
    }

    #[test]
    fn test_advance() {
        let g = grid("XX");
        // Walking the bottom edge leftwards from the right cell.
        let from_right = TraverseCursor::new(Coord::new(1, 0), Direction::Down);
        assert_eq!(
            from_right.next(&g),
            Some(TraverseCursor::new(Coord::new(0, 0), Direction::Down))
        );
    }

    #[test]
    fn test_concave_corner() {
        // L shape: (0,0), (1,0), (1,1).
        let g = grid("OX\nXX");
        let c = TraverseCursor::new(Coord::new(0, 0), Direction::Up);
        let next = c.next(&g).unwrap();
        assert_eq!(next, TraverseCursor::new(Coord::new(1, 1), Direction::Left));
        assert_eq!(c.end_corner(), next.start_corner());
    }

    #[test]
    fn test_next_leaves_sealed_grid() {
        let g = grid("X").with_off_grid_walkable(false);
        // Pretend the edge is exposed; the walk cannot continue off the grid.
        let c = TraverseCursor::new(Coord::new(0, 0), Direction::Up);
        assert_eq!(c.next(&g), None);
    }

    #[test]
    fn test_outer_start_skips_inner_seams() {
        let g = grid("XXX\nXOX\nXXX");
        let region = &group_by_walkability(&g, false)[0];
        let start = outer_start(&g, region).unwrap();
        assert_eq!(start, TraverseCursor::new(Coord::new(0, 2), Direction::Up));
    }

    #[test]
    fn test_hole_start() {
        let g = grid("XXX\nXOX\nXXX");
        let hole = &group_by_walkability(&g, true)[0];
        let start = hole_start(&g, hole).unwrap();
        assert_eq!(start, TraverseCursor::new(Coord::new(1, 0), Direction::Up));

        // A walkable seed on the bottom row has nothing below it.
        let g = grid("XXX\nOXX");
        let open = &group_by_walkability(&g, true)[0];
        assert_eq!(hole_start(&g, open), None);
    }
}
