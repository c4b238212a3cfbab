//! Integer cell coordinates.

use std::cmp::Ordering;
use std::fmt;

use super::Direction;

/// A cell coordinate on the tile grid.
///
/// `x` grows to the right and `y` grows up. Coordinates are ordered in scan
/// order: by row (`y`) first, then by column (`x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate one step away in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the coordinate translated by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_step() {
        let c = Coord::new(2, 2);
        assert_eq!(c.step(Direction::Up), Coord::new(2, 3));
        assert_eq!(c.step(Direction::Right), Coord::new(3, 2));
        assert_eq!(c.step(Direction::Down), Coord::new(2, 1));
        assert_eq!(c.step(Direction::Left), Coord::new(1, 2));
    }

    #[test]
    fn test_scan_order() {
        let set: BTreeSet<Coord> = [(2, 0), (0, 1), (1, 0), (0, 0)]
            .into_iter()
            .map(Coord::from)
            .collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(0, 1)
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(-1, 4).to_string(), "(-1, 4)");
    }
}
