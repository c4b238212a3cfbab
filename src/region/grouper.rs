//! Flood-fill partition of the grid into same-walkability regions.

use std::collections::BTreeSet;

use crate::grid::{Coord, Direction, WalkabilityGrid};

/// A maximal 4-connected set of cells sharing one walkability value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Position of this region in its scan-ordered list.
    pub id: usize,
    pub walkable: bool,
    /// Member cells, iterated in scan order.
    pub cells: BTreeSet<Coord>,
}

impl Region {
    /// The first cell of the region in scan order (lowest row, then column).
    pub fn seed(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Tests if any member cell lies on the outermost ring of the grid.
    pub fn touches_border(&self, grid: &WalkabilityGrid) -> bool {
        self.cells.iter().any(|c| grid.is_border(*c))
    }
}

/// Partitions all cells whose walkability equals `want_walkable` into
/// regions.
///
/// Cells are visited in scan order, so region ids follow the position of each
/// region's first cell. Regions are pairwise disjoint and together hold every
/// matching cell exactly once.
///
/// # Example
///
/// ```
/// use tile_outline::grid::WalkabilityGrid;
/// use tile_outline::region::group_by_walkability;
///
/// // Two blocked tiles touching only at a corner are separate regions.
/// let grid: WalkabilityGrid = "XO\nOX".parse().unwrap();
/// let obstacles = group_by_walkability(&grid, false);
/// assert_eq!(obstacles.len(), 2);
/// assert_eq!(obstacles[0].len(), 1);
/// ```
pub fn group_by_walkability(grid: &WalkabilityGrid, want_walkable: bool) -> Vec<Region> {
    let mut visited = vec![false; grid.len()];
    let mut regions = Vec::new();

    for start in 0..grid.len() {
        let coord = grid.coord_of(start);
        if visited[start] || grid.is_walkable(coord) != Some(want_walkable) {
            continue;
        }

        let cells = flood(grid, coord, &mut visited);
        regions.push(Region {
            id: regions.len(),
            walkable: want_walkable,
            cells,
        });
    }

    regions
}

/// Returns the region containing `coord`, or `None` if it is off-grid.
///
/// The returned region has id 0; it is not numbered against a full partition.
pub fn region_at(grid: &WalkabilityGrid, coord: Coord) -> Option<Region> {
    let walkable = grid.is_walkable(coord)?;
    let mut visited = vec![false; grid.len()];
    Some(Region {
        id: 0,
        walkable,
        cells: flood(grid, coord, &mut visited),
    })
}

/// Iterative 4-connected fill from `start` over cells of the same
/// walkability, marking each reached cell in `visited`.
fn flood(grid: &WalkabilityGrid, start: Coord, visited: &mut [bool]) -> BTreeSet<Coord> {
    let mut cells = BTreeSet::new();
    let Some(want) = grid.is_walkable(start) else {
        return cells;
    };
    let Some(start_index) = grid.index(start) else {
        return cells;
    };

    let mut stack = vec![start];
    visited[start_index] = true;

    while let Some(current) = stack.pop() {
        cells.insert(current);
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(current, dir) else {
                continue;
            };
            let Some(i) = grid.index(next) else {
                continue;
            };
            if !visited[i] && grid.is_walkable(next) == Some(want) {
                visited[i] = true;
                stack.push(next);
            }
        }
    }

    cells
}
