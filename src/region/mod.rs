//! Connected-component partition of a walkability grid.
//!
//! Obstacle regions are the maximal 4-connected sets of blocked cells; open
//! regions are the same for walkable cells. Both lists are built in scan
//! order, which is the tie-break used everywhere downstream.

mod grouper;

pub use grouper::{group_by_walkability, region_at, Region};

use crate::grid::{Coord, WalkabilityGrid};

/// Which partition a cell's label refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionLabel {
    Obstacle(usize),
    Open(usize),
}

/// Both partitions of a grid plus a per-cell label lookup.
#[derive(Debug, Clone)]
pub struct RegionMap {
    pub obstacles: Vec<Region>,
    pub open: Vec<Region>,
    labels: Vec<RegionLabel>,
    width: i32,
    height: i32,
}

impl RegionMap {
    /// Groups `grid` into obstacle and open regions.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, WalkabilityGrid};
    /// use tile_outline::region::{RegionLabel, RegionMap};
    ///
    /// let grid: WalkabilityGrid = "XXX\nXOX\nXXX".parse().unwrap();
    /// let map = RegionMap::build(&grid);
    /// assert_eq!(map.label(Coord::new(1, 1)), Some(RegionLabel::Open(0)));
    /// assert_eq!(map.label(Coord::new(0, 0)), Some(RegionLabel::Obstacle(0)));
    /// ```
    pub fn build(grid: &WalkabilityGrid) -> Self {
        let obstacles = group_by_walkability(grid, false);
        let open = group_by_walkability(grid, true);

        let mut labels = vec![RegionLabel::Obstacle(0); grid.len()];
        for region in &obstacles {
            for cell in &region.cells {
                if let Some(i) = grid.index(*cell) {
                    labels[i] = RegionLabel::Obstacle(region.id);
                }
            }
        }
        for region in &open {
            for cell in &region.cells {
                if let Some(i) = grid.index(*cell) {
                    labels[i] = RegionLabel::Open(region.id);
                }
            }
        }

        tracing::debug!(
            obstacles = obstacles.len(),
            open = open.len(),
            "grouped grid regions"
        );

        Self {
            obstacles,
            open,
            labels,
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Returns the label of `coord`, or `None` if it is off-grid.
    pub fn label(&self, coord: Coord) -> Option<RegionLabel> {
        if coord.x < 0 || coord.y < 0 || coord.x >= self.width || coord.y >= self.height {
            return None;
        }
        self.labels
            .get((coord.y * self.width + coord.x) as usize)
            .copied()
    }

    /// Returns the obstacle region holding `coord`, if it is a blocked cell.
    pub fn obstacle_at(&self, coord: Coord) -> Option<&Region> {
        match self.label(coord)? {
            RegionLabel::Obstacle(id) => self.obstacles.get(id),
            RegionLabel::Open(_) => None,
        }
    }
}
