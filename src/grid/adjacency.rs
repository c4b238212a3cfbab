//! Axis-neighbour lookup and open-direction classification.
//!
//! Neighbours are resolved by coordinate arithmetic against the dense grid,
//! so cells never hold references to each other. A neighbour slot is `None`
//! when the position falls off the grid; [`WalkabilityGrid::is_open`] applies
//! the grid's off-grid policy to such slots.

use super::{Coord, Direction, DirectionSet, WalkabilityGrid};

/// The four axis-neighbour slots of a cell, `None` where off-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    slots: [Option<Coord>; 4],
}

impl Neighbors {
    /// Returns the neighbour in `dir`.
    #[inline]
    pub fn get(&self, dir: Direction) -> Option<Coord> {
        self.slots[dir.index()]
    }

    /// Iterates `(direction, neighbour)` pairs clockwise from `Up`.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<Coord>)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Iterates only the neighbours that lie on the grid.
    pub fn on_grid(&self) -> impl Iterator<Item = Coord> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// A resolved cell record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub walkable: bool,
    pub neighbors: Neighbors,
    /// Directions whose neighbour is walkable or off-grid (per policy).
    pub open: DirectionSet,
}

impl WalkabilityGrid {
    /// Returns the neighbour of `coord` in `dir`, or `None` if it is off-grid.
    #[inline]
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let next = coord.step(dir);
        if self.contains(next) {
            Some(next)
        } else {
            None
        }
    }

    /// Returns all four neighbour slots of `coord`.
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        let mut slots = [None; 4];
        for dir in Direction::ALL {
            slots[dir.index()] = self.neighbor(coord, dir);
        }
        Neighbors { slots }
    }

    /// Tests if `coord` counts as open space for boundary purposes.
    ///
    /// On-grid positions are open when walkable; off-grid positions follow
    /// [`WalkabilityGrid::off_grid_walkable`].
    #[inline]
    pub fn is_open(&self, coord: Coord) -> bool {
        self.is_walkable(coord).unwrap_or(self.off_grid_walkable())
    }

    /// Tests if the neighbour of `coord` in `dir` is open.
    #[inline]
    pub fn is_open_toward(&self, coord: Coord, dir: Direction) -> bool {
        self.is_open(coord.step(dir))
    }

    /// Returns the set of directions in which `coord` borders open space.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, Direction, WalkabilityGrid};
    ///
    /// let grid = WalkabilityGrid::new(2, 1, vec![false, false]).unwrap();
    /// let open = grid.open_directions(Coord::new(0, 0));
    /// assert!(open.contains(Direction::Left));
    /// assert!(!open.contains(Direction::Right));
    /// assert_eq!(open.len(), 3);
    /// ```
    pub fn open_directions(&self, coord: Coord) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_open_toward(coord, *d))
            .collect()
    }

    /// Returns the full cell record for `coord`, or `None` if it is off-grid.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        let walkable = self.is_walkable(coord)?;
        Some(Cell {
            coord,
            walkable,
            neighbors: self.neighbors(coord),
            open: self.open_directions(coord),
        })
    }

    /// Iterates all cell records in scan order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.coords().filter_map(move |c| self.cell(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_neighbors() {
        let grid = WalkabilityGrid::filled(3, 3, false).unwrap();
        let n = grid.neighbors(Coord::new(0, 0));
        assert_eq!(n.get(Direction::Up), Some(Coord::new(0, 1)));
        assert_eq!(n.get(Direction::Right), Some(Coord::new(1, 0)));
        assert_eq!(n.get(Direction::Down), None);
        assert_eq!(n.get(Direction::Left), None);
        assert_eq!(n.on_grid().count(), 2);
    }

    #[test]
    fn test_off_grid_policy() {
        let grid = WalkabilityGrid::filled(1, 1, false).unwrap();
        assert_eq!(grid.open_directions(Coord::new(0, 0)), DirectionSet::all());

        let sealed = grid.with_off_grid_walkable(false);
        assert!(sealed.open_directions(Coord::new(0, 0)).is_empty());
    }

    #[test]
    fn test_open_directions_follow_walkability() {
        // Centre cell open, ring blocked.
        let grid = WalkabilityGrid::from_fn(3, 3, |c| c == Coord::new(1, 1)).unwrap();
        let below = grid.open_directions(Coord::new(1, 0));
        assert!(below.contains(Direction::Up));
        assert!(below.contains(Direction::Down));
        assert!(!below.contains(Direction::Left));
        assert!(!below.contains(Direction::Right));
    }

    #[test]
    fn test_cell_record() {
        let grid = WalkabilityGrid::from_fn(2, 2, |c| c.x == 0).unwrap();
        let cell = grid.cell(Coord::new(1, 1)).unwrap();
        assert!(!cell.walkable);
        assert!(cell.open.contains(Direction::Left));
        assert!(cell.open.contains(Direction::Up));
        assert!(!cell.open.contains(Direction::Down));
        assert!(grid.cell(Coord::new(2, 2)).is_none());
        assert_eq!(grid.cells().count(), 4);
    }
}
