//! Dense walkability grid.

use super::Coord;
use crate::error::OutlineError;

/// Largest supported grid width, in tiles.
pub const MAX_GRID_WIDTH: i32 = 100;

/// Largest supported grid height, in tiles.
pub const MAX_GRID_HEIGHT: i32 = 100;

/// A rectangular snapshot of per-tile walkability.
///
/// Cells are stored row by row starting at `y = 0`. The grid is built once
/// per extraction run and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkabilityGrid {
    width: i32,
    height: i32,
    walkable: Vec<bool>,
    off_grid_walkable: bool,
}

impl WalkabilityGrid {
    /// Creates a grid from row-major walkability values.
    ///
    /// A zero width or height yields an empty grid. Negative or oversized
    /// dimensions, or a cell count that does not match `width * height`,
    /// are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, WalkabilityGrid};
    ///
    /// let grid = WalkabilityGrid::new(2, 1, vec![true, false]).unwrap();
    /// assert_eq!(grid.is_walkable(Coord::new(1, 0)), Some(false));
    /// assert_eq!(grid.is_walkable(Coord::new(2, 0)), None);
    /// ```
    pub fn new(width: i32, height: i32, walkable: Vec<bool>) -> Result<Self, OutlineError> {
        check_dimensions(width, height)?;
        let expected = cell_count(width, height);
        if walkable.len() != expected {
            return Err(OutlineError::malformed(format!(
                "expected {} cells for a {}x{} grid, got {}",
                expected,
                width,
                height,
                walkable.len()
            )));
        }

        Ok(Self::from_parts(width, height, walkable))
    }

    /// Creates a grid by evaluating `f` for every cell.
    pub fn from_fn<W>(width: i32, height: i32, mut f: W) -> Result<Self, OutlineError>
    where
        W: FnMut(Coord) -> bool,
    {
        check_dimensions(width, height)?;
        let mut walkable = Vec::with_capacity(cell_count(width, height));
        for y in 0..height.max(0) {
            for x in 0..width.max(0) {
                walkable.push(f(Coord::new(x, y)));
            }
        }

        Ok(Self::from_parts(width, height, walkable))
    }

    /// Creates a grid where every cell has the same walkability.
    pub fn filled(width: i32, height: i32, walkable: bool) -> Result<Self, OutlineError> {
        Self::from_fn(width, height, |_| walkable)
    }

    pub(crate) fn from_parts(width: i32, height: i32, walkable: Vec<bool>) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            walkable,
            off_grid_walkable: true,
        }
    }

    /// Sets how positions outside the grid are classified.
    ///
    /// Off-grid positions are walkable by default, which lets obstacles on
    /// the map edge be outlined. With `false`, the map behaves as if it were
    /// enclosed by a solid wall one tile thick.
    pub fn with_off_grid_walkable(mut self, walkable: bool) -> Self {
        self.off_grid_walkable = walkable;
        self
    }

    /// Returns the classification used for positions outside the grid.
    #[inline]
    pub fn off_grid_walkable(&self) -> bool {
        self.off_grid_walkable
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walkable.len()
    }

    /// Returns true if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty()
    }

    /// Tests if `coord` lies on the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }

    /// Tests if `coord` lies on the outermost ring of cells.
    #[inline]
    pub fn is_border(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x == self.width - 1
                || coord.y == self.height - 1)
    }

    /// Returns the storage index of `coord`, or `None` if it is off-grid.
    #[inline]
    pub fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }

    /// Returns the coordinate stored at `index`.
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        let w = self.width.max(1) as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }

    /// Returns the walkability of `coord`, or `None` if it is off-grid.
    #[inline]
    pub fn is_walkable(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|i| self.walkable[i])
    }

    /// Iterates all coordinates in scan order (row by row from `y = 0`).
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.walkable.len()).map(move |i| self.coord_of(i))
    }

    /// Returns the number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|w| **w).count()
    }

    /// Returns a copy of this grid surrounded by a one-tile unwalkable frame.
    ///
    /// The copy is shifted by one tile in both axes and treats positions
    /// beyond the frame as walkable.
    pub(crate) fn sealed(&self) -> Self {
        let width = self.width + 2;
        let height = self.height + 2;
        let mut walkable = Vec::with_capacity(cell_count(width, height));
        for y in 0..height {
            for x in 0..width {
                let inner = Coord::new(x - 1, y - 1);
                walkable.push(self.is_walkable(inner).unwrap_or(false));
            }
        }

        Self::from_parts(width, height, walkable)
    }
}

pub(crate) fn check_dimensions(width: i32, height: i32) -> Result<(), OutlineError> {
    if width < 0 || height < 0 {
        return Err(OutlineError::malformed(format!(
            "grid dimensions must not be negative, got {}x{}",
            width, height
        )));
    }
    if width > MAX_GRID_WIDTH || height > MAX_GRID_HEIGHT {
        return Err(OutlineError::malformed(format!(
            "grid dimensions {}x{} exceed the {}x{} limit",
            width, height, MAX_GRID_WIDTH, MAX_GRID_HEIGHT
        )));
    }
    Ok(())
}

#[inline]
pub(crate) fn cell_count(width: i32, height: i32) -> usize {
    if width <= 0 || height <= 0 {
        0
    } else {
        (width * height) as usize
    }
}
