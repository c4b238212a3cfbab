//! Text form of a walkability grid.
//!
//! One line per row with the top row (`y = height - 1`) first. `O` or `.`
//! marks a walkable tile, `X` or `#` a blocked one. Surrounding whitespace
//! and blank lines are ignored.

use std::fmt;
use std::str::FromStr;

use super::{Coord, WalkabilityGrid};
use crate::error::OutlineError;

impl fmt::Display for WalkabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let c = match self.is_walkable(Coord::new(x, y)) {
                    Some(true) => 'O',
                    _ => 'X',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for WalkabilityGrid {
    type Err = OutlineError;

    /// Parses the text form.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, WalkabilityGrid};
    ///
    /// let grid: WalkabilityGrid = "XX\nO.".parse().unwrap();
    /// assert_eq!(grid.is_walkable(Coord::new(0, 1)), Some(false));
    /// assert_eq!(grid.is_walkable(Coord::new(1, 0)), Some(true));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut walkable = vec![false; width * height];

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(OutlineError::malformed(format!(
                    "map row {} has {} tiles, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }

            let y = height - 1 - row;
            for (x, c) in line.chars().enumerate() {
                walkable[y * width + x] = match c {
                    'O' | 'o' | '.' => true,
                    'X' | 'x' | '#' => false,
                    other => {
                        return Err(OutlineError::malformed(format!(
                            "unexpected map character '{}' in row {}",
                            other, row
                        )))
                    }
                };
            }
        }

        let width = i32::try_from(width)
            .map_err(|_| OutlineError::malformed("map is too wide"))?;
        let height = i32::try_from(height)
            .map_err(|_| OutlineError::malformed("map is too tall"))?;
        WalkabilityGrid::new(width, height, walkable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_top_row_first() {
        let grid = WalkabilityGrid::from_fn(3, 2, |c| c.y == 0 && c.x != 1).unwrap();
        assert_eq!(grid.to_string(), "XXX\nOXO\n");
    }

    #[test]
    fn test_parse_roundtrip() {
        let text = "XXXX\nXOOX\nXXXX\n";
        let grid: WalkabilityGrid = text.parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.walkable_count(), 2);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_ignores_indentation() {
        let grid: WalkabilityGrid = "
            ##
            #.
        "
        .parse()
        .unwrap();
        assert_eq!(grid.is_walkable(Coord::new(1, 0)), Some(true));
        assert_eq!(grid.is_walkable(Coord::new(1, 1)), Some(false));
    }

    #[test]
    fn test_parse_errors() {
        assert!("XX\nX".parse::<WalkabilityGrid>().is_err());
        let err = "X?".parse::<WalkabilityGrid>().unwrap_err();
        assert!(err.to_string().contains('?'));
    }

    #[test]
    fn test_parse_empty() {
        let grid: WalkabilityGrid = "".parse().unwrap();
        assert!(grid.is_empty());
    }
}
