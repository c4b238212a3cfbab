//! Walkability grid, cell adjacency and layered tile pathing.
//!
//! # Example
//!
//! ```
//! use tile_outline::grid::{Coord, Direction, WalkabilityGrid};
//!
//! let grid: WalkabilityGrid = "
//!     XXX
//!     XOX
//!     XXX
//! "
//! .parse()
//! .unwrap();
//!
//! let below_centre = grid.cell(Coord::new(1, 0)).unwrap();
//! assert!(!below_centre.walkable);
//! assert!(below_centre.open.contains(Direction::Up));
//! ```

mod adjacency;
mod ascii;
mod coord;
mod direction;
mod layers;
mod walkability;

pub use adjacency::{Cell, Neighbors};
pub use coord::Coord;
pub use direction::{Direction, DirectionSet};
pub use layers::{
    application_order, resolve_walkability, LayerKind, LayerStack, TileLayer, TilePathing,
};
pub use walkability::{WalkabilityGrid, MAX_GRID_HEIGHT, MAX_GRID_WIDTH};
