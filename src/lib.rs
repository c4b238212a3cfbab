//! tile-outline - Collider outlines from tile-map walkability
//!
//! Reduces a layered tile map to a walkability grid, groups its blocked
//! tiles into connected regions and traces each region's boundary, holes
//! included, into closed axis-aligned outlines ready to feed a 2D physics
//! engine.
//!
//! # Example
//!
//! ```
//! use tile_outline::grid::{LayerKind, LayerStack, TileLayer, TilePathing};
//! use tile_outline::{extract_colliders, Coord, ExtractConfig, Point2, Vec2};
//!
//! // A 4x3 room: walls everywhere, floor painted by an overlay.
//! let base = TileLayer::new("walls", LayerKind::Base, 4, 3)?;
//! let mut floor = TileLayer::new("floor", LayerKind::Overlay, 4, 3)?;
//! floor.set(Coord::new(1, 1), TilePathing::OverlayWalkable);
//! floor.set(Coord::new(2, 1), TilePathing::OverlayWalkable);
//!
//! let stack = LayerStack::new(4, 3)?.with_layer(base)?.with_layer(floor)?;
//! let grid = stack.resolve()?;
//!
//! let config = ExtractConfig::new().with_tile_size(Vec2::new(2.0, 2.0));
//! let colliders = extract_colliders(&grid, &config)?;
//!
//! assert_eq!(colliders.len(), 1);
//! let (outer, holes) = colliders.regions[0].clone().into_parts();
//! assert_eq!(outer[0], Point2::new(0.0, 0.0));
//! assert_eq!(outer[2], Point2::new(8.0, 6.0));
//! assert_eq!(holes[0][0], Point2::new(2.0, 2.0));
//! # Ok::<(), tile_outline::OutlineError>(())
//! ```

pub mod collider;
pub mod config;
pub mod error;
pub mod grid;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod region;
pub mod simplify;
pub mod trace;

pub use collider::{
    extract_colliders, extract_colliders_partial, ColliderSet, ExtractReport, RegionOutlines,
};
pub use config::ExtractConfig;
pub use error::OutlineError;
pub use grid::{Coord, Direction, DirectionSet, WalkabilityGrid};
pub use polygon::Winding;
pub use primitives::{Point2, Vec2};
pub use region::{Region, RegionMap};
