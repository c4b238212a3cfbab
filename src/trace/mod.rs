//! Boundary tracing of obstacle regions.
//!
//! A boundary is walked clockwise in grid-corner coordinates with the blocked
//! cells on the walker's right. Each step covers one unit edge between a
//! blocked cell and open space, so every traced outline is closed and
//! axis-aligned. Outlines produced here are raw: collinear corners are kept
//! and no scaling is applied.

mod boundary;
mod cursor;

pub use boundary::{trace_regions, BoundaryTracer, RegionTrace, TraceReport};
pub use cursor::{hole_start, outer_start, TraverseCursor};
