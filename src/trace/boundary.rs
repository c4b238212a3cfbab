//! Boundary walks over obstacle regions, including enclosed holes.

use crate::error::OutlineError;
use crate::grid::{Coord, DirectionSet, WalkabilityGrid};
use crate::region::RegionMap;

use super::cursor::{hole_start, outer_start, TraverseCursor};

/// Raw corner outlines of one obstacle region, in grid units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTrace {
    /// Obstacle region id.
    pub region: usize,
    pub cell_count: usize,
    /// Clockwise outer silhouette.
    pub outer: Vec<Coord>,
    /// Counter-clockwise boundaries of enclosed open space.
    pub holes: Vec<Vec<Coord>>,
}

/// Traces of every obstacle region that completed, plus the failures.
#[derive(Debug, Clone, Default)]
pub struct TraceReport {
    pub traces: Vec<RegionTrace>,
    pub failures: Vec<OutlineError>,
}

/// Walks boundary cycles and remembers every edge it has covered.
///
/// Each boundary edge belongs to exactly one cycle, so the visited set lets
/// callers skip cycles that were already emitted.
#[derive(Debug, Clone)]
pub struct BoundaryTracer<'a> {
    grid: &'a WalkabilityGrid,
    visited: Vec<DirectionSet>,
    limit: usize,
}

impl<'a> BoundaryTracer<'a> {
    /// Creates a tracer with the default point ceiling for `grid`.
    pub fn new(grid: &'a WalkabilityGrid) -> Self {
        Self {
            grid,
            visited: vec![DirectionSet::empty(); grid.len()],
            limit: Self::default_limit(grid),
        }
    }

    /// Sets the maximum number of points a single outline may emit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The default ceiling: four edges per cell, the most any region's
    /// boundary can hold.
    pub fn default_limit(grid: &WalkabilityGrid) -> usize {
        4 * grid.len() + 4
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Tests if `cursor` has been covered by an earlier walk.
    pub fn is_visited(&self, cursor: TraverseCursor) -> bool {
        self.grid
            .index(cursor.cell)
            .map_or(false, |i| self.visited[i].contains(cursor.dir))
    }

    /// Walks the cycle through `start` and returns the end corner of every
    /// edge, beginning with the start edge.
    ///
    /// The walk stops when it returns to `start` after at least one step.
    /// `region` only labels errors.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, Direction, WalkabilityGrid};
    /// use tile_outline::trace::{BoundaryTracer, TraverseCursor};
    ///
    /// let grid: WalkabilityGrid = "X".parse().unwrap();
    /// let mut tracer = BoundaryTracer::new(&grid);
    /// let start = TraverseCursor::new(Coord::new(0, 0), Direction::Up);
    /// let corners = tracer.trace(start, 0).unwrap();
    /// assert_eq!(
    ///     corners,
    ///     vec![Coord::new(1, 1), Coord::new(1, 0), Coord::new(0, 0), Coord::new(0, 1)]
    /// );
    /// ```
    pub fn trace(
        &mut self,
        start: TraverseCursor,
        region: usize,
    ) -> Result<Vec<Coord>, OutlineError> {
        let mut corners = Vec::new();
        let mut cursor = start;

        loop {
            if corners.len() >= self.limit {
                return Err(OutlineError::TracingOverflow {
                    region,
                    limit: self.limit,
                });
            }

            let Some(index) = self.grid.index(cursor.cell) else {
                return Err(OutlineError::malformed(format!(
                    "boundary walk of region {} reached off-grid cursor {}",
                    region, cursor
                )));
            };
            self.visited[index].insert(cursor.dir);
            corners.push(cursor.end_corner());

            cursor = cursor.next(self.grid).ok_or_else(|| {
                OutlineError::malformed(format!(
                    "boundary walk of region {} left the grid after {}",
                    region, cursor
                ))
            })?;

            if cursor == start {
                break;
            }
        }

        tracing::trace!(region, points = corners.len(), start = %start, "traced cycle");
        Ok(corners)
    }
}

/// Traces every obstacle region of `map`: outer silhouettes first, then the
/// boundaries around enclosed open regions.
///
/// Open regions that touch the grid border are not holes. Enclosed open
/// regions are handled in scan order; one whose start edge already lies on a
/// traced cycle is covered by that cycle. A region whose outer or hole walk
/// fails is dropped from `traces` and its error recorded.
pub fn trace_regions(grid: &WalkabilityGrid, map: &RegionMap, limit: usize) -> TraceReport {
    let mut tracer = BoundaryTracer::new(grid).with_limit(limit);
    let mut traces: Vec<Option<RegionTrace>> = vec![None; map.obstacles.len()];
    let mut failures = Vec::new();

    for region in &map.obstacles {
        let Some(start) = outer_start(grid, region) else {
            continue;
        };
        match tracer.trace(start, region.id) {
            Ok(outer) => {
                traces[region.id] = Some(RegionTrace {
                    region: region.id,
                    cell_count: region.len(),
                    outer,
                    holes: Vec::new(),
                });
            }
            Err(err) => failures.push(err),
        }
    }

    for open in &map.open {
        if open.touches_border(grid) {
            continue;
        }

        let matched = hole_start(grid, open)
            .and_then(|start| map.obstacle_at(start.cell).map(|owner| (start, owner.id)));
        let Some((start, owner)) = matched else {
            failures.push(OutlineError::UnresolvedHole {
                region: open.id,
                cells: open.cells.iter().copied().collect(),
            });
            continue;
        };

        if traces[owner].is_none() {
            tracing::debug!(hole = open.id, owner, "skipping hole of failed region");
            continue;
        }
        if tracer.is_visited(start) {
            tracing::trace!(hole = open.id, owner, "hole lies on an existing cycle");
            continue;
        }

        match tracer.trace(start, owner) {
            Ok(cycle) => {
                if let Some(trace) = traces[owner].as_mut() {
                    trace.holes.push(cycle);
                }
            }
            Err(err) => {
                failures.push(err);
                traces[owner] = None;
            }
        }
    }

    TraceReport {
        traces: traces.into_iter().flatten().collect(),
        failures,
    }
}
