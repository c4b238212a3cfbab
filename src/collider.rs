//! Collider outline assembly.
//!
//! Runs the full pipeline over a walkability grid: region grouping, boundary
//! tracing, scaling to world units, collinear simplification and canonical
//! ordering. Every emitted outline starts at its lowest, then leftmost
//! vertex and follows the configured winding.

use crate::config::ExtractConfig;
use crate::error::OutlineError;
use crate::grid::{Coord, WalkabilityGrid};
use crate::polygon::{orient, rotate_to_lowest};
use crate::primitives::Point2;
use crate::region::RegionMap;
use crate::simplify::simplify;
use crate::trace::{trace_regions, BoundaryTracer, RegionTrace, TraceReport};
use num_traits::Float;

/// Outlines of one obstacle region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionOutlines<F> {
    /// Obstacle region id, in scan order of the traced grid.
    pub region: usize,
    /// Number of map cells in the region.
    pub cell_count: usize,
    pub outer: Vec<Point2<F>>,
    pub holes: Vec<Vec<Point2<F>>>,
}

impl<F> RegionOutlines<F> {
    /// Splits into `(outer, holes)`.
    pub fn into_parts(self) -> (Vec<Point2<F>>, Vec<Vec<Point2<F>>>) {
        (self.outer, self.holes)
    }
}

/// All collider outlines of a grid, in obstacle-region scan order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColliderSet<F> {
    pub regions: Vec<RegionOutlines<F>>,
}

impl<F> ColliderSet<F> {
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionOutlines<F>> {
        self.regions.iter()
    }

    /// Total number of outlines, holes included.
    pub fn outline_count(&self) -> usize {
        self.regions.iter().map(|r| 1 + r.holes.len()).sum()
    }
}

impl<F> Default for ColliderSet<F> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<F> IntoIterator for ColliderSet<F> {
    type Item = RegionOutlines<F>;
    type IntoIter = std::vec::IntoIter<RegionOutlines<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a ColliderSet<F> {
    type Item = &'a RegionOutlines<F>;
    type IntoIter = std::slice::Iter<'a, RegionOutlines<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Result of a best-effort extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractReport<F> {
    /// Regions whose outlines all completed.
    pub regions: Vec<RegionOutlines<F>>,
    pub failures: Vec<OutlineError>,
}

impl<F> ExtractReport<F> {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts into a [`ColliderSet`], or the first failure if any region
    /// failed.
    pub fn into_result(self) -> Result<ColliderSet<F>, OutlineError> {
        match self.failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(ColliderSet {
                regions: self.regions,
            }),
        }
    }
}

impl<F> Default for ExtractReport<F> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Extracts the collider outlines of every obstacle region in `grid`.
///
/// Any failure aborts the whole run. When the grid treats off-grid space as
/// blocked, the map is enclosed in a one-tile wall before tracing; that
/// wall's outlines lie one tile outside the map and only real map cells are
/// counted in `cell_count`.
///
/// # Example
///
/// ```
/// use tile_outline::{extract_colliders, ExtractConfig, Point2, WalkabilityGrid};
///
/// let grid: WalkabilityGrid = "XXX\nXOX\nXXX".parse().unwrap();
/// let colliders = extract_colliders(&grid, &ExtractConfig::<f64>::default()).unwrap();
///
/// let region = &colliders.regions[0];
/// assert_eq!(region.cell_count, 8);
/// assert_eq!(region.outer[2], Point2::new(3.0, 3.0));
/// assert_eq!(region.holes[0][0], Point2::new(1.0, 1.0));
/// ```
pub fn extract_colliders<F: Float>(
    grid: &WalkabilityGrid,
    config: &ExtractConfig<F>,
) -> Result<ColliderSet<F>, OutlineError> {
    config.validate()?;
    run(grid, config).into_result()
}

/// Extracts collider outlines, keeping every region that completed.
///
/// Regions whose tracing failed are left out of `regions` and their errors
/// collected in `failures`; other regions are unaffected.
pub fn extract_colliders_partial<F: Float>(
    grid: &WalkabilityGrid,
    config: &ExtractConfig<F>,
) -> ExtractReport<F> {
    if let Err(err) = config.validate() {
        return ExtractReport {
            regions: Vec::new(),
            failures: vec![err],
        };
    }

    let report = run(grid, config);
    for failure in &report.failures {
        tracing::warn!(region = ?failure.region(), error = %failure, "region skipped");
    }
    report
}

fn run<F: Float>(grid: &WalkabilityGrid, config: &ExtractConfig<F>) -> ExtractReport<F> {
    if grid.is_empty() {
        return ExtractReport::default();
    }

    // A blocked surround is traced as real wall cells around the map.
    let sealed;
    let (traced, shift) = if grid.off_grid_walkable() {
        (grid, 0)
    } else {
        sealed = grid.sealed();
        (&sealed, -1)
    };

    let map = RegionMap::build(traced);
    let limit = config
        .max_outline_points
        .unwrap_or_else(|| BoundaryTracer::default_limit(traced));
    let TraceReport { traces, failures } = trace_regions(traced, &map, limit);

    let mut report = ExtractReport {
        regions: Vec::with_capacity(traces.len()),
        failures: failures
            .into_iter()
            .map(|err| shift_error(err, shift))
            .collect(),
    };

    for trace in &traces {
        let cell_count = if shift == 0 {
            trace.cell_count
        } else {
            map.obstacles[trace.region]
                .cells
                .iter()
                .filter(|c| grid.contains(c.offset(shift, shift)))
                .count()
        };

        match assemble(trace, cell_count, shift, config) {
            Ok(outlines) => {
                tracing::debug!(
                    region = outlines.region,
                    points = outlines.outer.len(),
                    holes = outlines.holes.len(),
                    "assembled region outlines"
                );
                report.regions.push(outlines);
            }
            Err(err) => report.failures.push(err),
        }
    }

    report
}

fn assemble<F: Float>(
    trace: &RegionTrace,
    cell_count: usize,
    shift: i32,
    config: &ExtractConfig<F>,
) -> Result<RegionOutlines<F>, OutlineError> {
    let outer = finish_outline(&trace.outer, shift, config)?;
    let holes = trace
        .holes
        .iter()
        .map(|hole| finish_outline(hole, shift, config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RegionOutlines {
        region: trace.region,
        cell_count,
        outer,
        holes,
    })
}

/// Scales, simplifies and orders one traced cycle. Fewer than three
/// remaining points yield an empty outline.
fn finish_outline<F: Float>(
    corners: &[Coord],
    shift: i32,
    config: &ExtractConfig<F>,
) -> Result<Vec<Point2<F>>, OutlineError> {
    let points = corners
        .iter()
        .map(|c| Point2::from_corner(c.x + shift, c.y + shift, config.tile_size))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| OutlineError::malformed("grid corner is not representable"))?;

    let mut outline = simplify(&points);
    if outline.len() < 3 {
        return Ok(Vec::new());
    }
    orient(&mut outline, config.winding);
    rotate_to_lowest(&mut outline);
    Ok(outline)
}

fn shift_error(err: OutlineError, shift: i32) -> OutlineError {
    match err {
        OutlineError::UnresolvedHole { region, cells } if shift != 0 => {
            OutlineError::UnresolvedHole {
                region,
                cells: cells.into_iter().map(|c| c.offset(shift, shift)).collect(),
            }
        }
        other => other,
    }
}
