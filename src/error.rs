//! Error types for outline extraction.

use crate::grid::Coord;
use thiserror::Error;

/// Errors that can occur while building a grid or tracing its outlines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// The input grid, layer stack or configuration is unusable.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A single outline walked past the point ceiling without returning to
    /// its start cursor.
    #[error("tracing overflow in region {region}: outline exceeded {limit} points")]
    TracingOverflow {
        /// Obstacle region whose outline was being traced.
        region: usize,
        /// The ceiling that was hit.
        limit: usize,
    },

    /// An enclosed open region could not be matched to an obstacle boundary.
    #[error("open region {region} ({} cells) could not be matched to an enclosing obstacle", cells.len())]
    UnresolvedHole {
        /// Open region id.
        region: usize,
        /// Cells of the unmatched region, in scan order.
        cells: Vec<Coord>,
    },
}

impl OutlineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        OutlineError::MalformedInput(reason.into())
    }

    /// The region this failure is attributed to, if any.
    pub fn region(&self) -> Option<usize> {
        match self {
            OutlineError::MalformedInput(_) => None,
            OutlineError::TracingOverflow { region, .. } => Some(*region),
            OutlineError::UnresolvedHole { region, .. } => Some(*region),
        }
    }
}
