//! Extraction settings.

use crate::error::OutlineError;
use crate::polygon::Winding;
use crate::primitives::Vec2;
use num_traits::Float;

/// Settings for [`extract_colliders`](crate::extract_colliders).
///
/// # Example
///
/// ```
/// use tile_outline::{ExtractConfig, Vec2, Winding};
///
/// let config = ExtractConfig::new()
///     .with_tile_size(Vec2::new(16.0_f32, 16.0))
///     .with_winding(Winding::Clockwise);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractConfig<F> {
    /// World size of one tile; grid corners are multiplied by it.
    pub tile_size: Vec2<F>,
    /// Winding every emitted outline is given, holes included.
    pub winding: Winding,
    /// Point ceiling for a single traced outline. `None` uses the bound for
    /// the grid being traced.
    pub max_outline_points: Option<usize>,
}

impl<F: Float> ExtractConfig<F> {
    /// Unit tiles, counter-clockwise outlines and the derived ceiling.
    pub fn new() -> Self {
        Self {
            tile_size: Vec2::one(),
            winding: Winding::default(),
            max_outline_points: None,
        }
    }

    pub fn with_tile_size(mut self, tile_size: Vec2<F>) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    pub fn with_max_outline_points(mut self, limit: usize) -> Self {
        self.max_outline_points = Some(limit);
        self
    }

    /// Checks that the tile size is positive and finite on both axes.
    pub fn validate(&self) -> Result<(), OutlineError> {
        if !self.tile_size.is_positive_finite() {
            return Err(OutlineError::malformed(
                "tile size must be positive and finite",
            ));
        }
        Ok(())
    }
}

impl<F: Float> Default for ExtractConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config: ExtractConfig<f64> = ExtractConfig::default();
        assert_relative_eq!(config.tile_size.x, 1.0);
        assert_relative_eq!(config.tile_size.y, 1.0);
        assert_eq!(config.winding, Winding::CounterClockwise);
        assert_eq!(config.max_outline_points, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tile_size() {
        for size in [
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, -2.0),
            Vec2::new(f64::NAN, 1.0),
            Vec2::new(1.0, f64::INFINITY),
        ] {
            let config = ExtractConfig::new().with_tile_size(size);
            assert!(matches!(
                config.validate(),
                Err(OutlineError::MalformedInput(_))
            ));
        }
    }

    #[test]
    fn test_builders() {
        let config: ExtractConfig<f32> = ExtractConfig::new().with_max_outline_points(12);
        assert_eq!(config.max_outline_points, Some(12));
    }
}
