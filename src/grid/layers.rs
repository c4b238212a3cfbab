//! Layered tile pathing and its reduction to a walkability grid.
//!
//! A map is painted on several layers. Each layer assigns a [`TilePathing`]
//! tag to every cell, and the tags are folded in a fixed order: the base
//! layer first, then overlays in stack order, then on-top overlays.

use std::fmt;

use super::walkability::{cell_count, check_dimensions};
use super::{Coord, WalkabilityGrid};
use crate::error::OutlineError;

/// How a single tile affects walkability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TilePathing {
    /// Base tile that can be walked on.
    BaseWalkable,
    /// Base tile that blocks movement.
    BaseUnwalkable,
    /// Overlay tile that keeps whatever lies beneath it.
    OverlayInherit,
    /// Overlay tile that makes the cell walkable.
    OverlayWalkable,
    /// Overlay tile that makes the cell blocked.
    OverlayUnwalkable,
}

impl TilePathing {
    /// Folds this tag into the accumulated walkability `current`.
    ///
    /// Base tags only take effect on the base layer.
    #[inline]
    pub fn apply(self, current: bool, kind: LayerKind) -> bool {
        match (self, kind) {
            (TilePathing::BaseWalkable, LayerKind::Base) => true,
            (TilePathing::BaseUnwalkable, LayerKind::Base) => false,
            (TilePathing::BaseWalkable | TilePathing::BaseUnwalkable, _) => current,
            (TilePathing::OverlayInherit, _) => current,
            (TilePathing::OverlayWalkable, _) => true,
            (TilePathing::OverlayUnwalkable, _) => false,
        }
    }
}

/// Position of a layer in the application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerKind {
    Base,
    Overlay,
    OnTopOverlay,
}

impl LayerKind {
    /// Default tag for a freshly created layer of this kind.
    pub fn default_pathing(self) -> TilePathing {
        match self {
            LayerKind::Base => TilePathing::BaseUnwalkable,
            LayerKind::Overlay | LayerKind::OnTopOverlay => TilePathing::OverlayInherit,
        }
    }

    fn rank(self) -> u8 {
        match self {
            LayerKind::Base => 0,
            LayerKind::Overlay => 1,
            LayerKind::OnTopOverlay => 2,
        }
    }
}

/// One painted layer of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub name: String,
    pub kind: LayerKind,
    width: i32,
    height: i32,
    pathing: Vec<TilePathing>,
}

impl TileLayer {
    /// Creates a layer filled with the default tag for `kind`.
    ///
    /// Dimensions follow the same limits as [`WalkabilityGrid::new`].
    pub fn new(
        name: impl Into<String>,
        kind: LayerKind,
        width: i32,
        height: i32,
    ) -> Result<Self, OutlineError> {
        check_dimensions(width, height)?;
        Ok(Self {
            name: name.into(),
            kind,
            width,
            height,
            pathing: vec![kind.default_pathing(); cell_count(width, height)],
        })
    }

    /// Creates a layer from per-cell tile type ids and a tileset palette.
    ///
    /// `ids` is row-major from `y = 0`; each id indexes into `palette`.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, LayerKind, TileLayer, TilePathing};
    ///
    /// let palette = [TilePathing::BaseWalkable, TilePathing::BaseUnwalkable];
    /// let layer = TileLayer::from_tile_ids("ground", LayerKind::Base, 2, 1, &[0, 1], &palette).unwrap();
    /// assert_eq!(layer.get(Coord::new(1, 0)), Some(TilePathing::BaseUnwalkable));
    /// ```
    pub fn from_tile_ids(
        name: impl Into<String>,
        kind: LayerKind,
        width: i32,
        height: i32,
        ids: &[usize],
        palette: &[TilePathing],
    ) -> Result<Self, OutlineError> {
        let name = name.into();
        let mut layer = Self::new(name, kind, width, height)?;
        if ids.len() != layer.pathing.len() {
            return Err(OutlineError::malformed(format!(
                "layer '{}' has {} tile ids, expected {}",
                layer.name,
                ids.len(),
                layer.pathing.len()
            )));
        }

        for (i, &id) in ids.iter().enumerate() {
            layer.pathing[i] = *palette.get(id).ok_or_else(|| {
                OutlineError::malformed(format!(
                    "layer '{}' uses tile id {} but the palette has {} entries",
                    layer.name,
                    id,
                    palette.len()
                ))
            })?;
        }

        Ok(layer)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }

    /// Returns the tag at `coord`, or `None` if it is off the layer.
    pub fn get(&self, coord: Coord) -> Option<TilePathing> {
        self.index(coord).map(|i| self.pathing[i])
    }

    /// Sets the tag at `coord`. Returns false if `coord` is off the layer.
    pub fn set(&mut self, coord: Coord, pathing: TilePathing) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.pathing[i] = pathing;
                true
            }
            None => false,
        }
    }
}

/// An ordered stack of equally sized layers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerStack {
    width: i32,
    height: i32,
    layers: Vec<TileLayer>,
}

impl LayerStack {
    /// Creates an empty stack for a `width` x `height` map.
    pub fn new(width: i32, height: i32) -> Result<Self, OutlineError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            layers: Vec::new(),
        })
    }

    /// Appends a layer on top of the stack.
    pub fn push(&mut self, layer: TileLayer) -> Result<(), OutlineError> {
        if layer.width != self.width || layer.height != self.height {
            return Err(OutlineError::malformed(format!(
                "layer '{}' is {}x{} but the map is {}x{}",
                layer.name, layer.width, layer.height, self.width, self.height
            )));
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Builder form of [`LayerStack::push`].
    pub fn with_layer(mut self, layer: TileLayer) -> Result<Self, OutlineError> {
        self.push(layer)?;
        Ok(self)
    }

    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// Reduces the stack to a walkability grid.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_outline::grid::{Coord, LayerKind, LayerStack, TileLayer, TilePathing};
    ///
    /// let mut bridge = TileLayer::new("bridge", LayerKind::Overlay, 2, 1).unwrap();
    /// bridge.set(Coord::new(1, 0), TilePathing::OverlayWalkable);
    ///
    /// let water = TileLayer::new("water", LayerKind::Base, 2, 1).unwrap();
    /// let stack = LayerStack::new(2, 1)
    ///     .unwrap()
    ///     .with_layer(water)
    ///     .unwrap()
    ///     .with_layer(bridge)
    ///     .unwrap();
    ///
    /// let grid = stack.resolve().unwrap();
    /// assert_eq!(grid.is_walkable(Coord::new(0, 0)), Some(false));
    /// assert_eq!(grid.is_walkable(Coord::new(1, 0)), Some(true));
    /// ```
    pub fn resolve(&self) -> Result<WalkabilityGrid, OutlineError> {
        let kinds: Vec<LayerKind> = self.layers.iter().map(|l| l.kind).collect();
        resolve_walkability(self.width, self.height, &kinds, |layer, coord| {
            self.layers[layer]
                .get(coord)
                .ok_or_else(|| format!("no tile at {}", coord))
        })
    }
}

/// Returns layer indices in application order: base, overlays, on-top
/// overlays, each group keeping its stack order.
pub fn application_order(kinds: &[LayerKind]) -> Result<Vec<usize>, OutlineError> {
    let bases = kinds.iter().filter(|k| **k == LayerKind::Base).count();
    if bases > 1 {
        return Err(OutlineError::malformed(format!(
            "{} base layers in stack, at most one is allowed",
            bases
        )));
    }

    let mut order: Vec<usize> = (0..kinds.len()).collect();
    order.sort_by_key(|&i| kinds[i].rank());
    Ok(order)
}

/// Builds a walkability grid from a layer callback.
///
/// `pathing(layer, coord)` is queried for every layer and cell. Cells start
/// walkable when no base layer is present. Any callback error aborts the run.
pub fn resolve_walkability<P, E>(
    width: i32,
    height: i32,
    kinds: &[LayerKind],
    mut pathing: P,
) -> Result<WalkabilityGrid, OutlineError>
where
    P: FnMut(usize, Coord) -> Result<TilePathing, E>,
    E: fmt::Display,
{
    let order = application_order(kinds)?;

    // Validate dimensions before calling into the stack.
    let coords: Vec<Coord> = WalkabilityGrid::filled(width, height, true)?
        .coords()
        .collect();
    let mut walkable = vec![true; coords.len()];

    for &layer in &order {
        let kind = kinds[layer];
        for (i, coord) in coords.iter().enumerate() {
            let tag = pathing(layer, *coord).map_err(|e| {
                OutlineError::malformed(format!(
                    "pathing for layer {} at {} failed: {}",
                    layer, coord, e
                ))
            })?;
            walkable[i] = tag.apply(walkable[i], kind);
        }
    }

    tracing::trace!(width, height, layers = kinds.len(), "resolved walkability");
    WalkabilityGrid::new(width, height, walkable)
}
