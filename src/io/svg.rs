//! SVG export of collider outlines.
//!
//! Outline coordinates are y-up; SVG is y-down. Path strings keep the
//! outline coordinates as they are, while [`collider_set_to_svg`] wraps its
//! paths in a flipping group so maps render the right way up.
//!
//! # Example
//!
//! ```
//! use tile_outline::io::outline_to_svg_path;
//! use tile_outline::Point2;
//!
//! let square = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! assert_eq!(outline_to_svg_path(&square), "M 0 0 L 1 0 L 1 1 L 0 1 Z");
//! ```

use crate::collider::{ColliderSet, RegionOutlines};
use crate::polygon::bounding_box;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// Converts a closed outline to SVG path data using M, L and Z commands.
///
/// An empty outline yields an empty string.
pub fn outline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>]) -> String {
    let mut d = String::new();
    push_outline(&mut d, points);
    d
}

/// Converts a region's outer outline and holes to one path.
///
/// Render it with `fill-rule="evenodd"` so the holes stay empty regardless
/// of winding.
pub fn region_to_svg_path<F: Float + fmt::Display>(region: &RegionOutlines<F>) -> String {
    let mut d = String::new();
    for outline in std::iter::once(&region.outer).chain(region.holes.iter()) {
        if outline.is_empty() {
            continue;
        }
        if !d.is_empty() {
            d.push(' ');
        }
        push_outline(&mut d, outline);
    }
    d
}

/// Renders a standalone SVG document with one filled path per region.
///
/// The view box covers every outline plus a margin of `padding` in outline
/// units.
pub fn collider_set_to_svg<F: Float + fmt::Display>(set: &ColliderSet<F>, padding: F) -> String {
    let all: Vec<Point2<F>> = set
        .iter()
        .flat_map(|r| std::iter::once(&r.outer).chain(r.holes.iter()))
        .flatten()
        .copied()
        .collect();

    let (min, max) = bounding_box(&all).unwrap_or((Point2::origin(), Point2::origin()));
    let x = min.x - padding;
    let y = -(max.y + padding);
    let pad2 = padding + padding;
    let width = max.x - min.x + pad2;
    let height = max.y - min.y + pad2;

    let mut doc = String::new();
    doc.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        x, y, width, height
    ));
    doc.push_str("<g transform=\"scale(1,-1)\">\n");
    for region in set {
        doc.push_str(&format!(
            "<path data-region=\"{}\" d=\"{}\" fill=\"#4a5568\" fill-rule=\"evenodd\" stroke=\"#1a202c\"/>\n",
            region.region,
            region_to_svg_path(region)
        ));
    }
    doc.push_str("</g>\n");
    doc.push_str("</svg>\n");
    doc
}

fn push_outline<F: Float + fmt::Display>(d: &mut String, points: &[Point2<F>]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    d.push_str(&format!("M {} {}", first.x, first.y));
    for p in rest {
        d.push_str(&format!(" L {} {}", p.x, p.y));
    }
    d.push_str(" Z");
}
