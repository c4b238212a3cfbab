//! Export of collider outlines to other formats.

mod svg;

pub use svg::{collider_set_to_svg, outline_to_svg_path, region_to_svg_path};
