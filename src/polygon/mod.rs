//! Measurements over closed outlines.
//!
//! Outlines are stored as vertex rings without a repeated closing point.
//!
//! # Example
//!
//! ```
//! use tile_outline::polygon::{orient, polygon_signed_area, Winding};
//! use tile_outline::Point2;
//!
//! let mut square = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//! ];
//! assert_eq!(Winding::of(&square), Some(Winding::Clockwise));
//!
//! orient(&mut square, Winding::CounterClockwise);
//! assert_eq!(polygon_signed_area(&square), 4.0);
//! ```

mod outline;

pub use outline::{
    bounding_box, is_closed_rectilinear, orient, polygon_area, polygon_signed_area, rotate_to_lowest, Winding,
};
