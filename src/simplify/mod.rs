//! Outline simplification.

mod collinear;

pub use collinear::{simplify, simplify_indices};
