//! Contains some utility functions and structures

mod contour;
pub use contour::*;
