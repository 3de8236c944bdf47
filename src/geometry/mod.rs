//! Pixel-space geometry for tilings
//!
//! Boxes are kept in real-valued pixel coordinates and only snapped to integer
//! pixel spans when they meet a raster.

/// Points, bounding boxes and raster clamping
pub mod bounds;
/// Row-staggered hexagonal circle packing
pub mod hex;

pub use bounds::{BoundingBox, PixelRect, Point};
pub use hex::{CircleGrid, RowCutoff, circle_centers};
