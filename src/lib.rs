//! Palette mosaics built from photographs
//!
//! A source photograph is snapped onto a small fixed palette either cell by cell
//! on a square grid, pixel by pixel, or loop by loop on a hexagonal circle packing
//! masked by a silhouette image.

#![forbid(unsafe_code)]

/// Color value types, palette presets and perceptual distance
pub mod color;
/// Points, boxes and hexagonal circle packing
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Canvas drawing primitives and the mosaic traversals
pub mod render;
/// Region averaging and silhouette lookups on source rasters
pub mod sampling;

pub use io::error::{MosaicError, Result};
