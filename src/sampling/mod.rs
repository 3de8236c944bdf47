//! Reading colors out of source rasters and silhouette masks

/// Silhouette masks and their opacity lookups
pub mod mask;
/// Average color of a rectangular region
pub mod region;

pub use mask::Silhouette;
pub use region::{average_color_of, pixel_color};
