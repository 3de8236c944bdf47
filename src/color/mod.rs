//! Color values and palette matching
//!
//! This module contains color-related functionality including:
//! - Opaque and alpha-tagged color value types
//! - Channel-weighted color distance
//! - Fixed palettes with nearest-color lookup

/// Channel-weighted Euclidean color distance
pub mod distance;
/// Fixed palettes and nearest-color lookup
pub mod palette;
/// Opaque and alpha-tagged color value types
pub mod types;

pub use distance::{Weighting, color_distance};
pub use palette::Palette;
pub use types::{AlphaColor, Color};
