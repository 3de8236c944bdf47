//! Silhouette masks selecting which loops get filled

use crate::color::AlphaColor;
use crate::geometry::Point;
use image::{Rgba, RgbaImage};

/// Named RGBA mask whose opaque pixels mark the inside of a shape
#[derive(Debug, Clone)]
pub struct Silhouette {
    name: String,
    mask: RgbaImage,
}

impl Silhouette {
    /// Wrap an RGBA raster as a silhouette
    pub fn new(name: impl Into<String>, mask: RgbaImage) -> Self {
        Self {
            name: name.into(),
            mask,
        }
    }

    /// Silhouette covering the whole canvas
    pub fn opaque(name: impl Into<String>, width: u32, height: u32) -> Self {
        let black = Rgba([0, 0, 0, AlphaColor::OPAQUE]);
        Self::new(name, RgbaImage::from_pixel(width, height, black))
    }

    /// Name used for the rendered artifact
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mask dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.mask.dimensions()
    }

    /// Mask pixel under `point`, if the point lies on the mask
    pub fn alpha_at(&self, point: Point) -> Option<AlphaColor> {
        let (x, y) = point.pixel()?;
        self.mask
            .get_pixel_checked(x, y)
            .map(|&pixel| AlphaColor::from(pixel))
    }

    /// Whether the mask is fully opaque under `point`
    pub fn covers(&self, point: Point) -> bool {
        self.alpha_at(point).is_some_and(AlphaColor::is_opaque)
    }
}
