//! Region averaging on opaque rasters
//!
//! Boxes crossing the raster edge are clamped to the pixels that exist, so the
//! average only ever sees in-bounds pixels. A box with no pixel on the raster has
//! no average.

use crate::color::Color;
use crate::geometry::{BoundingBox, Point};
use image::RgbImage;

/// Mean color of the raster pixels covered by `boundary`
///
/// Each channel is averaged independently and rounded to the nearest integer.
/// Returns `None` when `boundary` lies entirely off the raster.
pub fn average_color_of(boundary: &BoundingBox, raster: &RgbImage) -> Option<Color> {
    let rect = boundary.clamp_to(raster.width(), raster.height())?;
    let count = rect.area();

    let mut sums = [0u64; 3];
    for (x, y) in rect.pixels() {
        let pixel = raster.get_pixel_checked(x, y)?;
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(channel);
        }
    }

    let [red, green, blue] = sums.map(|sum| ((sum + count / 2) / count) as u8);
    Some(Color::new(red, green, blue))
}

/// Color of the single raster pixel under `point`
pub fn pixel_color(point: Point, raster: &RgbImage) -> Option<Color> {
    let (x, y) = point.pixel()?;
    raster
        .get_pixel_checked(x, y)
        .map(|&pixel| Color::from(pixel))
}
