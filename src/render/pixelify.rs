//! Full resolution palette remap

use crate::geometry::Point;
use crate::render::{Canvas, RenderContext, RenderObserver};
use crate::sampling::pixel_color;

/// Snap every source pixel to its nearest palette color
///
/// Pixels are visited column by column. Progress is reported once per column.
pub fn pixelify(context: &RenderContext, observer: &mut dyn RenderObserver) -> Canvas {
    let source = context.source();
    let palette = context.palette();
    let mut canvas = context.blank_canvas();

    observer.begin(u64::from(source.width()));
    for x in 0..source.width() {
        for y in 0..source.height() {
            if let Some(sample) = pixel_color(Point::new(f64::from(x), f64::from(y)), source) {
                canvas.put_pixel(x, y, palette.closest_color(sample));
            }
        }
        observer.tile_done();
    }

    canvas
}
