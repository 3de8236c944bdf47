//! Preview of the bare loop packing

use crate::color::Color;
use crate::io::error::Result;
use crate::render::{Canvas, RenderContext, RenderObserver};

/// Draw every loop of the packing as a black outline on white
///
/// # Errors
///
/// Returns an error if the loop radius is invalid
pub fn empty_circles(context: &RenderContext, observer: &mut dyn RenderObserver) -> Result<Canvas> {
    let grid = context.circle_grid()?;
    let mut canvas = context.blank_canvas();

    observer.begin(grid.len() as u64);
    for (_center, boundary) in grid.boundaries() {
        canvas.draw_outline(&boundary, Color::BLACK);
        observer.tile_done();
    }

    Ok(canvas)
}
