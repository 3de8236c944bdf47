//! Square grid mosaic
//!
//! The canvas is cut into `size` x `size` cells, `floor(width / size)` per row and
//! `floor(height / size)` per column. Any strip left over at the right or bottom
//! edge is not covered and stays white.

use crate::color::Color;
use crate::geometry::BoundingBox;
use crate::io::error::{Result, invalid_parameter};
use crate::render::{Canvas, RenderContext, RenderObserver};
use crate::sampling::average_color_of;
use ndarray::Array2;

/// Number of whole cells as (rows, cols)
///
/// # Errors
///
/// Returns an error if `size` is zero
pub fn cell_counts(width: u32, height: u32, size: u32) -> Result<(u32, u32)> {
    if size == 0 {
        return Err(invalid_parameter(
            "grid_size",
            &size,
            &"grid cells must be at least one pixel wide",
        ));
    }
    Ok((height / size, width / size))
}

/// Palette color of every cell, indexed by (row, col)
///
/// # Errors
///
/// Returns an error if `size` is zero
pub fn quantize_plan(context: &RenderContext, size: u32) -> Result<Array2<Color>> {
    let (width, height) = context.dimensions();
    let (rows, cols) = cell_counts(width, height, size)?;
    let palette = context.palette();

    let plan = Array2::from_shape_fn((rows as usize, cols as usize), |(row, col)| {
        let boundary = BoundingBox::grid_cell(col as u32, row as u32, size);
        average_color_of(&boundary, context.source())
            .map_or(Color::WHITE, |sample| palette.closest_color(sample))
    });

    Ok(plan)
}

/// Render the square grid mosaic with cells of `size` pixels
///
/// Cells are painted row-major from the top left.
///
/// # Errors
///
/// Returns an error if `size` is zero
pub fn quantize(
    context: &RenderContext,
    size: u32,
    observer: &mut dyn RenderObserver,
) -> Result<Canvas> {
    let plan = quantize_plan(context, size)?;
    let mut canvas = context.blank_canvas();

    observer.begin(plan.len() as u64);
    for ((row, col), &color) in plan.indexed_iter() {
        let boundary = BoundingBox::grid_cell(col as u32, row as u32, size);
        if let Some(rect) = boundary.clamp_to(canvas.width(), canvas.height()) {
            canvas.fill_rect(rect, color);
        }
        observer.tile_done();
    }

    Ok(canvas)
}
