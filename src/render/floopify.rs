//! Loop mosaic masked by a silhouette
//!
//! Loops whose center falls on an opaque silhouette pixel are filled with the
//! palette color nearest to the average of their bounding box on the source.
//! Every other loop is drawn as an empty black ring so the packing stays visible.

use crate::color::Color;
use crate::io::error::{MosaicError, Result};
use crate::render::{Canvas, RenderContext, RenderObserver};
use crate::sampling::{Silhouette, average_color_of};

/// Render the loop mosaic for one silhouette
///
/// # Errors
///
/// Returns an error if:
/// - The silhouette dimensions differ from the source
/// - The loop radius is invalid
pub fn floopify(
    context: &RenderContext,
    silhouette: &Silhouette,
    observer: &mut dyn RenderObserver,
) -> Result<Canvas> {
    if silhouette.dimensions() != context.dimensions() {
        let (sw, sh) = silhouette.dimensions();
        let (w, h) = context.dimensions();
        return Err(MosaicError::InvalidSourceData {
            reason: format!(
                "silhouette '{}' is {sw}x{sh} but the source is {w}x{h}",
                silhouette.name()
            ),
        });
    }

    let grid = context.circle_grid()?;
    let palette = context.palette();
    let mut canvas = context.blank_canvas();

    observer.begin(grid.len() as u64);
    for (center, boundary) in grid.boundaries() {
        let fill = silhouette
            .covers(center)
            .then(|| average_color_of(&boundary, context.source()))
            .flatten()
            .map(|sample| palette.closest_color(sample));

        match fill {
            Some(color) => canvas.draw_ellipse(&boundary, color, Color::BLACK),
            None => canvas.draw_outline(&boundary, Color::BLACK),
        }
        observer.tile_done();
    }

    Ok(canvas)
}
