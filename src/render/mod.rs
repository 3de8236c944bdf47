//! Mosaic renderers
//!
//! Every renderer is a one-shot traversal over a tiling: it allocates a fresh white
//! canvas the size of the source, samples each tile, snaps the sample to the
//! palette and paints it. Persisting the canvas is left to the caller.

/// White canvas and drawing primitives
pub mod canvas;
/// Empty loop packing preview
pub mod circles;
/// Silhouette-masked loop mosaic
pub mod floopify;
/// Per-pixel palette remap
pub mod pixelify;
/// Square grid mosaic
pub mod quantize;

pub use canvas::Canvas;

use crate::color::Palette;
use crate::geometry::hex::validate_radius;
use crate::geometry::{CircleGrid, RowCutoff, circle_centers};
use crate::io::error::Result;
use image::RgbImage;

/// Everything a renderer reads, built once per run
#[derive(Debug, Clone)]
pub struct RenderContext {
    source: RgbImage,
    palette: Palette,
    radius: f64,
    row_cutoff: RowCutoff,
}

impl RenderContext {
    /// Bundle the source photograph with the palette and loop radius
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not finite or is below
    /// [`MIN_LOOP_RADIUS`](crate::geometry::hex::MIN_LOOP_RADIUS)
    pub fn new(source: RgbImage, palette: Palette, radius: f64) -> Result<Self> {
        Ok(Self {
            source,
            palette,
            radius: validate_radius(radius)?,
            row_cutoff: RowCutoff::default(),
        })
    }

    /// Replace the rule that stops circle rows
    #[must_use]
    pub const fn with_row_cutoff(mut self, row_cutoff: RowCutoff) -> Self {
        self.row_cutoff = row_cutoff;
        self
    }

    /// Source photograph
    pub const fn source(&self) -> &RgbImage {
        &self.source
    }

    /// Output palette
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Source dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    /// Fresh white canvas matching the source
    pub fn blank_canvas(&self) -> Canvas {
        let (width, height) = self.dimensions();
        Canvas::blank(width, height)
    }

    /// Hex packing of loops over the source, recomputed on every call
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is invalid
    pub fn circle_grid(&self) -> Result<CircleGrid> {
        let (width, height) = self.dimensions();
        circle_centers(width, height, self.radius, self.row_cutoff)
    }
}

/// Receives tile progress from a running renderer
pub trait RenderObserver {
    /// Called once before the first tile with the number of tiles to process
    fn begin(&mut self, _total_tiles: u64) {}

    /// Called after each tile is painted
    fn tile_done(&mut self) {}
}

/// Observer that ignores all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RenderObserver for NoopObserver {}
