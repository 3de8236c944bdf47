//! Raster loading and PNG export

use crate::io::error::{MosaicError, Result};
use crate::render::Canvas;
use crate::sampling::Silhouette;
use image::RgbImage;
use std::path::Path;

/// Load the source photograph as an opaque RGB raster
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_source(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Load a silhouette mask, naming it after the file stem
///
/// Images without an alpha channel load as fully opaque.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_silhouette(path: &Path) -> Result<Silhouette> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    Ok(Silhouette::new(name, img.to_rgba8()))
}

/// Save a canvas, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_canvas(canvas: &Canvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .image()
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
