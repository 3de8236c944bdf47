//! Rendering defaults and output artifact naming

// One loop is about 3/5 in, which is 87 pixels in the reference photograph
/// Default loop diameter in pixels
pub const DEFAULT_LOOP_DIAMETER: f64 = 87.0;

/// Default square cell size for the grid mosaic
pub const DEFAULT_GRID_SIZE: u32 = 20;

/// Default directory receiving the rendered artifacts
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// Output settings
/// Extension of every rendered artifact
pub const OUTPUT_EXTENSION: &str = "png";
/// Artifact name of the empty loop preview
pub const CIRCLES_ARTIFACT: &str = "circles";
/// Artifact name prefix of the grid mosaic, followed by the cell size
pub const QUANTIZED_ARTIFACT_PREFIX: &str = "quantized";
/// Artifact name of the per-pixel remap
pub const PIXELIFY_ARTIFACT: &str = "pixelify";
/// Name of the silhouette covering the whole source
pub const FULL_SILHOUETTE_NAME: &str = "everything";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

/// Artifact name of the grid mosaic for cells of `size` pixels
pub fn quantized_artifact_name(size: u32) -> String {
    format!("{QUANTIZED_ARTIFACT_PREFIX}{size}")
}

/// File name of the grid mosaic for cells of `size` pixels
pub fn quantized_file_name(size: u32) -> String {
    artifact_file_name(&quantized_artifact_name(size))
}

/// File name of an artifact called `name`
pub fn artifact_file_name(name: &str) -> String {
    format!("{name}.{OUTPUT_EXTENSION}")
}
