//! Command-line orchestration, configuration defaults and raster persistence

/// Command-line parsing and run orchestration
pub mod cli;
/// Defaults and artifact naming
pub mod configuration;
/// Error types for every fallible operation
pub mod error;
/// Loading source and silhouette rasters, saving canvases
pub mod image;
/// Progress bars for renderer runs
pub mod progress;
