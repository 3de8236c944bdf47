//! Command-line interface rendering every requested mosaic for one photograph

use crate::color::palette::PalettePreset;
use crate::color::{Palette, Weighting};
use crate::geometry::RowCutoff;
use crate::io::configuration::{
    CIRCLES_ARTIFACT, DEFAULT_GRID_SIZE, DEFAULT_LOOP_DIAMETER, DEFAULT_OUTPUT_DIR,
    FULL_SILHOUETTE_NAME, PIXELIFY_ARTIFACT, artifact_file_name, quantized_artifact_name,
    quantized_file_name,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{export_canvas, load_silhouette, load_source};
use crate::io::progress::ProgressManager;
use crate::render::circles::empty_circles;
use crate::render::floopify::floopify;
use crate::render::pixelify::pixelify;
use crate::render::quantize::{cell_counts, quantize};
use crate::render::{Canvas, NoopObserver, RenderContext, RenderObserver};
use crate::sampling::Silhouette;
use clap::{Parser, ValueEnum};
use std::collections::HashSet;
use std::path::PathBuf;

/// Mosaic renderers selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Empty loop packing preview
    Circles,
    /// Square grid mosaic
    Quantize,
    /// Per-pixel palette remap
    Pixelify,
    /// Loop mosaic for each silhouette
    Floopify,
}

impl Mode {
    /// Every renderer in default run order
    pub const ALL: [Self; 4] = [
        Self::Circles,
        Self::Floopify,
        Self::Quantize,
        Self::Pixelify,
    ];

    /// Name shown in progress output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circles => "circles",
            Self::Quantize => "quantize",
            Self::Pixelify => "pixelify",
            Self::Floopify => "floopify",
        }
    }
}

#[derive(Parser)]
#[command(name = "floopify")]
#[command(
    author,
    version,
    about = "Render palette mosaics of a photograph with square cells and hex-packed loops"
)]
/// Command-line arguments for the mosaic renderers
pub struct Cli {
    /// Source photograph
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Silhouette mask the size of the source (repeatable)
    #[arg(short, long = "silhouette", value_name = "PATH")]
    pub silhouettes: Vec<PathBuf>,

    /// Also render loops over the whole source
    #[arg(short, long)]
    pub full_silhouette: bool,

    /// Directory receiving the rendered images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Cell size in pixels for the grid mosaic
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Loop diameter in pixels
    #[arg(short = 'd', long, default_value_t = DEFAULT_LOOP_DIAMETER)]
    pub loop_diameter: f64,

    /// Channel weighting used to match colors
    #[arg(short, long, value_enum, default_value_t = Weighting::Even)]
    pub weighting: Weighting,

    /// Built-in palette
    #[arg(short, long, value_enum, default_value_t = PalettePreset::Sampled)]
    pub palette: PalettePreset,

    /// Renderers to run, comma separated
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = Mode::ALL)]
    pub modes: Vec<Mode>,

    /// Stop loop rows once their center leaves the canvas
    #[arg(long)]
    pub strict_rows: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Loop radius derived from the diameter
    pub fn radius(&self) -> f64 {
        self.loop_diameter / 2.0
    }

    /// Row rule selected by `--strict-rows`
    pub const fn row_cutoff(&self) -> RowCutoff {
        if self.strict_rows {
            RowCutoff::CenterInside
        } else {
            RowCutoff::Legacy
        }
    }

    /// Requested renderers without repeats, in the order given
    pub fn selected_modes(&self) -> Vec<Mode> {
        let mut modes = Vec::with_capacity(self.modes.len());
        for &mode in &self.modes {
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }
        modes
    }

    /// Palette with the requested weighting
    pub fn build_palette(&self) -> Palette {
        Palette::from_preset(self.palette).with_weighting(self.weighting)
    }
}

/// Loads the inputs once, runs each requested renderer and saves its artifact
pub struct MosaicRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    written: Vec<PathBuf>,
}

impl MosaicRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            written: Vec::new(),
        }
    }

    /// Artifacts written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Load inputs and render every selected mosaic
    ///
    /// All inputs are loaded and all parameters validated before the first
    /// renderer starts, so a bad input never leaves partial output behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source or any silhouette cannot be loaded
    /// - The loop diameter or grid size is not usable
    /// - A silhouette differs in size from the source
    /// - A silhouette name clashes with another artifact name
    /// - An artifact cannot be written
    pub fn process(&mut self) -> Result<()> {
        let modes = self.cli.selected_modes();
        let context = self.build_context()?;
        let silhouettes = self.load_silhouettes(&context)?;

        if modes.contains(&Mode::Quantize) {
            let (width, height) = context.dimensions();
            cell_counts(width, height, self.cli.grid_size)?;
        }

        for mode in modes {
            self.run_mode(mode, &context, &silhouettes)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn build_context(&self) -> Result<RenderContext> {
        let source = load_source(&self.cli.source)?;
        Ok(
            RenderContext::new(source, self.cli.build_palette(), self.cli.radius())?
                .with_row_cutoff(self.cli.row_cutoff()),
        )
    }

    fn load_silhouettes(&self, context: &RenderContext) -> Result<Vec<Silhouette>> {
        let mut silhouettes = self
            .cli
            .silhouettes
            .iter()
            .map(|path| load_silhouette(path))
            .collect::<Result<Vec<_>>>()?;

        let dimensions = context.dimensions();
        if let Some(mismatch) = silhouettes.iter().find(|s| s.dimensions() != dimensions) {
            let (sw, sh) = mismatch.dimensions();
            return Err(MosaicError::InvalidSourceData {
                reason: format!(
                    "silhouette '{}' is {sw}x{sh} but the source is {}x{}",
                    mismatch.name(),
                    dimensions.0,
                    dimensions.1
                ),
            });
        }

        if self.cli.full_silhouette {
            let (width, height) = dimensions;
            silhouettes.push(Silhouette::opaque(FULL_SILHOUETTE_NAME, width, height));
        }

        self.check_artifact_names(&silhouettes)?;
        Ok(silhouettes)
    }

    /// Reject silhouettes whose artifact would overwrite another output
    fn check_artifact_names(&self, silhouettes: &[Silhouette]) -> Result<()> {
        let quantized = quantized_artifact_name(self.cli.grid_size);
        let mut taken = HashSet::from([CIRCLES_ARTIFACT, PIXELIFY_ARTIFACT, quantized.as_str()]);

        for silhouette in silhouettes {
            if !taken.insert(silhouette.name()) {
                return Err(invalid_parameter(
                    "silhouette",
                    &silhouette.name(),
                    &"artifact name is already used by another output",
                ));
            }
        }

        Ok(())
    }

    // Allow print for user feedback when floopify has nothing to mask with
    #[allow(clippy::print_stderr)]
    fn run_mode(
        &mut self,
        mode: Mode,
        context: &RenderContext,
        silhouettes: &[Silhouette],
    ) -> Result<()> {
        match mode {
            Mode::Circles => {
                let file_name = artifact_file_name(CIRCLES_ARTIFACT);
                self.render_stage(mode.name(), &file_name, |observer| {
                    empty_circles(context, observer)
                })
            }
            Mode::Quantize => {
                let size = self.cli.grid_size;
                self.render_stage(mode.name(), &quantized_file_name(size), |observer| {
                    quantize(context, size, observer)
                })
            }
            Mode::Pixelify => {
                let file_name = artifact_file_name(PIXELIFY_ARTIFACT);
                self.render_stage(mode.name(), &file_name, |observer| {
                    Ok(pixelify(context, observer))
                })
            }
            Mode::Floopify => {
                if silhouettes.is_empty() && !self.cli.quiet {
                    eprintln!(
                        "No silhouettes given (use --silhouette or --full-silhouette), skipping floopify"
                    );
                }
                for silhouette in silhouettes {
                    let file_name = artifact_file_name(silhouette.name());
                    self.render_stage(silhouette.name(), &file_name, |observer| {
                        floopify(context, silhouette, observer)
                    })?;
                }
                Ok(())
            }
        }
    }

    fn render_stage<F>(&mut self, name: &str, file_name: &str, render: F) -> Result<()>
    where
        F: FnOnce(&mut dyn RenderObserver) -> Result<Canvas>,
    {
        let mut noop = NoopObserver;
        let observer: &mut dyn RenderObserver = match self.progress_manager.as_mut() {
            Some(pm) => {
                pm.start_stage(name);
                pm
            }
            None => &mut noop,
        };

        let canvas = render(observer)?;
        let output_path = self.cli.output_dir.join(file_name);
        export_canvas(&canvas, &output_path)?;
        self.written.push(output_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_stage(name);
        }

        Ok(())
    }
}
