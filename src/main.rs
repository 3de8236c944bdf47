//! CLI entry point for the palette mosaic renderers

use clap::Parser;
use floopify::io::cli::{Cli, MosaicRunner};

fn main() -> floopify::Result<()> {
    let cli = Cli::parse();
    let mut runner = MosaicRunner::new(cli);
    runner.process()
}
