//! CLI entry point for printing and exporting text grids

use clap::Parser;
use endlessgrid::io::cli::{Cli, GridProcessor, init_logging};

fn main() -> endlessgrid::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let processor = GridProcessor::new(cli);
    processor.process(&mut std::io::stdout().lock())
}
