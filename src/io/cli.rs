//! Command-line interface for inspecting text grids

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEFAULT_CELL_SIZE, OUTPUT_SUFFIX};
use crate::io::error::{GridError, Result};
use crate::io::image::export_grid_as_png;
use crate::io::parse::char_grid;
use crate::io::text::TextOptions;
use crate::spatial::grid::SparseGrid;

#[derive(Parser, Debug)]
#[command(name = "endlessgrid")]
#[command(
    author,
    version,
    about = "Load a text grid, print it and export it as an image"
)]
/// Command-line arguments for the grid inspector
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Text file holding one grid row per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the lowest row first
    #[arg(short, long)]
    pub upside_down: bool,

    /// Print columns right to left
    #[arg(short, long)]
    pub reversed: bool,

    /// Character printed for blank cells
    #[arg(short, long, default_value_t = ' ')]
    pub empty: char,

    /// Print width, height and populated cell count
    #[arg(short, long)]
    pub stats: bool,

    /// Export a PNG next to the input (<input>_grid.png)
    #[arg(short, long)]
    pub png: bool,

    /// Pixel size of one cell in the exported PNG
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the grid itself
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Text rendering options selected on the command line
    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            default_value: self.empty.to_string(),
            upside_down: self.upside_down,
            reversed: self.reversed,
        }
    }
}

/// Install a stderr `tracing` subscriber filtered by verbosity
///
/// A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads a grid file and produces the requested outputs
pub struct GridProcessor {
    cli: Cli,
}

impl GridProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the input and write the text outputs to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the output cannot be
    /// written, or the PNG export fails
    pub fn process<W: Write>(&self, out: &mut W) -> Result<()> {
        let grid = self.load()?;
        info!(
            path = %self.cli.input.display(),
            width = grid.width(),
            height = grid.height(),
            cells = grid.count(),
            "loaded grid"
        );

        let mut text = String::new();
        if !self.cli.quiet {
            text.push_str(&grid.render_text(&self.cli.text_options()));
        }
        if self.cli.stats {
            text.push_str(&format!(
                "width: {}\nheight: {}\ncount: {}\n",
                grid.width(),
                grid.height(),
                grid.count()
            ));
        }
        out.write_all(text.as_bytes())
            .map_err(|e| GridError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write output",
                source: e,
            })?;

        if self.cli.png {
            let output_path = Self::get_output_path(&self.cli.input);
            export_grid_as_png(&grid, self.cli.cell_size, &output_path)?;
            info!(path = %output_path.display(), "wrote image");
        }

        Ok(())
    }

    /// Read the input file into a grid, blank cells left absent
    ///
    /// Blanks are removed after loading, so the bounding box still spans the
    /// whole text block.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FileSystem`] when the input cannot be read
    pub fn load(&self) -> Result<SparseGrid<char>> {
        let input =
            std::fs::read_to_string(&self.cli.input).map_err(|e| GridError::FileSystem {
                path: self.cli.input.clone(),
                operation: "read input",
                source: e,
            })?;

        let mut grid = char_grid(&input);
        let blanks = grid.filter_index(|cell, _| *cell == ' ', None);
        debug!(blanks = blanks.len(), "clearing blank cells");
        for pos in blanks {
            grid.remove(pos[0], pos[1]);
        }
        Ok(grid)
    }

    /// Image path written by `--png`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
