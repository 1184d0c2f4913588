//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use endlessgrid::GridError;
    use endlessgrid::io::cli::{Cli, GridProcessor};
    use endlessgrid::io::configuration::DEFAULT_CELL_SIZE;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn processor_for(path: &Path, flags: &[&str]) -> GridProcessor {
        let mut args = vec!["endlessgrid"];
        args.extend_from_slice(flags);
        let path = path.to_string_lossy().into_owned();
        args.push(&path);
        GridProcessor::new(Cli::parse_from(args))
    }

    fn run(processor: &GridProcessor) -> String {
        let mut out = Vec::new();
        processor.process(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // Tests CLI parsing with only required input argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["endlessgrid", "grid.txt"]);

        assert_eq!(cli.input, PathBuf::from("grid.txt"));
        assert_eq!(cli.empty, ' ');
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.upside_down && !cli.reversed && !cli.stats && !cli.png && !cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "endlessgrid",
            "--upside-down",
            "--reversed",
            "--empty",
            ".",
            "--stats",
            "--png",
            "--cell-size",
            "8",
            "-vv",
            "--quiet",
            "input.txt",
        ]);

        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert!(cli.upside_down && cli.reversed && cli.stats && cli.png && cli.quiet);
        assert_eq!(cli.empty, '.');
        assert_eq!(cli.cell_size, 8);
        assert_eq!(cli.verbose, 2);

        let opts = cli.text_options();
        assert_eq!(opts.default_value, ".");
        assert!(opts.upside_down && opts.reversed);
    }

    // Tests output path generation with suffix and extension
    // Verified by changing suffix format
    #[test]
    fn test_get_output_path() {
        assert_eq!(
            GridProcessor::get_output_path(Path::new("puzzles/day10.txt")),
            PathBuf::from("puzzles/day10_grid.png")
        );
        assert_eq!(
            GridProcessor::get_output_path(Path::new("maze")),
            PathBuf::from("maze_grid.png")
        );
    }

    // Tests blanks become absent cells while the bounding box keeps its size
    #[test]
    fn test_load_clears_blanks() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("grid.txt");
        fs::write(&input, "ab\n c\n").unwrap();

        let grid = processor_for(&input, &[]).load().unwrap();
        assert_eq!(grid.count(), 3);
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert!(!grid.has(0, -1));
    }

    // Tests printing, placeholder and stats output
    // Verified by printing stats before the grid
    #[test]
    fn test_process_text_and_stats() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("grid.txt");
        fs::write(&input, "ab\n c\n").unwrap();

        let text = run(&processor_for(&input, &["-e", ".", "--stats"]));
        assert_eq!(text, "ab\n.c\nwidth: 2\nheight: 2\ncount: 3\n");

        let flipped = run(&processor_for(&input, &["-u", "-r", "-e", "."]));
        assert_eq!(flipped, "c.\nba\n");

        let quiet = run(&processor_for(&input, &["-q"]));
        assert_eq!(quiet, "");
    }

    // Tests --png writes the image next to the input
    #[test]
    fn test_process_exports_png() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("maze.txt");
        fs::write(&input, "#.\n.#\n").unwrap();

        run(&processor_for(&input, &["--png", "--quiet", "-c", "2"]));

        let output = dir.path().join("maze_grid.png");
        let image = image::open(&output).unwrap();
        assert_eq!((image.width(), image.height()), (5, 5));
    }

    #[test]
    fn test_process_missing_input() {
        let dir = TempDir::new().unwrap();
        let processor = processor_for(&dir.path().join("missing.txt"), &[]);

        let mut out = Vec::new();
        let result = processor.process(&mut out);
        assert!(matches!(
            result,
            Err(GridError::FileSystem {
                operation: "read input",
                ..
            })
        ));
        assert!(out.is_empty());
    }
}
