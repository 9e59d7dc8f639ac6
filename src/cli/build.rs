//! Build command implementation.
//!
//! Loads puzzle files, maps their clues and writes one output file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::discovery::{discover_puzzles, load_puzzle};
use crate::error::{AscrossError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{dump_grid, render_a4, render_a5_two, svg_grid, to_json, PageOptions, SvgOptions};
use crate::types::Puzzle;

/// Render puzzles to HTML pages, SVG or JSON
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Puzzle files or directories to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "a4")]
    pub format: OutputFormat,

    /// Number the pages starting at the given number
    #[arg(long)]
    pub page_num: Option<u32>,

    /// Output the solution (fill in the boxes)
    #[arg(long)]
    pub solution: bool,

    /// Output file (default: out.html, out.svg or out.json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print each grid as a text table
    #[arg(long, short = 'D')]
    pub debug: bool,
}

/// Output format for `build`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One A4 page per puzzle
    A4,
    /// Two facing A5 pages per puzzle
    #[value(name = "a5two")]
    A5Two,
    /// Standalone SVG of a single grid
    Svg,
    /// Grid and clue data as JSON
    Json,
}

impl OutputFormat {
    /// Output file used when none is given.
    pub fn default_output(self) -> &'static str {
        match self {
            OutputFormat::A4 | OutputFormat::A5Two => "out.html",
            OutputFormat::Svg => "out.svg",
            OutputFormat::Json => "out.json",
        }
    }

    /// Printed pages per puzzle; zero for formats without pages.
    pub fn pages_per_puzzle(self) -> usize {
        match self {
            OutputFormat::A4 => 1,
            OutputFormat::A5Two => 2,
            OutputFormat::Svg | OutputFormat::Json => 0,
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let paths = discover_puzzles(&args.files)?;

    let mut puzzles = Vec::with_capacity(paths.len());
    for path in &paths {
        printer.status("Loading", &display_path(path));
        let loaded = load_puzzle(path)?;
        if args.debug {
            print!("{}", dump_grid(&loaded.puzzle.grid));
        }
        puzzles.push(loaded.puzzle);
    }

    let content = render(&puzzles, &args)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(args.format.default_output()));
    write_output(&output, &content)?;

    printer.status(
        "Finished",
        &format!(
            "{} -> {}",
            plural(puzzles.len(), "puzzle", "puzzles"),
            display_path(&output)
        ),
    );

    Ok(())
}

fn render(puzzles: &[Puzzle], args: &BuildArgs) -> Result<String> {
    let options = PageOptions {
        first_page: args.page_num,
        with_solution: args.solution,
    };

    let page_count = puzzles.len().saturating_mul(args.format.pages_per_puzzle());
    if !options.numbers_fit(page_count) {
        return Err(AscrossError::Build {
            message: format!(
                "Page numbers starting at {} overflow for {} pages",
                args.page_num.unwrap_or_default(),
                page_count
            ),
            help: Some(format!(
                "Use a --page-num of at most {}",
                u32::MAX.saturating_sub(u32::try_from(page_count - 1).unwrap_or(u32::MAX))
            )),
        });
    }

    match args.format {
        OutputFormat::A4 => Ok(render_a4(puzzles, &options)),
        OutputFormat::A5Two => Ok(render_a5_two(puzzles, &options)),
        OutputFormat::Json => to_json(puzzles),
        OutputFormat::Svg => match puzzles {
            [puzzle] => Ok(svg_grid(
                &puzzle.grid,
                SvgOptions {
                    with_solution: args.solution,
                    standalone: true,
                },
            )),
            _ => Err(AscrossError::Build {
                message: format!("SVG output takes one puzzle, got {}", puzzles.len()),
                help: Some("Render one puzzle at a time, or use an HTML format".to_string()),
            }),
        },
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AscrossError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, content).map_err(|e| AscrossError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PUZZLE: &str = r#"title: Build test
grid: |
  AbC
  d#e
  Fgh
clues_horizontal: |
  a:Top
  f:Bottom
clues_vertical: |
  ad:Left
  ce:Right
"#;

    fn args(files: Vec<PathBuf>, format: OutputFormat, output: PathBuf) -> BuildArgs {
        BuildArgs {
            files,
            format,
            page_num: None,
            solution: false,
            output: Some(output),
            debug: false,
        }
    }

    #[test]
    fn test_build_a4() {
        let dir = tempdir().unwrap();
        let puzzle_path = dir.path().join("test.puzzle.yaml");
        let output = dir.path().join("out/page.html");
        fs::write(&puzzle_path, PUZZLE).unwrap();

        run(args(vec![puzzle_path], OutputFormat::A4, output.clone()), &Printer::plain()).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<h1>Build test</h1>"));
        assert!(html.contains("<li value=\"1\">Left (3)</li>"));
        assert!(html.contains("<li value=\"2\">Right (3)</li>"));
    }

    #[test]
    fn test_build_directory_a5two_with_page_numbers() {
        let dir = tempdir().unwrap();
        let puzzles = dir.path().join("puzzles");
        fs::create_dir_all(&puzzles).unwrap();
        fs::write(puzzles.join("one.puzzle.yaml"), PUZZLE).unwrap();
        fs::write(puzzles.join("two.puzzle.yaml"), PUZZLE).unwrap();
        let output = dir.path().join("book.html");

        let mut build = args(vec![puzzles], OutputFormat::A5Two, output.clone());
        build.page_num = Some(2);
        run(build, &Printer::plain()).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert_eq!(html.matches("<section").count(), 4);
        assert!(html.contains("<div class=\"footer odd\">5</div>"));
    }

    #[test]
    fn test_build_rejects_overflowing_page_numbers() {
        let dir = tempdir().unwrap();
        let puzzle_path = dir.path().join("test.puzzle.yaml");
        let output = dir.path().join("book.html");
        fs::write(&puzzle_path, PUZZLE).unwrap();

        let mut build = args(vec![puzzle_path], OutputFormat::A5Two, output.clone());
        build.page_num = Some(u32::MAX);
        let err = run(build, &Printer::plain()).unwrap_err();

        assert!(matches!(err, AscrossError::Build { .. }));
        assert!(err.to_string().contains("overflow for 2 pages"));
        assert!(!output.exists());
    }

    #[test]
    fn test_build_svg_with_solution() {
        let dir = tempdir().unwrap();
        let puzzle_path = dir.path().join("test.puzzle.yaml");
        let output = dir.path().join("grid.svg");
        fs::write(&puzzle_path, PUZZLE).unwrap();

        let mut build = args(vec![puzzle_path], OutputFormat::Svg, output.clone());
        build.solution = true;
        run(build, &Printer::plain()).unwrap();

        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(">H</text>"));
    }

    #[test]
    fn test_build_svg_rejects_multiple_puzzles() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.puzzle.yaml");
        let b = dir.path().join("b.puzzle.yaml");
        fs::write(&a, PUZZLE).unwrap();
        fs::write(&b, PUZZLE).unwrap();
        let output = dir.path().join("grid.svg");

        let result = run(args(vec![a, b], OutputFormat::Svg, output.clone()), &Printer::plain());

        assert!(matches!(result, Err(AscrossError::Build { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_build_json() {
        let dir = tempdir().unwrap();
        let puzzle_path = dir.path().join("test.puzzle.yaml");
        let output = dir.path().join("data.json");
        fs::write(&puzzle_path, PUZZLE).unwrap();

        run(args(vec![puzzle_path], OutputFormat::Json, output.clone()), &Printer::plain()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value[0]["clues_vertical"][1]["text"], "Right (3)");
    }

    #[test]
    fn test_build_fails_on_bad_puzzle() {
        let dir = tempdir().unwrap();
        let puzzle_path = dir.path().join("bad.puzzle.yaml");
        let output = dir.path().join("out.html");
        fs::write(&puzzle_path, "title: Bad\ngrid: AB\nclues_vertical: a:Nope\n").unwrap();

        let result = run(args(vec![puzzle_path], OutputFormat::A4, output.clone()), &Printer::plain());

        assert!(matches!(result, Err(AscrossError::Puzzle { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_default_output_names() {
        assert_eq!(OutputFormat::A4.default_output(), "out.html");
        assert_eq!(OutputFormat::A5Two.default_output(), "out.html");
        assert_eq!(OutputFormat::Svg.default_output(), "out.svg");
        assert_eq!(OutputFormat::Json.default_output(), "out.json");
    }
}
