//! SVG grid drawing.
//!
//! Each cell is a 20x20 square in the SVG's coordinate system. The final
//! size is left to the embedding page (or the viewer, for standalone files).

use crate::types::{Cell, CellKind, Grid};

use super::escape_xml;

/// Side of one cell in SVG units.
pub const CELL_SIDE: usize = 20;

/// Printed width of one cell when embedded in a page.
const CELL_WIDTH_CM: f64 = 0.9;

/// Options for drawing a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvgOptions {
    /// Fill the letter squares with their solution.
    pub with_solution: bool,
    /// Emit a standalone SVG file instead of an inline element.
    pub standalone: bool,
}

/// Draw the grid as SVG.
pub fn svg_grid(grid: &Grid, options: SvgOptions) -> String {
    let mut svg = String::new();

    if options.standalone {
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    } else {
        svg.push_str(&format!(
            "<style>.grid {{ width: {:.1}cm; }}</style>",
            grid.width() as f64 * CELL_WIDTH_CM
        ));
    }

    svg.push_str(&format!(
        "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\" class=\"grid\">\n",
        CELL_SIDE * grid.width(),
        CELL_SIDE * grid.height()
    ));
    svg.push_str(&defs());

    for (pos, cell) in grid.iter_cells() {
        let x = pos.col * CELL_SIDE;
        let y = pos.row * CELL_SIDE;

        match cell.kind {
            CellKind::Outside => continue,
            CellKind::Blocked => {
                svg.push_str(&format!("<use href=\"#blocked\" x=\"{x}\" y=\"{y}\" />\n"));
            }
            CellKind::Letter { solution, number } => {
                svg.push_str(&format!("<use href=\"#letter\" x=\"{x}\" y=\"{y}\" />\n"));
                if options.with_solution {
                    svg.push_str(&format!(
                        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"16\" font-family=\"sans-serif\" fill=\"#000000\">{}</text>\n",
                        x + CELL_SIDE / 2,
                        y + 16,
                        escape_xml(&solution.to_string())
                    ));
                }
                if let Some(n) = number {
                    svg.push_str(&format!(
                        "<text x=\"{}\" y=\"{}\" font-size=\"5\" font-family=\"sans-serif\" fill=\"#000000\">{n}</text>\n",
                        x as f64 + 1.5,
                        y as f64 + 5.5
                    ));
                }
            }
        }

        decorations(&mut svg, cell, x, y);
    }

    svg.push_str("</svg>");
    svg
}

fn defs() -> String {
    format!(
        "<defs>\n\
         <rect id=\"blocked\" width=\"{s}\" height=\"{s}\" stroke-width=\"0.5\" stroke=\"#000000\" fill=\"#000000\" />\n\
         <rect id=\"letter\" width=\"{s}\" height=\"{s}\" stroke-width=\"0.5\" stroke=\"#000000\" fill=\"#ffffff\" />\n\
         <path id=\"arrow-down\" d=\"M 7 16 L 13 16 L 10 19 Z\" fill=\"#000000\" />\n\
         <path id=\"arrow-right\" d=\"M 16 7 L 16 13 L 19 10 Z\" fill=\"#000000\" />\n\
         </defs>\n",
        s = CELL_SIDE
    )
}

/// Walls as thick edge lines, arrows as small triangles.
fn decorations(svg: &mut String, cell: &Cell, x: usize, y: usize) {
    if cell.wall_right {
        svg.push_str(&format!(
            "<line x1=\"{x2}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"#000000\" stroke-width=\"2\" />\n",
            x2 = x + CELL_SIDE,
            y2 = y + CELL_SIDE
        ));
    }
    if cell.wall_bottom {
        svg.push_str(&format!(
            "<line x1=\"{x}\" y1=\"{y2}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"#000000\" stroke-width=\"2\" />\n",
            x2 = x + CELL_SIDE,
            y2 = y + CELL_SIDE
        ));
    }
    if cell.arrow_down {
        svg.push_str(&format!("<use href=\"#arrow-down\" x=\"{x}\" y=\"{y}\" />\n"));
    }
    if cell.arrow_right {
        svg.push_str(&format!("<use href=\"#arrow-right\" x=\"{x}\" y=\"{y}\" />\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_grid, Grammar};

    fn grid(source: &str) -> Grid {
        parse_grid(source, Grammar::Extended).unwrap()
    }

    #[test]
    fn test_svg_viewbox_matches_grid() {
        let svg = svg_grid(&grid("Abc\nd#e"), SvgOptions::default());

        assert!(svg.contains("viewBox=\"0 0 60 40\""));
        assert!(svg.starts_with("<style>.grid { width: 2.7cm; }</style>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_svg_standalone_header() {
        let svg = svg_grid(
            &grid("Ab"),
            SvgOptions {
                standalone: true,
                ..SvgOptions::default()
            },
        );

        assert!(svg.starts_with("<?xml"));
        assert!(!svg.contains("<style>"));
    }

    #[test]
    fn test_svg_cells() {
        let svg = svg_grid(&grid("A#\n b"), SvgOptions::default());

        assert_eq!(svg.matches("<use href=\"#letter\"").count(), 2);
        assert_eq!(svg.matches("<use href=\"#blocked\"").count(), 1);
        assert!(svg.contains("<use href=\"#letter\" x=\"20\" y=\"20\" />"));
        assert!(svg.contains(">1</text>"));
    }

    #[test]
    fn test_svg_solution_overlay() {
        let without = svg_grid(&grid("Ab"), SvgOptions::default());
        let with = svg_grid(
            &grid("Ab"),
            SvgOptions {
                with_solution: true,
                ..SvgOptions::default()
            },
        );

        assert!(!without.contains(">B</text>"));
        assert!(with.contains(">B</text>"));
        assert!(with.contains("x=\"30\" y=\"16\""));
    }

    #[test]
    fn test_svg_walls_and_arrows() {
        let svg = svg_grid(&grid("A|b)\nc-d("), SvgOptions::default());

        assert!(svg.contains("<line x1=\"20\" y1=\"0\" x2=\"20\" y2=\"20\""));
        assert!(svg.contains("<line x1=\"0\" y1=\"40\" x2=\"20\" y2=\"40\""));
        assert!(svg.contains("<use href=\"#arrow-down\" x=\"20\" y=\"0\" />"));
        assert!(svg.contains("<use href=\"#arrow-right\" x=\"20\" y=\"20\" />"));
    }
}
