//! HTML page layouts.
//!
//! Pages are styled with paper-css so they print at the right size. Two
//! layouts exist:
//!
//! - A4: one page per puzzle with title, grid, clues and extra text.
//! - A5 two-page: a facing spread per puzzle, clues on the left (even) page
//!   and the grid on the right (odd) page.

use crate::types::{Clue, Direction, Puzzle};

use super::escape_xml;
use super::svg::{svg_grid, SvgOptions};

/// Options shared by the page layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Number pages starting here. No page numbers when unset.
    pub first_page: Option<u32>,
    /// Fill in the solution.
    pub with_solution: bool,
}

impl PageOptions {
    /// Whether `page_count` pages can be numbered from `first_page`
    /// without running past `u32::MAX`.
    pub fn numbers_fit(&self, page_count: usize) -> bool {
        let Some(first) = self.first_page else {
            return true;
        };
        u32::try_from(page_count.saturating_sub(1))
            .ok()
            .and_then(|last| first.checked_add(last))
            .is_some()
    }

    /// Footer text for the page at `index` (zero-based). Empty when
    /// unnumbered or out of range.
    fn page_number(&self, index: u32) -> String {
        self.first_page
            .and_then(|first| first.checked_add(index))
            .map(|n| n.to_string())
            .unwrap_or_default()
    }

    fn svg(&self) -> SvgOptions {
        SvgOptions {
            with_solution: self.with_solution,
            standalone: false,
        }
    }
}

/// Render puzzles as A4 pages, one page each.
pub fn render_a4(puzzles: &[Puzzle], options: &PageOptions) -> String {
    let mut body = String::new();

    for (i, puzzle) in (0u32..).zip(puzzles) {
        body.push_str(&format!(
            "<section class=\"sheet padding-10mm\">\n\
             <h1>{title}</h1>\n\
             <div class=\"grid-container\">{grid}</div>\n\
             {clues}\
             <div>{extra}</div>\n\
             <div class=\"footer odd\">{page}</div>\n\
             </section>\n",
            title = escape_xml(&puzzle.title),
            grid = svg_grid(&puzzle.grid, options.svg()),
            clues = clue_lists(puzzle),
            extra = puzzle.extra_text,
            page = options.page_number(i),
        ));
    }

    document(puzzles, "A4", &body)
}

/// Render puzzles as A5 facing pages, two pages each.
pub fn render_a5_two(puzzles: &[Puzzle], options: &PageOptions) -> String {
    let mut body = String::new();

    for (i, puzzle) in (0u32..).zip(puzzles) {
        body.push_str(&format!(
            "<section class=\"sheet even\">\n\
             <h1>{title}</h1>\n\
             {clues}\
             <div>{extra}</div>\n\
             <div class=\"footer even\">{even}</div>\n\
             </section>\n\
             <section class=\"sheet odd\">\n\
             <h1>&nbsp;</h1>\n\
             <div class=\"grid-container odd\">{grid}</div>\n\
             <div class=\"footer odd\">{odd}</div>\n\
             </section>\n",
            title = escape_xml(&puzzle.title),
            clues = clue_lists(puzzle),
            extra = puzzle.extra_text,
            even = options.page_number(i.saturating_mul(2)),
            grid = svg_grid(&puzzle.grid, options.svg()),
            odd = options.page_number(i.saturating_mul(2).saturating_add(1)),
        ));
    }

    document(puzzles, "A5", &body)
}

fn clue_lists(puzzle: &Puzzle) -> String {
    Direction::ALL
        .iter()
        .map(|&d| clues_div(puzzle.heading(d), puzzle.clues(d)))
        .collect()
}

/// A heading and an ordered list numbered by starting point.
fn clues_div(heading: &str, clues: &[Clue]) -> String {
    let items: String = clues
        .iter()
        .map(|clue| format!("<li value=\"{}\">{}</li>", clue.number, escape_xml(&clue.text)))
        .collect();
    format!("<div><h2>{}</h2><ol>{items}</ol></div>\n", escape_xml(heading))
}

fn document(puzzles: &[Puzzle], page_size: &str, body: &str) -> String {
    let title = puzzles.first().map(|p| escape_xml(&p.title)).unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <!-- Generated using ascross -->\n\
         <link rel=\"stylesheet\" href=\"https://cdnjs.cloudflare.com/ajax/libs/paper-css/0.3.0/paper.css\">\n\
         <style>\n\
         @page {{ size: {page_size}; }}\n\
         {STYLE}\
         </style>\n\
         </head>\n\
         <body class=\"{page_size}\">\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

const STYLE: &str = "\
.grid { margin: 20px; }
.grid-container { text-align: center; }
li { margin-bottom: 5px; }
body { font-family: serif; }
body.A4 { font-size: 12pt; }
.A4 h1 { font-size: 18pt; }
.A4 h2 { font-size: 16pt; }
body.A5 { font-size: 10pt; }
.A5 h1 { font-size: 16pt; }
.A5 h2 { font-size: 12pt; }
.footer { position: absolute; bottom: 0.5cm; }
.footer.odd { right: 0.8cm; }
.footer.even { left: 0.8cm; }
.sheet.odd { padding: 10mm; padding-left: 20mm; }
.sheet.even { padding: 10mm; padding-right: 20mm; }
.grid-container.odd { padding-left: 5mm; }
";
