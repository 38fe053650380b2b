#![forbid(unsafe_code)]

//! SVG diagram rendering.
//!
//! Walks a finished piece and places one stitch glyph per non-blank cell
//! at a deterministic coordinate:
//!
//! ```text
//! x = col * 10 - width * 10 + x_offset
//! y = -row * 15 + dy + y_offset
//! ```
//!
//! where `dy` is a small cosmetic nudge on even rows (negative for `Beta`
//! glyphs, positive otherwise) and the stroke style alternates by row
//! parity. Columns are counted in the right-justified grid, so rows grow
//! leftwards as the piece widens.

use tagloom_core::Symbol;
use tagloom_engine::Piece;

/// A4 page wrapper; `{CONTENT}` is replaced by the placed glyphs.
pub const PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg
  xmlns="http://www.w3.org/2000/svg"
  xmlns:xlink="http://www.w3.org/1999/xlink"
  width="210mm" height="297mm" style="overflow:visible">
  {CONTENT}
</svg>"#;

const MAIN_STYLE: &str =
    "opacity:1;fill:none;fill-opacity:1;stroke:#000000;stroke-width:0.8;stroke-opacity:1";
const ALT_STYLE: &str =
    "opacity:1;fill:none;fill-opacity:1;stroke:#a8a8a8;stroke-width:0.8;stroke-opacity:1";

const DOUBLE: &str = r#"
<g id="{ID}"
   transform="translate({POS})">
  <path
     id="{ID}-a"
     d="M 3,7 V 25"
     style="{STYLE}" />
  <path
     id="{ID}-b"
     d="M 0,7 6,7"
     style="{STYLE}" />
  <path
     id="{ID}-c"
     d="M 0.4,11.5 5.6,14.5"
     style="{STYLE}" />
</g>"#;

const SINGLE: &str = r#"
<g id="{ID}" transform="translate({POS})">
    <path
       style="{STYLE}"
       d="M 0,9 6,9"
       id="{ID}-a" />
    <path
       style="{STYLE}"
       d="m 3,6 v 6"
       id="{ID}-b" />
  </g>"#;

const SLIPSTITCH: &str = r#"
<g id="{ID}" transform="translate({POS}) scale(1.5)">
<circle
       style="{STYLE}"
       id="{ID}"
       cx="2"
       cy="6"
       r="0.4" /></g>"#;

const CHAIN: &str = r#"
<g id="{ID}" transform="translate({POS})">
<ellipse
       style="{STYLE}"
       id="{ID}-a"
       cy="-3"
       cx="9"
       rx="1.1874059"
       ry="2.577101"
       transform="rotate(90)" /></g>"#;

const fn fragment(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::Alpha => SINGLE,
        Symbol::Beta => DOUBLE,
        Symbol::Terminator => SLIPSTITCH,
        Symbol::Origin => CHAIN,
    }
}

/// Page placement offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramOptions {
    pub x_offset: f32,
    pub y_offset: f32,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            x_offset: 770.0,
            y_offset: 1080.0,
        }
    }
}

/// One placed glyph: grid position, symbol kind, and page coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Row index in the piece (0 = origin row).
    pub row: usize,
    /// Column index in the right-justified grid.
    pub col: usize,
    pub symbol: Symbol,
    pub x: f32,
    pub y: f32,
    /// Odd rows carry the main (black) stroke, even rows the grey one.
    pub main_stroke: bool,
}

/// SVG diagram builder over a finished piece.
#[derive(Debug, Clone)]
pub struct Diagram<'a> {
    piece: &'a Piece,
    options: DiagramOptions,
}

impl<'a> Diagram<'a> {
    pub fn new(piece: &'a Piece) -> Self {
        Self {
            piece,
            options: DiagramOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DiagramOptions) -> Self {
        self.options = options;
        self
    }

    /// Deterministic placement for every non-blank cell, in row-major
    /// order.
    pub fn placements(&self) -> Vec<Placement> {
        let width = self.piece.width();
        let mut placements = Vec::new();
        for (row_index, row) in self.piece.rows().iter().enumerate() {
            let pad = width.saturating_sub(row.len());
            let main_stroke = row_index % 2 == 1;
            for (cell_index, cell) in row.cells().iter().enumerate() {
                let Some(symbol) = cell.symbol() else {
                    continue;
                };
                let col = pad + cell_index;
                let dy = if main_stroke {
                    0.0
                } else if symbol == Symbol::Beta {
                    -6.5
                } else {
                    6.5
                };
                placements.push(Placement {
                    row: row_index,
                    col,
                    symbol,
                    x: col as f32 * 10.0 - width as f32 * 10.0 + self.options.x_offset,
                    y: row_index as f32 * -15.0 + dy + self.options.y_offset,
                    main_stroke,
                });
            }
        }
        placements
    }

    /// Glyph markup without the page wrapper.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for placement in self.placements() {
            let style = if placement.main_stroke {
                MAIN_STYLE
            } else {
                ALT_STYLE
            };
            let id = format!("{}_{}", placement.col, placement.row);
            let glyph = fragment(placement.symbol)
                .replace("{POS}", &format!("{},{}", placement.x, placement.y))
                .replace("{STYLE}", style)
                .replace("{ID}", &id);
            out.push_str(&glyph);
        }
        out
    }

    /// Full SVG document.
    pub fn render(&self) -> String {
        PAGE.replace("{CONTENT}", &self.content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagloom_core::{Program, Row, Symbol};
    use tagloom_engine::Evolution;

    fn small_piece() -> Piece {
        Evolution::new(Row::repeat(Symbol::Beta, 2), Program::from_ct(";").unwrap())
            .unwrap()
            .run()
    }

    #[test]
    fn placements_cover_every_nonblank_cell() {
        let piece = small_piece();
        let expected: usize = piece
            .rows()
            .iter()
            .map(|row| row.len() - row.blank_count())
            .sum();
        assert_eq!(Diagram::new(&piece).placements().len(), expected);
    }

    #[test]
    fn placement_coordinates_follow_the_grid_formula() {
        let piece = small_piece();
        let options = DiagramOptions::default();
        for p in Diagram::new(&piece).placements() {
            let dy = if p.main_stroke {
                0.0
            } else if p.symbol == Symbol::Beta {
                -6.5
            } else {
                6.5
            };
            assert_eq!(
                p.x,
                p.col as f32 * 10.0 - piece.width() as f32 * 10.0 + options.x_offset
            );
            assert_eq!(p.y, p.row as f32 * -15.0 + dy + options.y_offset);
        }
    }

    #[test]
    fn origin_row_nudges_down_and_greys_out() {
        let piece = small_piece();
        let placements = Diagram::new(&piece).placements();
        let origin = placements.iter().find(|p| p.row == 0).unwrap();
        assert_eq!(origin.symbol, Symbol::Origin);
        assert!(!origin.main_stroke);
        assert_eq!(origin.y, 1086.5);
    }

    #[test]
    fn content_substitutes_ids_styles_and_positions() {
        let piece = small_piece();
        let content = Diagram::new(&piece).content();
        assert!(content.contains("translate("));
        assert!(content.contains("stroke:#000000"));
        assert!(content.contains("stroke:#a8a8a8"));
        assert!(!content.contains("{ID}"));
        assert!(!content.contains("{POS}"));
        assert!(!content.contains("{STYLE}"));
    }

    #[test]
    fn render_wraps_content_in_the_page() {
        let piece = small_piece();
        let document = Diagram::new(&piece).render();
        assert!(document.starts_with("<?xml"));
        assert!(document.contains("<svg"));
        assert!(document.ends_with("</svg>"));
        assert!(!document.contains("{CONTENT}"));
    }

    #[test]
    fn offsets_shift_every_placement() {
        let piece = small_piece();
        let shifted = Diagram::new(&piece).with_options(DiagramOptions {
            x_offset: 0.0,
            y_offset: 0.0,
        });
        let base = Diagram::new(&piece).placements();
        for (a, b) in base.iter().zip(shifted.placements()) {
            assert_eq!(a.x - b.x, 770.0);
            assert_eq!(a.y - b.y, 1080.0);
        }
    }
}
