#![forbid(unsafe_code)]

//! Plain-glyph grid rendering.
//!
//! Rows are emitted bottom-up (newest row first), each right-justified to
//! the widest row so the trailing edge lines up — the orientation a piece
//! is worked in. Column widths are measured in display columns so
//! alphabets with wide glyphs still align.

use tagloom_core::Alphabet;
use tagloom_engine::Piece;
use unicode_width::UnicodeWidthStr;

/// Render a piece as a newline-joined glyph grid.
pub fn render(piece: &Piece, alphabet: &Alphabet) -> String {
    let formatted: Vec<String> = piece
        .rows()
        .iter()
        .map(|row| row.format(alphabet))
        .collect();
    let target = formatted
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
        .max(piece.width());

    let mut lines = Vec::with_capacity(formatted.len());
    for line in formatted.iter().rev() {
        let pad = target.saturating_sub(line.width());
        lines.push(format!("{}{line}", " ".repeat(pad)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagloom_core::{Program, Row, Symbol};
    use tagloom_engine::Evolution;

    fn evolve(base: Row, ct: &str) -> Piece {
        Evolution::new(base, Program::from_ct(ct).unwrap())
            .unwrap()
            .run()
    }

    #[test]
    fn rows_are_right_justified_and_bottom_up() {
        let piece = evolve(Row::repeat(Symbol::Beta, 3), ";;;");
        let text = render(&piece, &Alphabet::DEFAULT);
        let lines: Vec<&str> = text.lines().collect();

        // Newest (empty) row first, origin chain last.
        assert_eq!(lines.last().unwrap(), &"ooo");
        assert_eq!(lines.first().unwrap(), &"   ");
        for line in &lines {
            assert_eq!(line.width(), piece.width());
        }
    }

    #[test]
    fn growth_pads_older_rows_on_the_left() {
        let piece = evolve(Row::repeat(Symbol::Beta, 1), "0");
        let text = render(&piece, &Alphabet::DEFAULT);
        let lines: Vec<&str> = text.lines().collect();
        // The base row sits near the bottom, padded out to the widest row.
        let base_line = &lines[lines.len() - 2];
        assert!(base_line.ends_with('Ŧ'));
        assert_eq!(base_line.width(), piece.width());
    }
}
