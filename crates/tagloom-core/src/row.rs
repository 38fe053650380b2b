#![forbid(unsafe_code)]

//! Row storage and the standardize/core transforms.
//!
//! A [`Row`] is one snapshot of the evolving symbol sequence: an ordered
//! run of cells, each either a production [`Symbol`] or a blank used purely
//! for visual alignment.
//!
//! # Invariants
//!
//! 1. `standardize` is a pure per-cell map; it never changes row length.
//! 2. `standardize` is an involution on rows without terminators; erasing
//!    a terminator to a blank is lossy and breaks exact involution.
//! 3. `core` strips padding symbols and leading/trailing blanks only.
//!    Interior blanks and terminators are part of core content and count
//!    toward its length.

use crate::alphabet::{Alphabet, Symbol};

/// One position of a row: a production symbol or an alignment blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Sym(Symbol),
    Blank,
}

impl Cell {
    /// The production symbol at this cell, if it is not a blank.
    #[inline]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Sym(sym) => Some(sym),
            Self::Blank => None,
        }
    }

    #[inline]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// An ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

/// Failed to read a row from a glyph string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowParseError {
    /// A character that is neither a blank nor a glyph of the alphabet.
    UnknownGlyph { position: usize, found: char },
}

impl std::fmt::Display for RowParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGlyph { position, found } => {
                write!(f, "unknown row glyph {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for RowParseError {}

impl Row {
    /// Empty row.
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Row of `count` copies of one symbol.
    pub fn repeat(symbol: Symbol, count: usize) -> Self {
        Self {
            cells: vec![Cell::Sym(symbol); count],
        }
    }

    /// Row from a sequence of symbols, no blanks.
    pub fn of_symbols(symbols: &[Symbol]) -> Self {
        Self {
            cells: symbols.iter().map(|&s| Cell::Sym(s)).collect(),
        }
    }

    /// Read a row from a glyph string. ASCII spaces become blanks; every
    /// other character must be a glyph of `alphabet`.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, RowParseError> {
        let mut cells = Vec::with_capacity(text.chars().count());
        for (position, ch) in text.chars().enumerate() {
            if ch == ' ' {
                cells.push(Cell::Blank);
            } else if let Some(sym) = alphabet.symbol(ch) {
                cells.push(Cell::Sym(sym));
            } else {
                return Err(RowParseError::UnknownGlyph {
                    position,
                    found: ch,
                });
            }
        }
        Ok(Self { cells })
    }

    /// Render the row as a glyph string.
    pub fn format(&self, alphabet: &Alphabet) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Sym(sym) => alphabet.glyph(*sym),
                Cell::Blank => ' ',
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        self.cells.as_slice()
    }

    /// Number of live (`Alpha`/`Beta`) cells.
    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.symbol().is_some_and(Symbol::is_live))
            .count()
    }

    /// Number of blank cells anywhere in the row.
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_blank()).count()
    }

    /// Symbol of the last non-blank cell, if any.
    pub fn last_symbol(&self) -> Option<Symbol> {
        self.cells.iter().rev().find_map(|cell| cell.symbol())
    }

    /// The standard transform: swap `Alpha` and `Beta`, erase `Terminator`
    /// to a blank, leave everything else untouched.
    ///
    /// A direct per-element map; there is no intermediate placeholder value
    /// and therefore no chained-overwrite hazard.
    pub fn standardize(&self) -> Row {
        let cells = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Sym(Symbol::Alpha) => Cell::Sym(Symbol::Beta),
                Cell::Sym(Symbol::Beta) => Cell::Sym(Symbol::Alpha),
                Cell::Sym(Symbol::Terminator) => Cell::Blank,
                other => *other,
            })
            .collect();
        Row { cells }
    }

    /// Copy of the row with leading and trailing blanks removed.
    pub fn trim(&self) -> Row {
        let start = self
            .cells
            .iter()
            .position(|cell| !cell.is_blank())
            .unwrap_or(self.cells.len());
        let end = self
            .cells
            .iter()
            .rposition(|cell| !cell.is_blank())
            .map_or(start, |i| i + 1);
        Row {
            cells: self.cells[start..end].to_vec(),
        }
    }

    /// Canonical core content: padding (`Origin`) cells removed, then the
    /// result trimmed of leading and trailing blanks. Interior blanks and
    /// terminators remain; the core's *length* is what the evolution
    /// engine's no-op guard compares.
    pub fn core(&self) -> Row {
        let cells: Vec<Cell> = self
            .cells
            .iter()
            .filter(|cell| !matches!(cell, Cell::Sym(Symbol::Origin)))
            .copied()
            .collect();
        Row { cells }.trim()
    }
}
