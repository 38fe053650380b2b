#![forbid(unsafe_code)]

//! Production symbols and glyph tables.
//!
//! A [`Symbol`] is one of the four production values a row can hold. An
//! [`Alphabet`] is an immutable table mapping each symbol to its display
//! glyph. Alphabets are plain values constructed explicitly and passed to
//! parsing and rendering; there are no process-wide glyph globals, so
//! several alphabets can coexist in one process.

/// One production symbol of the cyclic tag alphabet.
///
/// Only `Alpha` and `Beta` are live content. `Terminator` marks a position
/// absorbed by a terminate instruction, and `Origin` marks the synthetic
/// zeroth row (the foundation chain) and padding around hand-written rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Bit-0 carrier (single crochet).
    Alpha,
    /// Bit-1 carrier (double crochet).
    Beta,
    /// Absorbed/terminated position (slip stitch).
    Terminator,
    /// Origin marker (foundation chain).
    Origin,
}

impl Symbol {
    /// Whether this symbol counts as live content.
    #[inline]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Alpha | Self::Beta)
    }
}

/// Immutable glyph table for one symbol set.
///
/// `pad` is a second reserved padding glyph (the turning-chain mark used
/// when rows are edged by hand); it parses to [`Symbol::Origin`] and is
/// stripped alongside it when computing core content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    pub alpha: char,
    pub beta: char,
    pub terminator: char,
    pub origin: char,
    pub pad: char,
}

impl Alphabet {
    /// The crochet glyph set the pattern language was designed around.
    pub const DEFAULT: Alphabet = Alphabet {
        alpha: '+',
        beta: 'Ŧ',
        terminator: '.',
        origin: 'o',
        pad: '8',
    };

    /// Display glyph for a symbol.
    #[inline]
    pub const fn glyph(&self, symbol: Symbol) -> char {
        match symbol {
            Symbol::Alpha => self.alpha,
            Symbol::Beta => self.beta,
            Symbol::Terminator => self.terminator,
            Symbol::Origin => self.origin,
        }
    }

    /// Symbol for a display glyph, if the glyph belongs to this alphabet.
    ///
    /// Both padding glyphs map to [`Symbol::Origin`].
    pub fn symbol(&self, glyph: char) -> Option<Symbol> {
        if glyph == self.alpha {
            Some(Symbol::Alpha)
        } else if glyph == self.beta {
            Some(Symbol::Beta)
        } else if glyph == self.terminator {
            Some(Symbol::Terminator)
        } else if glyph == self.origin || glyph == self.pad {
            Some(Symbol::Origin)
        } else {
            None
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}
