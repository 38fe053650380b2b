#![forbid(unsafe_code)]

//! Tagloom public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage: build a [`Program`], evolve a
//! base [`Row`] into a [`Piece`], and hand the piece to a renderer.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tagloom_core::alphabet::{Alphabet, Symbol};
pub use tagloom_core::listing::{self, Listing};
pub use tagloom_core::program::{BctError, Instruction, Program, ProgramError};
pub use tagloom_core::row::{Cell, Row, RowParseError};

// --- Engine re-exports -----------------------------------------------------

pub use tagloom_engine::{DEFAULT_STEP_BUDGET, EvolveError, Evolution, Piece};

// --- Render re-exports -----------------------------------------------------

pub use tagloom_render::grid;
pub use tagloom_render::svg::{Diagram, DiagramOptions, Placement};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tagloom apps.
#[derive(Debug)]
pub enum Error {
    /// Malformed row glyph string.
    Row(RowParseError),
    /// Malformed raw-symbol program source.
    Program(ProgramError),
    /// Malformed binary tag source.
    Bct(BctError),
    /// The evolution could not start.
    Evolve(EvolveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(err) => write!(f, "{err}"),
            Self::Program(err) => write!(f, "{err}"),
            Self::Bct(err) => write!(f, "{err}"),
            Self::Evolve(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<RowParseError> for Error {
    fn from(err: RowParseError) -> Self {
        Self::Row(err)
    }
}

impl From<ProgramError> for Error {
    fn from(err: ProgramError) -> Self {
        Self::Program(err)
    }
}

impl From<BctError> for Error {
    fn from(err: BctError) -> Self {
        Self::Bct(err)
    }
}

impl From<EvolveError> for Error {
    fn from(err: EvolveError) -> Self {
        Self::Evolve(err)
    }
}

/// Standard result type for tagloom APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alphabet, Diagram, Error, Evolution, Instruction, Piece, Program, Result, Row, Symbol,
        grid,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_wires_the_whole_pipeline() -> Result<()> {
        let program = Program::from_bct("10 11 0")?;
        let base = Row::parse("++Ŧ", &Alphabet::DEFAULT)?;
        let piece = Evolution::new(base, program)?.run();
        assert!(piece.len() >= 3);
        assert!(!grid::render(&piece, &Alphabet::DEFAULT).is_empty());
        assert!(Diagram::new(&piece).render().contains("<svg"));
        Ok(())
    }
}
