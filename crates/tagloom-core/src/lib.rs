#![forbid(unsafe_code)]

//! Core primitives for cyclic tag pieces: symbols, rows, and programs.

pub mod alphabet;
pub mod listing;
pub mod program;
pub mod row;

pub use alphabet::{Alphabet, Symbol};
pub use listing::Listing;
pub use program::{BctError, Instruction, Program, ProgramError};
pub use row::{Cell, Row, RowParseError};
