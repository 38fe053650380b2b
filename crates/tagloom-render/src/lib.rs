#![forbid(unsafe_code)]

//! Renderer adapters for evolved pieces.
//!
//! Both renderers consume a finished [`tagloom_engine::Piece`] read-only:
//! [`grid`] builds a right-justified plain-glyph text grid, [`svg`] a
//! vector diagram placing one stitch glyph per live cell.

pub mod grid;
pub mod svg;

pub use svg::{Diagram, DiagramOptions, Placement};
