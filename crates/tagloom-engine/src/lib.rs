#![forbid(unsafe_code)]

//! Evolution kernel: pieces and the cyclic rewrite loop.

pub mod evolver;

pub use evolver::{DEFAULT_STEP_BUDGET, EvolveError, Evolution, Piece};
