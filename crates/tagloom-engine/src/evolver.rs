#![forbid(unsafe_code)]

//! The row-evolution state machine.
//!
//! An [`Evolution`] owns a base row and a cyclic [`Program`] and produces a
//! [`Piece`]: the ordered history of every row derived while applying the
//! program one instruction per step.
//!
//! # Invariants
//!
//! 1. A piece always begins with the 3-row prefix
//!    `[origin, base, standardize(base)]`.
//! 2. After the prefix, rows are appended in pairs: the instruction's
//!    output row, then its standard transform. `(len - 3)` is always even.
//! 3. A step whose rewrite leaves the core-content *length* unchanged
//!    appends nothing (the no-op guard). The guard compares lengths, not
//!    contents; rows that differ but share a core length are suppressed
//!    too. That coarseness is part of the observable contract.
//! 4. `width` is the running maximum row length and never decreases. It
//!    only feeds right-justified rendering.
//!
//! The loop runs until the step budget is exhausted or the last row's core
//! content is empty. Both are normal termination: the underlying rewriting
//! system is Turing-complete, so the engine makes no attempt at general
//! halting detection beyond its bounded budget.

use tagloom_core::program::{Instruction, Program};
use tagloom_core::row::{Cell, Row};
use tagloom_core::Symbol;

/// Default maximum number of evolution steps.
pub const DEFAULT_STEP_BUDGET: usize = 250;

/// The ordered history of rows produced by one evolution.
///
/// Append-only while the evolution runs, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    rows: Vec<Row>,
    width: usize,
}

impl Piece {
    /// All rows, oldest first (origin row at index 0).
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A piece always contains at least its 3-row prefix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Running maximum row length, for right-justified rendering.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    fn last(&self) -> &Row {
        self.rows.last().expect("piece holds its 3-row prefix")
    }
}

/// The evolution could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolveError {
    /// Cyclic selection over zero instructions is undefined; an empty
    /// program is rejected before the loop.
    EmptyProgram,
}

impl std::fmt::Display for EvolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProgram => write!(f, "cannot evolve an empty program"),
        }
    }
}

impl std::error::Error for EvolveError {}

/// A configured, not-yet-run evolution.
///
/// `run` consumes the evolution, so each piece is produced exactly once;
/// re-running requires constructing a fresh `Evolution` and is guaranteed
/// to yield an identical piece for identical inputs.
#[derive(Debug, Clone)]
pub struct Evolution {
    piece: Piece,
    pattern: Program,
    step_budget: usize,
}

impl Evolution {
    /// Set up an evolution of `base` under `pattern`.
    ///
    /// Seeds the piece with the 3-row prefix: a synthetic origin row of
    /// the base row's length, the base row, and its standard transform.
    pub fn new(base: Row, pattern: Program) -> Result<Self, EvolveError> {
        if pattern.is_empty() {
            return Err(EvolveError::EmptyProgram);
        }
        let width = base.len();
        let origin = Row::repeat(Symbol::Origin, base.len());
        let standardized = base.standardize();
        Ok(Self {
            piece: Piece {
                rows: vec![origin, base, standardized],
                width,
            },
            pattern,
            step_budget: DEFAULT_STEP_BUDGET,
        })
    }

    /// Override the step budget. A budget of zero is a valid no-op: the
    /// resulting piece is exactly the 3-row prefix.
    #[must_use]
    pub fn with_step_budget(mut self, step_budget: usize) -> Self {
        self.step_budget = step_budget;
        self
    }

    /// Run the evolution to termination and hand over the piece.
    ///
    /// Terminates when the step budget is reached or when the last row's
    /// core content becomes empty (all live symbols consumed).
    pub fn run(mut self) -> Piece {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "evolve",
            budget = self.step_budget,
            pattern_len = self.pattern.len(),
            base_len = self.piece.last().len()
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let mut step = 0;
        while step < self.step_budget && !self.piece.last().core().is_empty() {
            let instruction = self.pattern.cycle(step);
            let last = self.piece.last();
            let candidate = apply(instruction, last);

            // The no-op guard compares core-content lengths only.
            let new_len = candidate.standardize().core().len();
            let old_len = last.core().len();
            if new_len == old_len {
                #[cfg(feature = "tracing")]
                tracing::trace!(step, instruction = ?instruction, "no-op suppressed");
                step += 1;
                continue;
            }

            let standardized = candidate.standardize();
            self.piece.width = self.piece.width.max(candidate.len());
            self.piece.rows.push(candidate);
            self.piece.rows.push(standardized);
            #[cfg(feature = "tracing")]
            tracing::trace!(step, instruction = ?instruction, rows = self.piece.len(), "rows appended");
            step += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(steps = step, rows = self.piece.len(), "evolution finished");
        self.piece
    }
}

/// Apply one instruction's rewrite rule, producing the candidate next row.
fn apply(instruction: Instruction, row: &Row) -> Row {
    match instruction {
        Instruction::Terminate => terminate(row),
        Instruction::GrowAlpha => grow(row, Symbol::Alpha),
        Instruction::GrowBeta => grow(row, Symbol::Beta),
    }
}

/// Drop the trailing symbol of the trimmed row, standardize the remainder,
/// append a terminator, then restore as many blanks as the input carried.
fn terminate(row: &Row) -> Row {
    let trimmed = row.trim();
    let kept = trimmed.len().saturating_sub(1);
    let head = Row::from_cells(trimmed.cells()[..kept].to_vec()).standardize();
    let mut cells = head.cells().to_vec();
    cells.push(Cell::Sym(Symbol::Terminator));
    cells.extend(std::iter::repeat_n(Cell::Blank, row.blank_count()));
    Row::from_cells(cells)
}

/// Prepend `symbol` to the standardized row when the trailing symbol of
/// the input is `Alpha`; otherwise standardize unchanged.
fn grow(row: &Row, symbol: Symbol) -> Row {
    let standardized = row.standardize();
    if row.last_symbol() == Some(Symbol::Alpha) {
        let mut cells = Vec::with_capacity(standardized.len() + 1);
        cells.push(Cell::Sym(symbol));
        cells.extend_from_slice(standardized.cells());
        Row::from_cells(cells)
    } else {
        standardized
    }
}
