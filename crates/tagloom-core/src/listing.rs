#![forbid(unsafe_code)]

//! Instruction-listing codec.
//!
//! A listing is the human-facing pattern text: an optional `#` title line,
//! `>` description lines, and numbered rows naming instructions
//! (`std`, `dec-ss`, `inc-sc`, `inc-dc`).
//!
//! Parsing is deliberately lenient: `std` rows (the automatic half of each
//! instruction pair) and any unrecognized name are skipped without error.
//! This is the named-instruction policy, distinct from the strict
//! raw-symbol surface of [`Program::from_ct`]. Do not unify the two.

use crate::program::{Instruction, Program};

/// Stock first-row text used when no base row is given.
pub const DEFAULT_FIRST_ROW: &str =
    "[Any sequence of sc / dc stitched onto an appropriately sized foundation chain.]";

/// Name of the standard (answer) row in listings.
pub const STD: &str = "std";

const VERBOSE_STD: &str =
    "std: work 1 sc into each dc, 1 dc into each sc until end of row; turn.";
const VERBOSE_TERMINATE: &str =
    "dec-ss: 1 ss, then proceed as in the standard row until end of row; turn.";
const VERBOSE_GROW_ALPHA: &str = "inc-sc: prepare to proceed as in the std row, if the first st \
     would be sc, skip this and the following std row. Otherwise, 1st st is dc: proceed as std \
     row until end of row, then inc 1 extra sc into last st; turn.";
const VERBOSE_GROW_BETA: &str = "inc-dc: prepare to proceed as in the std row, if the first st \
     would be sc, skip this and the following std row. Otherwise, 1st st is dc: proceed as std \
     row until end of row, then inc 1 extra dc into last st; turn.";

fn verbose_name(instruction: Instruction) -> &'static str {
    match instruction {
        Instruction::Terminate => VERBOSE_TERMINATE,
        Instruction::GrowAlpha => VERBOSE_GROW_ALPHA,
        Instruction::GrowBeta => VERBOSE_GROW_BETA,
    }
}

/// A parsed instruction listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub title: Option<String>,
    pub description: Vec<String>,
    pub pattern: Vec<Instruction>,
}

impl Listing {
    /// The pattern as a cyclic program.
    pub fn program(&self) -> Program {
        Program::new(self.pattern.iter().copied())
    }
}

/// Parse free-form listing text.
///
/// The first line may be a `# title`; `>` lines are description; every
/// other non-blank line contributes its second whitespace-delimited token
/// as an instruction name. A trailing `:` on the name (verbose listings)
/// is ignored. Unknown names and `std` rows are skipped.
pub fn parse(text: &str) -> Listing {
    let mut listing = Listing::default();
    let mut saw_content = false;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !saw_content && let Some(rest) = line.strip_prefix('#') {
            listing.title = Some(rest.trim().to_string());
            saw_content = true;
            continue;
        }
        saw_content = true;
        if let Some(rest) = line.strip_prefix('>') {
            listing.description.push(rest.trim().to_string());
            continue;
        }
        let Some(name) = line.split_whitespace().nth(1) else {
            continue;
        };
        let name = name.trim_end_matches(':');
        if let Some(instruction) = Instruction::from_name(name) {
            listing.pattern.push(instruction);
        }
    }
    listing
}

/// Render a program as a numbered listing.
///
/// `base_row` is the first-row text ([`DEFAULT_FIRST_ROW`] when `None`);
/// `verbose` substitutes the long-form prose for each instruction name.
pub fn write(
    program: &Program,
    base_row: Option<&str>,
    title: Option<&str>,
    description: Option<&str>,
    verbose: bool,
) -> String {
    let mut lines = vec![format!("# {}", title.unwrap_or("Untitled"))];
    if let Some(description) = description {
        for line in description.lines() {
            lines.push(format!("> {line}"));
        }
    }
    let std_row = if verbose { VERBOSE_STD } else { STD };
    lines.push(format!("1. {}", base_row.unwrap_or(DEFAULT_FIRST_ROW)));
    lines.push(format!("2. {std_row}"));
    for (i, &instruction) in program.as_slice().iter().enumerate() {
        let name = if verbose {
            verbose_name(instruction)
        } else {
            instruction.name()
        };
        lines.push(format!("{}. {name}", 2 * i + 3));
        lines.push(format!("{}. {std_row}", 2 * i + 4));
    }
    lines.push("Repeat from 3.".to_string());
    lines.join("\n")
}
