#![forbid(unsafe_code)]

//! Tagloom binary entry point.
//!
//! Compiles a program from `--ct` or `--bct`, evolves the base row, and
//! prints the requested renderings to stdout.

mod cli;

use std::fmt;
use std::process;

use serde::Serialize;
use tagloom::{Alphabet, Diagram, Error, Evolution, Program, Row, grid, listing};

/// JSON export of an evolved piece.
#[derive(Serialize)]
struct Export {
    title: Option<String>,
    program: String,
    width: usize,
    rows: Vec<String>,
}

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Tagloom(Error),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}"),
            Self::Tagloom(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "JSON export failed: {err}"),
        }
    }
}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        Self::Tagloom(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

fn main() {
    let opts = cli::Opts::parse();
    if let Err(err) = run(&opts) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(opts: &cli::Opts) -> Result<(), CliError> {
    let program = match (&opts.bct, &opts.ct) {
        (Some(bct), None) => Program::from_bct(bct).map_err(Error::from)?,
        (None, Some(ct)) => Program::from_ct(ct).map_err(Error::from)?,
        (None, None) => return Err(CliError::Usage("Provide a program with --ct or --bct.")),
        (Some(_), Some(_)) => {
            return Err(CliError::Usage("Provide only one of --ct and --bct."));
        }
    };

    if opts.listing {
        let text = listing::write(
            &program,
            opts.input.as_deref(),
            opts.title.as_deref(),
            opts.describe.as_deref(),
            opts.verbose,
        );
        println!("{text}");
    }

    let wants_piece = opts.grid || opts.svg || opts.json || !opts.wants_output();
    if !wants_piece {
        return Ok(());
    }

    let alphabet = Alphabet::DEFAULT;
    let input = opts
        .input
        .as_deref()
        .ok_or(CliError::Usage("Provide a base row with --input."))?;
    let base = Row::parse(input, &alphabet).map_err(Error::from)?;
    let piece = Evolution::new(base, program.clone())
        .map_err(Error::from)?
        .with_step_budget(opts.budget)
        .run();

    if opts.grid || !opts.wants_output() {
        println!("{}", grid::render(&piece, &alphabet));
    }
    if opts.svg {
        println!("{}", Diagram::new(&piece).render());
    }
    if opts.json {
        let export = Export {
            title: opts.title.clone(),
            program: program.to_string(),
            width: piece.width(),
            rows: piece
                .rows()
                .iter()
                .map(|row| row.format(&alphabet))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_requires_a_program_source() {
        let err = run(&cli::Opts::default()).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn run_rejects_two_program_sources() {
        let opts = cli::Opts {
            ct: Some(";".to_string()),
            bct: Some("0".to_string()),
            ..cli::Opts::default()
        };
        assert!(matches!(run(&opts).unwrap_err(), CliError::Usage(_)));
    }

    #[test]
    fn listing_only_runs_without_a_base_row() {
        let opts = cli::Opts {
            ct: Some("0;".to_string()),
            listing: true,
            ..cli::Opts::default()
        };
        assert!(run(&opts).is_ok());
    }

    #[test]
    fn grid_needs_an_input_row() {
        let opts = cli::Opts {
            ct: Some("0;".to_string()),
            grid: true,
            ..cli::Opts::default()
        };
        assert!(matches!(run(&opts).unwrap_err(), CliError::Usage(_)));
    }

    #[test]
    fn full_pipeline_renders_json() {
        let opts = cli::Opts {
            bct: Some("10 11 0".to_string()),
            input: Some("++Ŧ".to_string()),
            json: true,
            budget: 16,
            ..cli::Opts::default()
        };
        assert!(run(&opts).is_ok());
    }
}
