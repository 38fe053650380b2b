#![forbid(unsafe_code)]

//! Command-line argument parsing for the tagloom binary.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via `TAGLOOM_*` prefix.

use std::env;
use std::process;

use tagloom::DEFAULT_STEP_BUDGET;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Tagloom — crochetable cyclic tag patterns

USAGE:
    tagloom [OPTIONS]

PROGRAM SOURCE (exactly one):
    --ct=SRC             Raw cyclic tag source over {;, 0, 1}
    --bct=SRC            Binary tag source over {0, 1} (compiled to CT)

OPTIONS:
    --input=ROW          Base row as a glyph string (+ Ŧ . o)
    --title=TITLE        Listing title
    --describe=TEXT      Listing description
    --budget=N           Evolution step budget (default: 250)
    --grid               Print the evolved piece as a glyph grid (default)
    --svg                Print the evolved piece as an SVG diagram
    --listing            Print the numbered pattern listing
    --verbose            Long-form prose in the listing
    --json               Print the evolved piece as JSON
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    TAGLOOM_INPUT        Override --input
    TAGLOOM_BUDGET       Override --budget";

/// Parsed command-line options.
pub struct Opts {
    /// Raw cyclic tag program source.
    pub ct: Option<String>,
    /// Binary tag program source.
    pub bct: Option<String>,
    /// Base row glyph string.
    pub input: Option<String>,
    /// Listing title.
    pub title: Option<String>,
    /// Listing description.
    pub describe: Option<String>,
    /// Evolution step budget.
    pub budget: usize,
    pub grid: bool,
    pub svg: bool,
    pub listing: bool,
    pub verbose: bool,
    pub json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            ct: None,
            bct: None,
            input: None,
            title: None,
            describe: None,
            budget: DEFAULT_STEP_BUDGET,
            grid: false,
            svg: false,
            listing: false,
            verbose: false,
            json: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("TAGLOOM_INPUT") {
            opts.input = Some(val);
        }
        if let Ok(val) = env::var("TAGLOOM_BUDGET")
            && let Ok(n) = val.parse()
        {
            opts.budget = n;
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("tagloom {VERSION}");
                    process::exit(0);
                }
                "--grid" => opts.grid = true,
                "--svg" => opts.svg = true,
                "--listing" => opts.listing = true,
                "--verbose" => opts.verbose = true,
                "--json" => opts.json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--ct=") {
                        opts.ct = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--bct=") {
                        opts.bct = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--input=") {
                        opts.input = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--title=") {
                        opts.title = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--describe=") {
                        opts.describe = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--budget=") {
                        match val.parse() {
                            Ok(n) => opts.budget = n,
                            Err(_) => {
                                eprintln!("Invalid --budget value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }

    /// Whether any output form was requested explicitly.
    pub fn wants_output(&self) -> bool {
        self.grid || self.svg || self.listing || self.json
    }
}
