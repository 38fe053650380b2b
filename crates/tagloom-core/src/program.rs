#![forbid(unsafe_code)]

//! Cyclic tag programs.
//!
//! A [`Program`] is an ordered sequence of [`Instruction`]s applied
//! cyclically, one per evolution step. Two input surfaces build programs
//! and deliberately carry different strictness policies:
//!
//! - [`Program::from_ct`] reads the raw 3-symbol alphabet `{;, 0, 1}` and
//!   fails with a typed error on anything else (strict).
//! - The instruction-listing parser in [`crate::listing`] reads named
//!   instructions and skips names it does not recognize (lenient).
//!
//! The two policies are kept separate on purpose; see the module docs of
//! [`crate::listing`].

use smallvec::SmallVec;

/// One cyclic tag instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `;` — consume the trailing symbol and terminate that position.
    Terminate,
    /// `0` — prepend an `Alpha` when the trailing live symbol is `Alpha`.
    GrowAlpha,
    /// `1` — prepend a `Beta` when the trailing live symbol is `Alpha`.
    GrowBeta,
}

impl Instruction {
    /// Raw single-symbol form.
    #[inline]
    pub const fn raw(self) -> char {
        match self {
            Self::Terminate => ';',
            Self::GrowAlpha => '0',
            Self::GrowBeta => '1',
        }
    }

    /// Parse the raw single-symbol form.
    pub const fn from_raw(symbol: char) -> Option<Self> {
        match symbol {
            ';' => Some(Self::Terminate),
            '0' => Some(Self::GrowAlpha),
            '1' => Some(Self::GrowBeta),
            _ => None,
        }
    }

    /// Listing name of this instruction.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Terminate => "dec-ss",
            Self::GrowAlpha => "inc-sc",
            Self::GrowBeta => "inc-dc",
        }
    }

    /// Parse a listing name. `std` is a listing row, not an instruction,
    /// and is not accepted here.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dec-ss" => Some(Self::Terminate),
            "inc-sc" => Some(Self::GrowAlpha),
            "inc-dc" => Some(Self::GrowBeta),
            _ => None,
        }
    }
}

/// Failed to read a program from the raw 3-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramError {
    /// A character outside `{;, 0, 1}` (whitespace excepted).
    UnknownSymbol { position: usize, found: char },
}

impl std::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { position, found } => {
                write!(f, "unknown instruction symbol {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for ProgramError {}

/// Failed to compile a binary tag source into a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BctError {
    /// A character outside `{0, 1}` (whitespace excepted).
    UnexpectedChar { position: usize, found: char },
}

impl std::fmt::Display for BctError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedChar { position, found } => {
                write!(f, "unexpected character {found:?} at position {position} in binary tag source")
            }
        }
    }
}

impl std::error::Error for BctError {}

/// An ordered, cyclic sequence of instructions.
///
/// Programs are usually short; storage is inline up to 16 instructions.
/// A program may be empty after construction — the evolution engine
/// rejects empty programs before entering its loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    instructions: SmallVec<[Instruction; 16]>,
}

impl Program {
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        Self {
            instructions: instructions.into_iter().collect(),
        }
    }

    /// Parse raw 3-symbol source (`;`, `0`, `1`). Whitespace is skipped;
    /// any other character is an error. This is the strict input surface.
    pub fn from_ct(source: &str) -> Result<Self, ProgramError> {
        let mut instructions = SmallVec::new();
        for (position, ch) in source.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            match Instruction::from_raw(ch) {
                Some(instruction) => instructions.push(instruction),
                None => {
                    return Err(ProgramError::UnknownSymbol {
                        position,
                        found: ch,
                    });
                }
            }
        }
        Ok(Self { instructions })
    }

    /// Compile a binary tag source (`{0, 1}`, blanks ignored) into a
    /// program: `0` emits [`Instruction::Terminate`] and advances one
    /// position; `1` consumes two positions, the second selecting
    /// [`Instruction::GrowAlpha`] (`0`) or [`Instruction::GrowBeta`] (`1`).
    ///
    /// A trailing unpaired `1` truncates the output instead of failing;
    /// callers wanting strict behavior should validate parity first.
    pub fn from_bct(source: &str) -> Result<Self, BctError> {
        let bits: Vec<(usize, char)> = source
            .chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .collect();
        let mut instructions = SmallVec::new();
        let mut i = 0;
        while i < bits.len() {
            match bits[i].1 {
                '0' => {
                    instructions.push(Instruction::Terminate);
                    i += 1;
                }
                '1' => {
                    let Some(&(position, selector)) = bits.get(i + 1) else {
                        break; // unpaired trailing 1: truncate
                    };
                    match selector {
                        '0' => instructions.push(Instruction::GrowAlpha),
                        '1' => instructions.push(Instruction::GrowBeta),
                        found => {
                            return Err(BctError::UnexpectedChar { position, found });
                        }
                    }
                    i += 2;
                }
                found => {
                    return Err(BctError::UnexpectedChar {
                        position: bits[i].0,
                        found,
                    });
                }
            }
        }
        Ok(Self { instructions })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Instruction] {
        self.instructions.as_slice()
    }

    /// Instruction for a given step, selected cyclically.
    ///
    /// # Panics
    ///
    /// Panics if the program is empty.
    #[inline]
    pub fn cycle(&self, step: usize) -> Instruction {
        self.instructions[step % self.instructions.len()]
    }
}

impl std::fmt::Display for Program {
    /// Raw 3-symbol form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{}", instruction.raw())?;
        }
        Ok(())
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter)
    }
}
