//! This module defines the core data structures and types used throughout the
//! simulator: tape symbols, head movement, the state table, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of tape bits representable on each side of the head.
///
/// Everything beyond this budget is the implicit infinite field of [`Symbol::Zero`].
/// Callers needing a longer tape must raise this constant; the engine never
/// truncates or wraps around.
pub const MAX_LENGTH: u32 = 40;

/// Capacity threshold for a half-tape: `2^(MAX_LENGTH - 1)`.
///
/// A move that would shift a half-tape at or above this value past its bit
/// budget fails with [`MachineError::TapeBoundExceeded`].
pub const MAX_VAL: u64 = 1u64 << (MAX_LENGTH - 1);

/// A 1-based index into the machine's state table. Index 0 is never valid.
pub type StateId = usize;

/// One of the two symbols a tape cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    /// The blank symbol; the infinite unvisited tape reads as `Zero`.
    Zero,
    One,
}

impl Symbol {
    /// Returns the symbol's value as a tape bit.
    pub fn bit(self) -> u64 {
        match self {
            Symbol::Zero => 0,
            Symbol::One => 1,
        }
    }

    /// Interprets the low bit of a half-tape integer as a symbol.
    pub fn from_bit(bit: u64) -> Self {
        if bit & 1 == 0 {
            Symbol::Zero
        } else {
            Symbol::One
        }
    }
}

/// The possible head movements after a write.
///
/// `Left`/`Right` name the side the head moves toward, not the direction the
/// tape cells shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
    /// Keep the head where it is.
    Neither,
}

/// What a transition state does for one read symbol: write, move, change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The symbol written over the cell under the head.
    pub write: Symbol,
    /// Head movement applied after the write.
    pub direction: Direction,
    /// The state the machine transitions to. Not validated until the next
    /// step resolves it.
    pub next_state: StateId,
}

/// A single entry in the state table.
///
/// Exactly two closed shapes, dispatched by pattern match: a normal state
/// carrying one command per readable symbol, or the terminal accepting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlState {
    /// A normal state with one command per possible read symbol.
    Transition {
        /// Command taken when the head reads [`Symbol::Zero`].
        on_zero: Command,
        /// Command taken when the head reads [`Symbol::One`].
        on_one: Command,
    },
    /// Terminal state; reaching it ends the run.
    Accept,
}

/// Errors produced while constructing or stepping a machine.
///
/// All variants are programmer/configuration errors, fatal to the run in
/// progress; none is a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The input is longer than [`MAX_LENGTH`], or a move would push tape
    /// content past the fixed bit budget on either side.
    #[error("tape bound exceeded: at most {MAX_LENGTH} bits per side")]
    TapeBoundExceeded,
    /// The current state does not index a valid entry in the state table.
    /// Indicates a malformed table, e.g. a `next_state` pointing past the end.
    #[error("invalid state: {0}")]
    InvalidState(StateId),
    /// A state table failed pre-run analysis.
    #[error("program validation error: {0}")]
    Validation(String),
}
