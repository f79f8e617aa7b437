//! This crate simulates a single-tape, two-symbol Turing machine whose
//! infinite tape is a pair of fixed-width integers acting as binary stacks.
//! It includes modules for encoding tape contents, stepping the finite-state
//! control, analyzing state tables before a run, and a small catalogue of
//! predefined machines.

pub mod analyzer;
pub mod encoder;
pub mod machine;
pub mod programs;
pub mod types;

/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the tape encoding functions from the encoder module.
pub use encoder::{decode_to_string, encode_input};
/// Re-exports the snapshot value and run iterator from the machine module.
pub use machine::{Machine, Run, Step};
/// Re-exports `ProgramInfo` and the predefined `PROGRAMS` from the programs module.
pub use programs::{ProgramInfo, PROGRAMS};
/// Re-exports the core value types and constants from the types module.
pub use types::{
    Command, ControlState, Direction, MachineError, StateId, Symbol, MAX_LENGTH, MAX_VAL,
};
