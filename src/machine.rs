//! This module defines the `Machine` snapshot value and the step-transition
//! engine that advances it. A step reads the head bit, writes, moves, and
//! changes state, all through shifts and masks on the two half-tape integers;
//! no tape array exists anywhere.

use std::sync::Arc;

use crate::encoder::{decode_to_string, encode_input};
use crate::types::{ControlState, Direction, MachineError, StateId, Symbol, MAX_VAL};

/// A full simulation snapshot: state table, current state, and the two
/// half-tape integers.
///
/// Snapshots are immutable values; [`Machine::step`] produces a fresh one and
/// never mutates its input. Cloning is cheap: two integers, one index, and a
/// shared reference to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    states: Arc<[ControlState]>,
    current_state: StateId,
    left: u64,
    right: u64,
}

/// The outcome of a single successful step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The machine performed a transition; here is the resulting snapshot.
    Continue(Machine),
    /// The current state resolved to [`ControlState::Accept`]; no further
    /// snapshot exists.
    Halted,
}

impl Machine {
    /// Builds the initial snapshot from a state table and a head-first input
    /// sequence.
    ///
    /// The input is encoded onto the `right` half-tape (its first symbol under
    /// the head), the `left` half-tape starts empty, and the current state is
    /// 1 by convention.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::TapeBoundExceeded`] when the input is longer
    /// than [`MAX_LENGTH`](crate::types::MAX_LENGTH).
    pub fn new(
        states: impl Into<Arc<[ControlState]>>,
        input: &[Symbol],
    ) -> Result<Self, MachineError> {
        let right = encode_input(input)?;

        Ok(Self {
            states: states.into(),
            current_state: 1,
            left: 0,
            right,
        })
    }

    /// Advances the snapshot by exactly one transition.
    ///
    /// Resolves the current state, reads the symbol under the head, applies
    /// the selected command's write, move, and state change, and returns the
    /// resulting snapshot. Returns [`Step::Halted`] when the current state is
    /// [`ControlState::Accept`].
    ///
    /// # Errors
    ///
    /// * [`MachineError::InvalidState`] when the current state does not index
    ///   the table. This is control-state corruption from a malformed table,
    ///   caught lazily on the step that reaches the bad state.
    /// * [`MachineError::TapeBoundExceeded`] when the move would shift a
    ///   half-tape past its bit budget.
    pub fn step(&self) -> Result<Step, MachineError> {
        let control = self
            .current_state
            .checked_sub(1)
            .and_then(|i| self.states.get(i))
            .ok_or(MachineError::InvalidState(self.current_state))?;

        let (on_zero, on_one) = match control {
            ControlState::Accept => return Ok(Step::Halted),
            ControlState::Transition { on_zero, on_one } => (on_zero, on_one),
        };

        let command = match Symbol::from_bit(self.right) {
            Symbol::Zero => on_zero,
            Symbol::One => on_one,
        };

        // Write: set or clear the head bit, leaving higher bits untouched.
        let right = match command.write {
            Symbol::Zero => self.right & !1,
            Symbol::One => self.right | 1,
        };

        let (left, right) = move_head(command.direction, self.left, right)?;

        Ok(Step::Continue(Self {
            states: Arc::clone(&self.states),
            current_state: command.next_state,
            left,
            right,
        }))
    }

    /// Consumes the snapshot and produces the lazy sequence of snapshots
    /// reachable from it.
    ///
    /// The given snapshot is the first yielded element, so callers see the
    /// tape before each transition is applied. The sequence is finite exactly
    /// when the machine reaches [`ControlState::Accept`]; a non-halting
    /// program yields forever and callers must impose their own step cap.
    /// A fatal error is yielded once, after which the iterator fuses.
    pub fn run(self) -> Run {
        Run {
            next: Some(Ok(self)),
        }
    }

    /// Returns the current state identifier.
    pub fn state(&self) -> StateId {
        self.current_state
    }

    /// Returns the half-tape strictly left of the head.
    pub fn left(&self) -> u64 {
        self.left
    }

    /// Returns the half-tape at and right of the head.
    pub fn right(&self) -> u64 {
        self.right
    }

    /// Returns the symbol currently under the head.
    pub fn head(&self) -> Symbol {
        Symbol::from_bit(self.right)
    }

    /// Returns the state table shared by every snapshot of this run.
    pub fn states(&self) -> &[ControlState] {
        &self.states
    }

    /// Counts the `One` cells currently on the tape.
    pub fn ones(&self) -> u32 {
        self.left.count_ones() + self.right.count_ones()
    }

    /// Renders the tape as a fixed-width bit string in true tape order.
    pub fn render(&self) -> String {
        decode_to_string(self.left, self.right)
    }
}

/// Applies a head movement to the half-tape pair.
///
/// Moving left pops the top bit of `left` and pushes it onto `right` as the
/// new head bit; moving right is symmetric. Both check the receiving side's
/// capacity before shifting: a half-tape at or above [`MAX_VAL`] has no room
/// for another bit.
fn move_head(direction: Direction, left: u64, right: u64) -> Result<(u64, u64), MachineError> {
    match direction {
        Direction::Left => {
            if right >= MAX_VAL {
                return Err(MachineError::TapeBoundExceeded);
            }
            Ok((left >> 1, (right << 1) | (left & 1)))
        }
        Direction::Right => {
            if left >= MAX_VAL {
                return Err(MachineError::TapeBoundExceeded);
            }
            Ok(((left << 1) | (right & 1), right >> 1))
        }
        Direction::Neither => Ok((left, right)),
    }
}

/// Lazy, pull-based producer of successive machine snapshots.
///
/// Created by [`Machine::run`]. Each `next()` call performs at most one step;
/// nothing is computed until asked for. Re-running from any saved snapshot
/// yields an equivalent fresh sequence, since snapshots are plain values.
#[derive(Debug)]
pub struct Run {
    next: Option<Result<Machine, MachineError>>,
}

impl Iterator for Run {
    type Item = Result<Machine, MachineError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next.take()? {
            Ok(machine) => {
                self.next = match machine.step() {
                    Ok(Step::Continue(next)) => Some(Ok(next)),
                    Ok(Step::Halted) => None,
                    Err(e) => Some(Err(e)),
                };
                Some(Ok(machine))
            }
            // Errors abort the sequence: yield once, then fuse.
            Err(e) => Some(Err(e)),
        }
    }
}
