//! This module provides pre-run analysis of a state table to detect common
//! configuration errors before execution. The engine itself only discovers a
//! bad `next_state` lazily, on the step that reaches it; resilient callers
//! run `analyze` first.

use std::collections::HashSet;

use crate::types::{ControlState, MachineError, StateId};

/// Errors found while analyzing a state table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The table has no states at all; state 1 cannot resolve.
    EmptyTable,
    /// A command's `next_state` is 0 or points past the end of the table.
    InvalidTarget {
        /// The state holding the offending command.
        state: StateId,
        /// The target that does not resolve.
        target: StateId,
    },
    /// No `Accept` entry exists anywhere; the run can never end.
    NoAcceptState,
    /// States that cannot be reached from state 1.
    UnreachableStates(Vec<StateId>),
}

impl From<AnalysisError> for MachineError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::EmptyTable => {
                MachineError::Validation("state table is empty".to_string())
            }
            AnalysisError::InvalidTarget { state, target } => MachineError::Validation(format!(
                "state {} targets invalid state {}",
                state, target
            )),
            AnalysisError::NoAcceptState => {
                MachineError::Validation("no accept state; the machine can never halt".to_string())
            }
            AnalysisError::UnreachableStates(states) => MachineError::Validation(format!(
                "unreachable states detected: {:?}",
                states
            )),
        }
    }
}

/// Analyzes a state table for structural and logical errors.
///
/// Runs each check in order and reports the first failure. A table that
/// passes can still loop forever; only resolvability and reachability are
/// checked, not termination.
pub fn analyze(states: &[ControlState]) -> Result<(), MachineError> {
    let checks: [fn(&[ControlState]) -> Result<(), AnalysisError>; 4] = [
        check_structure,
        check_targets,
        check_accept_state,
        check_reachability,
    ];

    for check in checks {
        check(states)?;
    }

    Ok(())
}

fn check_structure(states: &[ControlState]) -> Result<(), AnalysisError> {
    if states.is_empty() {
        return Err(AnalysisError::EmptyTable);
    }
    Ok(())
}

fn check_targets(states: &[ControlState]) -> Result<(), AnalysisError> {
    for (i, state) in states.iter().enumerate() {
        if let ControlState::Transition { on_zero, on_one } = state {
            for command in [on_zero, on_one] {
                let target = command.next_state;
                if target == 0 || target > states.len() {
                    return Err(AnalysisError::InvalidTarget {
                        state: i + 1,
                        target,
                    });
                }
            }
        }
    }
    Ok(())
}

fn check_accept_state(states: &[ControlState]) -> Result<(), AnalysisError> {
    if !states.iter().any(|s| matches!(s, ControlState::Accept)) {
        return Err(AnalysisError::NoAcceptState);
    }
    Ok(())
}

fn check_reachability(states: &[ControlState]) -> Result<(), AnalysisError> {
    let mut visited = HashSet::new();
    let mut frontier: Vec<StateId> = vec![1];

    while let Some(id) = frontier.pop() {
        if !visited.insert(id) {
            continue;
        }
        if let Some(ControlState::Transition { on_zero, on_one }) = states.get(id - 1) {
            frontier.push(on_zero.next_state);
            frontier.push(on_one.next_state);
        }
    }

    let unreachable: Vec<StateId> = (1..=states.len())
        .filter(|id| !visited.contains(id))
        .collect();

    if unreachable.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::UnreachableStates(unreachable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Command, Direction, Symbol};

    fn cmd(next_state: StateId) -> Command {
        Command {
            write: Symbol::One,
            direction: Direction::Right,
            next_state,
        }
    }

    fn transition(on_zero: Command, on_one: Command) -> ControlState {
        ControlState::Transition { on_zero, on_one }
    }

    #[test]
    fn test_analyze_accepts_valid_table() {
        let states = vec![
            transition(cmd(2), cmd(1)),
            transition(cmd(1), cmd(3)),
            ControlState::Accept,
        ];
        assert!(analyze(&states).is_ok());
    }

    #[test]
    fn test_analyze_rejects_empty_table() {
        assert_eq!(
            analyze(&[]),
            Err(AnalysisError::EmptyTable.into())
        );
    }

    #[test]
    fn test_analyze_rejects_invalid_target() {
        let states = vec![transition(cmd(0), cmd(1)), ControlState::Accept];
        let result = analyze(&states);
        assert_eq!(
            result,
            Err(AnalysisError::InvalidTarget { state: 1, target: 0 }.into())
        );

        let states = vec![transition(cmd(1), cmd(5)), ControlState::Accept];
        assert_eq!(
            analyze(&states),
            Err(AnalysisError::InvalidTarget { state: 1, target: 5 }.into())
        );
    }

    #[test]
    fn test_analyze_rejects_missing_accept_state() {
        let states = vec![transition(cmd(1), cmd(1))];
        assert_eq!(
            analyze(&states),
            Err(AnalysisError::NoAcceptState.into())
        );
    }

    #[test]
    fn test_analyze_reports_unreachable_states() {
        // State 3 is never targeted.
        let states = vec![
            transition(cmd(2), cmd(2)),
            ControlState::Accept,
            transition(cmd(1), cmd(1)),
        ];
        assert_eq!(
            analyze(&states),
            Err(AnalysisError::UnreachableStates(vec![3]).into())
        );
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let error: MachineError = AnalysisError::InvalidTarget { state: 2, target: 9 }.into();
        let msg = format!("{}", error);
        assert!(msg.contains("state 2"));
        assert!(msg.contains('9'));
    }
}
