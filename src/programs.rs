//! Predefined machines. These are example configuration, not core behavior:
//! the engine never consults this catalogue, it only consumes the state
//! tables these entries carry.

use crate::types::{Command, ControlState, Direction, StateId, Symbol};

/// A ready-to-run machine: a state table plus its conventional input.
#[derive(Debug, Clone)]
pub struct ProgramInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub states: Vec<ControlState>,
    pub input: Vec<Symbol>,
}

lazy_static::lazy_static! {
    /// The built-in program catalogue.
    pub static ref PROGRAMS: Vec<ProgramInfo> = vec![
        ProgramInfo {
            name: "busy-beaver-3",
            description: "Classic 3-state busy beaver; halts after 13 steps with 6 ones",
            states: busy_beaver_3(),
            input: vec![Symbol::Zero],
        },
        ProgramInfo {
            name: "bit-flipper",
            description: "Inverts the symbol under the head, then accepts",
            states: bit_flipper(),
            input: vec![Symbol::Zero],
        },
        ProgramInfo {
            name: "unary-writer-5",
            description: "Writes five ones moving right, then accepts",
            states: unary_writer(5),
            input: vec![],
        },
    ];
}

/// Looks a predefined program up by name.
pub fn by_name(name: &str) -> Option<ProgramInfo> {
    PROGRAMS.iter().find(|p| p.name == name).cloned()
}

fn cmd(write: Symbol, direction: Direction, next_state: StateId) -> Command {
    Command {
        write,
        direction,
        next_state,
    }
}

/// The classic 3-state, 2-symbol busy beaver with an explicit accept state.
pub fn busy_beaver_3() -> Vec<ControlState> {
    use Direction::{Left, Neither, Right};
    use Symbol::One;

    vec![
        ControlState::Transition {
            on_zero: cmd(One, Right, 2),
            on_one: cmd(One, Left, 3),
        },
        ControlState::Transition {
            on_zero: cmd(One, Left, 1),
            on_one: cmd(One, Right, 2),
        },
        ControlState::Transition {
            on_zero: cmd(One, Left, 2),
            on_one: cmd(One, Neither, 4),
        },
        ControlState::Accept,
    ]
}

/// One transition: invert the head cell in place, then accept.
pub fn bit_flipper() -> Vec<ControlState> {
    use Direction::Neither;

    vec![
        ControlState::Transition {
            on_zero: cmd(Symbol::One, Neither, 2),
            on_one: cmd(Symbol::Zero, Neither, 2),
        },
        ControlState::Accept,
    ]
}

/// Writes `n` ones while walking right, one state per cell, then accepts.
pub fn unary_writer(n: usize) -> Vec<ControlState> {
    use Direction::Right;
    use Symbol::One;

    let mut states: Vec<ControlState> = (1..=n)
        .map(|i| ControlState::Transition {
            on_zero: cmd(One, Right, i + 1),
            on_one: cmd(One, Right, i + 1),
        })
        .collect();
    states.push(ControlState::Accept);
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::machine::Machine;

    #[test]
    fn test_catalogue_entries_pass_analysis() {
        for program in PROGRAMS.iter() {
            assert!(
                analyze(&program.states).is_ok(),
                "program {} failed analysis",
                program.name
            );
        }
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("busy-beaver-3").is_some());
        assert!(by_name("no-such-program").is_none());
    }

    #[test]
    fn test_busy_beaver_catalogue_entry_runs_to_the_known_result() {
        let program = by_name("busy-beaver-3").unwrap();
        let machine = Machine::new(program.states, &program.input).unwrap();

        let snapshots: Vec<_> = machine.run().map(Result::unwrap).collect();
        assert_eq!(snapshots.len(), 14);
        assert_eq!(snapshots.last().unwrap().ones(), 6);
    }

    #[test]
    fn test_bit_flipper_inverts_and_accepts() {
        let machine = Machine::new(bit_flipper(), &[Symbol::Zero]).unwrap();
        let snapshots: Vec<_> = machine.run().map(Result::unwrap).collect();

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].head(), Symbol::One);
    }

    #[test]
    fn test_unary_writer_writes_n_ones() {
        let machine = Machine::new(unary_writer(5), &[]).unwrap();
        let last = machine.run().map(Result::unwrap).last().unwrap();

        assert_eq!(last.ones(), 5);
        assert_eq!(last.left(), 0b11111);
        assert_eq!(last.right(), 0);
    }
}
