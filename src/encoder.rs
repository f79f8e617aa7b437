//! This module provides the bidirectional mapping between a finite symbol
//! sequence and the two-integer tape representation, and the rendering of that
//! representation as a printable bit string.
//!
//! The tape is a pair of fixed-width unsigned integers acting as binary
//! stacks. The `right` integer holds the cell under the head in its least
//! significant bit; the `left` integer holds the cell immediately left of the
//! head in *its* least significant bit. Pushing and popping a cell is a shift,
//! never an array operation.

use crate::types::{MachineError, Symbol, MAX_LENGTH};

/// Encodes a head-first symbol sequence into a half-tape integer.
///
/// The sequence is folded so that `symbols[0]` lands in bit 0 (the head
/// position when the result is used as the `right` half-tape):
/// `result = Σ bit(symbols[i]) * 2^i`.
///
/// # Errors
///
/// Returns [`MachineError::TapeBoundExceeded`] when the sequence is longer
/// than [`MAX_LENGTH`]. The check happens before any bit is written.
pub fn encode_input(symbols: &[Symbol]) -> Result<u64, MachineError> {
    if symbols.len() > MAX_LENGTH as usize {
        return Err(MachineError::TapeBoundExceeded);
    }

    Ok(symbols
        .iter()
        .rev()
        .fold(0, |acc, symbol| (acc << 1) | symbol.bit()))
}

/// Renders a tape as a fixed-width bit string in true left-to-right order.
///
/// `left` is printed as a [`MAX_LENGTH`]-wide zero-padded binary number (most
/// significant bit first, i.e. tape far-left first), followed by the bit
/// reverse of `right`'s zero-padded rendering, so the head cell (`right`
/// bit 0) appears immediately after the `left` half and the tape continues
/// rightward. The result is always exactly `2 * MAX_LENGTH` characters of
/// `'0'` and `'1'`.
pub fn decode_to_string(left: u64, right: u64) -> String {
    let width = MAX_LENGTH as usize;
    let left_bits = format!("{left:0width$b}");
    let right_bits: String = format!("{right:0width$b}").chars().rev().collect();

    format!("{left_bits}{right_bits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol::{One, Zero};

    #[test]
    fn test_encode_empty_input() {
        assert_eq!(encode_input(&[]), Ok(0));
    }

    #[test]
    fn test_encode_head_first_order() {
        // Head symbol ends up in bit 0.
        assert_eq!(encode_input(&[One]), Ok(0b1));
        assert_eq!(encode_input(&[Zero, One]), Ok(0b10));
        assert_eq!(encode_input(&[One, Zero, One, One]), Ok(0b1101));
    }

    #[test]
    fn test_encode_rejects_oversized_input() {
        let max = vec![One; MAX_LENGTH as usize];
        assert!(encode_input(&max).is_ok());

        let oversized = vec![Zero; MAX_LENGTH as usize + 1];
        assert_eq!(oversized.len(), 41);
        assert_eq!(encode_input(&oversized), Err(MachineError::TapeBoundExceeded));
    }

    #[test]
    fn test_decode_width_and_alphabet() {
        let rendered = decode_to_string(0, 0);
        assert_eq!(rendered.len(), 2 * MAX_LENGTH as usize);
        assert!(rendered.chars().all(|c| c == '0'));

        let rendered = decode_to_string(u64::MAX >> (64 - MAX_LENGTH), 0b101);
        assert_eq!(rendered.len(), 2 * MAX_LENGTH as usize);
        assert!(rendered.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_decode_head_position() {
        // The head bit (right's bit 0) renders immediately after the left half.
        let rendered = decode_to_string(0, 0b1);
        assert_eq!(&rendered[..MAX_LENGTH as usize], "0".repeat(40));
        assert_eq!(rendered.as_bytes()[MAX_LENGTH as usize], b'1');
        assert!(rendered[MAX_LENGTH as usize + 1..].chars().all(|c| c == '0'));
    }

    #[test]
    fn test_decode_left_renders_most_significant_first() {
        // left = 0b10: the cell next to the head is 0, one further out is 1.
        let rendered = decode_to_string(0b10, 0);
        let left_half = &rendered[..MAX_LENGTH as usize];
        assert!(left_half.ends_with("10"));
        assert!(left_half[..left_half.len() - 2].chars().all(|c| c == '0'));
    }

    #[test]
    fn test_round_trip_recovers_input() {
        let input = [One, Zero, One, One, Zero, Zero, One];
        let right = encode_input(&input).unwrap();
        let rendered = decode_to_string(0, right);

        let head_side = &rendered[MAX_LENGTH as usize..MAX_LENGTH as usize + input.len()];
        let expected: String = input
            .iter()
            .map(|s| if s.bit() == 1 { '1' } else { '0' })
            .collect();
        assert_eq!(head_side, expected);
    }
}
