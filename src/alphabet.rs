//! Alphabet and position utilities for the fixed 26-letter alphabet.
//!
//! Every rotor permutation in the crate is a bijection over this alphabet.
//! Positions are 0-based indices in `0..26`; rotation wraps circularly.

use crate::error::RotorCryptError;

/// The fixed alphabet shared by all rotors.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the 0-based alphabet position of `symbol`.
///
/// # Parameters
/// - `symbol`: The character to look up.
///
/// # Returns
/// The position in `0..26`.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidSymbol`] if `symbol` is not an
/// uppercase ASCII letter.
pub fn index_of(symbol: char) -> Result<usize, RotorCryptError> {
    if symbol.is_ascii_uppercase() {
        Ok(symbol as usize - 'A' as usize)
    } else {
        Err(RotorCryptError::InvalidSymbol(symbol))
    }
}

/// Returns the alphabet symbol at `position`.
///
/// `position` must be in `0..26`. All internal positions are produced by
/// modular arithmetic, so the bound always holds for in-crate callers.
pub fn symbol_at(position: usize) -> char {
    debug_assert!(position < ALPHABET_LEN);
    (b'A' + position as u8) as char
}

/// Rotates `position` forward by `shift` places, wrapping inside the alphabet.
pub fn rotate(position: usize, shift: usize) -> usize {
    (position + shift) % ALPHABET_LEN
}

/// Rotates `position` backward by `shift` places, wrapping inside the alphabet.
///
/// Inverse of [`rotate`] for any `shift`.
pub fn rotate_back(position: usize, shift: usize) -> usize {
    (position + ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_bounds() {
        assert_eq!(index_of('A'), Ok(0));
        assert_eq!(index_of('Z'), Ok(25));
        assert_eq!(index_of('M'), Ok(12));
    }

    #[test]
    fn test_index_of_rejects_lowercase() {
        assert_eq!(index_of('a'), Err(RotorCryptError::InvalidSymbol('a')));
        assert_eq!(index_of('z'), Err(RotorCryptError::InvalidSymbol('z')));
    }

    #[test]
    fn test_index_of_rejects_non_alphabetic() {
        for symbol in ['0', ' ', '!', '@', '\n', 'é'] {
            assert_eq!(
                index_of(symbol),
                Err(RotorCryptError::InvalidSymbol(symbol))
            );
        }
    }

    #[test]
    fn test_symbol_at_inverts_index_of() {
        for (i, symbol) in ALPHABET.chars().enumerate() {
            assert_eq!(symbol_at(i), symbol);
            assert_eq!(index_of(symbol), Ok(i));
        }
    }

    #[test]
    fn test_rotate_wraps() {
        assert_eq!(rotate(0, 1), 1);
        assert_eq!(rotate(25, 1), 0);
        assert_eq!(rotate(10, 26), 10);
        assert_eq!(rotate(10, 52), 10);
    }

    #[test]
    fn test_rotate_back_inverts_rotate() {
        for position in 0..ALPHABET_LEN {
            for shift in 0..60 {
                assert_eq!(rotate_back(rotate(position, shift), shift), position);
                assert_eq!(rotate(rotate_back(position, shift), shift), position);
            }
        }
    }
}
