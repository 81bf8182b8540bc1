//! Error types for the rotorcrypt library.

use std::fmt;

/// Errors produced by the rotorcrypt library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorCryptError {
    /// A message character is not part of the fixed A-Z alphabet.
    InvalidSymbol(char),
    /// A rotor wiring is not a bijection over the full alphabet.
    MalformedRotor,
}

impl fmt::Display for RotorCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotorCryptError::InvalidSymbol(symbol) => {
                write!(f, "Symbol {:?} is not an uppercase alphabet letter", symbol)
            }
            RotorCryptError::MalformedRotor => {
                write!(f, "Rotor wiring is not a bijection over the alphabet")
            }
        }
    }
}

impl std::error::Error for RotorCryptError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_symbol() {
        let err = RotorCryptError::InvalidSymbol('x');
        assert_eq!(
            format!("{}", err),
            "Symbol 'x' is not an uppercase alphabet letter"
        );
    }

    #[test]
    fn test_display_malformed_rotor() {
        let err = RotorCryptError::MalformedRotor;
        assert_eq!(
            format!("{}", err),
            "Rotor wiring is not a bijection over the alphabet"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            RotorCryptError::InvalidSymbol('a'),
            RotorCryptError::InvalidSymbol('a')
        );
        assert_ne!(
            RotorCryptError::InvalidSymbol('a'),
            RotorCryptError::InvalidSymbol('b')
        );
        assert_ne!(
            RotorCryptError::InvalidSymbol('a'),
            RotorCryptError::MalformedRotor
        );
    }

    #[test]
    fn test_error_copy() {
        let err = RotorCryptError::InvalidSymbol('?');
        let copied = err;
        assert_eq!(err, copied);
    }
}
