//! Rotor: a validated, named permutation of the alphabet.
//!
//! A rotor stores its forward mapping (input position to output position)
//! and the inverse mapping derived once at construction. Applying the
//! forward mapping under a position shift simulates a rotor that has
//! physically turned without rebuilding its permutation table.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::RotorCryptError;

/// A fixed bijective substitution over the alphabet.
///
/// Immutable once constructed. The inverse permutation is derived at
/// construction time and cached for the rotor's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: &'static str,
    forward: [usize; ALPHABET_LEN],
    inverse: [usize; ALPHABET_LEN],
}

impl Rotor {
    /// Builds a rotor from a 26-character wiring string.
    ///
    /// The wiring gives, for each alphabet position, the substituted
    /// symbol: wiring `"BDFH..."` maps `A` to `B`, `B` to `D`, and so on.
    ///
    /// # Parameters
    /// - `name`: Identifier used in `Debug` output and chain bookkeeping.
    /// - `wiring`: A permutation of the 26 uppercase letters.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::MalformedRotor`] if `wiring` is not a
    /// bijection over the full alphabet (wrong length, non-alphabet
    /// symbol, or duplicate symbol).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::rotor::Rotor;
    ///
    /// let rotor = Rotor::new("fast", "BDFHJLCPRTXVZNYEIWGAKMUSQO").unwrap();
    /// assert_eq!(rotor.encrypt_char('A').unwrap(), 'B');
    /// ```
    ///
    /// ```
    /// use rotorcrypt::rotor::Rotor;
    ///
    /// assert!(Rotor::new("bad", "AAAAAAAAAAAAAAAAAAAAAAAAAA").is_err());
    /// ```
    pub fn new(name: &'static str, wiring: &str) -> Result<Self, RotorCryptError> {
        if wiring.chars().count() != ALPHABET_LEN {
            return Err(RotorCryptError::MalformedRotor);
        }

        let mut forward = [0usize; ALPHABET_LEN];
        let mut inverse = [0usize; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (input, symbol) in wiring.chars().enumerate() {
            let output = alphabet::index_of(symbol)
                .map_err(|_| RotorCryptError::MalformedRotor)?;
            if seen[output] {
                return Err(RotorCryptError::MalformedRotor);
            }
            seen[output] = true;
            forward[input] = output;
            inverse[output] = input;
        }

        Ok(Rotor {
            name,
            forward,
            inverse,
        })
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the inverse rotor: its forward mapping undoes this rotor's.
    ///
    /// The inverse is already cached, so this is a cheap array swap. The
    /// result carries the same name as its source rotor.
    pub fn inverted(&self) -> Rotor {
        Rotor {
            name: self.name,
            forward: self.inverse,
            inverse: self.forward,
        }
    }

    /// Applies the forward permutation to an alphabet position.
    pub fn forward(&self, position: usize) -> usize {
        self.forward[position % ALPHABET_LEN]
    }

    /// Applies the inverse permutation to an alphabet position.
    pub fn inverse(&self, position: usize) -> usize {
        self.inverse[position % ALPHABET_LEN]
    }

    /// Applies the forward permutation as if the rotor had advanced by
    /// `shift` places.
    ///
    /// Three steps: rotate the position forward by `shift`, apply the
    /// forward permutation, rotate the result back by `shift`. The sandwich
    /// lets one static permutation table serve every rotor position.
    ///
    /// # Parameters
    /// - `position`: Alphabet position of the input symbol (`0..26`).
    /// - `shift`: How many places the rotor has advanced.
    ///
    /// # Returns
    /// The alphabet position of the substituted symbol.
    pub fn apply_shifted(&self, position: usize, shift: usize) -> usize {
        let turned = alphabet::rotate(position, shift);
        let substituted = self.forward[turned];
        alphabet::rotate_back(substituted, shift)
    }

    /// Encrypts one symbol with the forward permutation, no shift.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if `symbol` is outside
    /// the alphabet.
    pub fn encrypt_char(&self, symbol: char) -> Result<char, RotorCryptError> {
        let position = alphabet::index_of(symbol)?;
        Ok(alphabet::symbol_at(self.forward[position]))
    }

    /// Decrypts one symbol with the cached inverse permutation, no shift.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if `symbol` is outside
    /// the alphabet.
    pub fn decrypt_char(&self, symbol: char) -> Result<char, RotorCryptError> {
        let position = alphabet::index_of(symbol)?;
        Ok(alphabet::symbol_at(self.inverse[position]))
    }
}
