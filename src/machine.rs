//! RotorMachine: the cipher engine composing rotors into full transforms.
//!
//! Exposes the two modes of the machine: a static single-rotor
//! substitution with an explicit encrypt/decrypt direction, and the
//! seven-stage stepping transform that is its own inverse.

use crate::alphabet;
use crate::error::RotorCryptError;
use crate::rotor::Rotor;
use crate::schedule::shift_for;
use crate::table::{RotorChain, RotorTable, CHAIN_LEN};

/// Direction of a static-mode transform.
///
/// A closed two-variant strategy: encryption applies the rotor's forward
/// permutation, decryption its cached inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply the forward permutation.
    Encrypt,
    /// Apply the inverse permutation.
    Decrypt,
}

/// Rotor cipher engine.
///
/// Owns the validated rotor table and the seven-stage stepping chain,
/// both built once at construction and immutable afterwards. All
/// transforms take `&self` and keep the position counter on the stack,
/// so one machine can serve any number of concurrent messages.
///
/// # Examples
///
/// Stepping mode is involutive — the same call both encrypts and decrypts:
///
/// ```
/// use rotorcrypt::RotorMachine;
///
/// let machine = RotorMachine::new().unwrap();
/// let ciphertext = machine.transform_stepping("HELLO").unwrap();
/// assert_ne!(ciphertext, "HELLO");
/// assert_eq!(machine.transform_stepping(&ciphertext).unwrap(), "HELLO");
/// ```
#[derive(Debug, Clone)]
pub struct RotorMachine {
    table: RotorTable,
    chain: RotorChain,
}

impl RotorMachine {
    /// Builds a machine from the fixed rotor table.
    ///
    /// Validates every wiring constant and derives the seven-stage chain.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::MalformedRotor`] if a wiring constant is
    /// not a bijection over the alphabet.
    pub fn new() -> Result<Self, RotorCryptError> {
        let table = RotorTable::new()?;
        let chain = table.chain();
        Ok(RotorMachine { table, chain })
    }

    /// Returns the rotor table, e.g. to pick a rotor for static mode.
    pub fn table(&self) -> &RotorTable {
        &self.table
    }

    /// Runs the seven-stage stepping transform over `message`.
    ///
    /// The character at 1-based position `p` is threaded through all
    /// seven chain slots in order, each slot shifted by its schedule
    /// amount for `p`. The chain is palindromic in rotor-inverse pairing
    /// and shift pairing and its middle stage is an involution, so this
    /// single function both encrypts and decrypts: applying it twice,
    /// with the position counter restarting at 1 both times, recovers
    /// the original message.
    ///
    /// # Parameters
    /// - `message`: Uppercase alphabet symbols only. Empty input yields
    ///   empty output.
    ///
    /// # Returns
    /// The transformed message, same length as the input.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] on the first character
    /// outside the alphabet; no partial output is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::RotorMachine;
    ///
    /// let machine = RotorMachine::new().unwrap();
    /// assert_eq!(machine.transform_stepping("HELLO").unwrap(), "MNBOA");
    /// assert_eq!(machine.transform_stepping("MNBOA").unwrap(), "HELLO");
    /// ```
    pub fn transform_stepping(&self, message: &str) -> Result<String, RotorCryptError> {
        let mut output = String::with_capacity(message.len());
        for (index, symbol) in message.chars().enumerate() {
            let position = index + 1;
            let mut current = alphabet::index_of(symbol)?;
            for slot in 0..CHAIN_LEN {
                let shift = shift_for(position, slot);
                current = self.chain.stage(slot).apply_shifted(current, shift);
            }
            output.push(alphabet::symbol_at(current));
        }
        Ok(output)
    }

    /// Runs a static single-rotor substitution over `message`.
    ///
    /// No position dependency: every character passes through the same
    /// permutation. Encrypting and then decrypting with the same rotor
    /// reproduces the message exactly.
    ///
    /// # Parameters
    /// - `message`: Uppercase alphabet symbols only. Empty input yields
    ///   empty output.
    /// - `rotor`: The substitution rotor.
    /// - `direction`: [`Direction::Encrypt`] for the forward permutation,
    ///   [`Direction::Decrypt`] for the inverse.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] on the first character
    /// outside the alphabet; no partial output is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Direction, RotorMachine};
    ///
    /// let machine = RotorMachine::new().unwrap();
    /// let rotor = machine.table().fast();
    /// let encrypted = machine
    ///     .transform_static("A", rotor, Direction::Encrypt)
    ///     .unwrap();
    /// assert_eq!(encrypted, "B");
    /// let decrypted = machine
    ///     .transform_static(&encrypted, rotor, Direction::Decrypt)
    ///     .unwrap();
    /// assert_eq!(decrypted, "A");
    /// ```
    pub fn transform_static(
        &self,
        message: &str,
        rotor: &Rotor,
        direction: Direction,
    ) -> Result<String, RotorCryptError> {
        let mut output = String::with_capacity(message.len());
        for symbol in message.chars() {
            let transformed = match direction {
                Direction::Encrypt => rotor.encrypt_char(symbol)?,
                Direction::Decrypt => rotor.decrypt_char(symbol)?,
            };
            output.push(transformed);
        }
        Ok(output)
    }
}
