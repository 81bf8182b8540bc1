//! Rotor table: the fixed wirings and the seven-stage chain.
//!
//! Four base rotors are defined as wiring constants: three rotating rotors
//! (fast, medium, slow) and one reflector. The stepping machine extends
//! them to a seven-stage chain by appending the inverses of the rotating
//! rotors in reversed order, mirroring a signal passing back through the
//! rotor stack after the reflector.

use crate::error::RotorCryptError;
use crate::rotor::Rotor;

/// Wiring of the fast rotor (advances every character).
pub const FAST_WIRING: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";

/// Wiring of the medium rotor (advances once per 26 characters).
pub const MEDIUM_WIRING: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";

/// Wiring of the slow rotor (advances once per 676 characters).
pub const SLOW_WIRING: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

/// Wiring of the reflector. A true involution with no fixed points,
/// matching historical reflector semantics; it never rotates.
pub const REFLECTOR_WIRING: &str = "IXUHFEZDAOMTKQJWNSRLCYPBVG";

/// Number of stages in the stepping chain.
pub const CHAIN_LEN: usize = 7;

/// The four validated base rotors.
///
/// Construction checks the bijection invariant on every wiring constant,
/// so downstream permutation lookups can index without bounds worry.
#[derive(Debug, Clone)]
pub struct RotorTable {
    fast: Rotor,
    medium: Rotor,
    slow: Rotor,
    reflector: Rotor,
}

impl RotorTable {
    /// Builds and validates the four base rotors.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::MalformedRotor`] if any wiring constant
    /// fails the bijection check. Does not trigger with the shipped
    /// constants, but the check guards every invariant downstream.
    pub fn new() -> Result<Self, RotorCryptError> {
        Ok(RotorTable {
            fast: Rotor::new("fast", FAST_WIRING)?,
            medium: Rotor::new("medium", MEDIUM_WIRING)?,
            slow: Rotor::new("slow", SLOW_WIRING)?,
            reflector: Rotor::new("reflector", REFLECTOR_WIRING)?,
        })
    }

    /// Returns the fast rotor.
    pub fn fast(&self) -> &Rotor {
        &self.fast
    }

    /// Returns the medium rotor.
    pub fn medium(&self) -> &Rotor {
        &self.medium
    }

    /// Returns the slow rotor.
    pub fn slow(&self) -> &Rotor {
        &self.slow
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Rotor {
        &self.reflector
    }

    /// Builds the seven-stage stepping chain.
    ///
    /// Slots 0..=2 are the rotating rotors, slot 3 the reflector, and
    /// slots 4..=6 the inverses of slots 2, 1, 0 in that reversed order.
    /// The palindromic pairing (slot k against slot 6-k) is what makes the
    /// stepping transform its own inverse.
    pub fn chain(&self) -> RotorChain {
        RotorChain {
            stages: [
                self.fast.clone(),
                self.medium.clone(),
                self.slow.clone(),
                self.reflector.clone(),
                self.slow.inverted(),
                self.medium.inverted(),
                self.fast.inverted(),
            ],
        }
    }
}

/// The ordered seven-stage rotor chain for stepping mode.
///
/// Immutable once built; order is load-bearing and fixed.
#[derive(Debug, Clone)]
pub struct RotorChain {
    stages: [Rotor; CHAIN_LEN],
}

impl RotorChain {
    /// Returns the rotor at chain slot `slot` (`0..7`).
    pub fn stage(&self, slot: usize) -> &Rotor {
        &self.stages[slot]
    }
}
