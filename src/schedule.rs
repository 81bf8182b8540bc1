//! Shift schedule for the stepping chain.
//!
//! Encodes odometer-style rotor advancement: the fast rotor turns every
//! character, the medium rotor once per 26, the slow rotor once per 676.
//! Slot k and slot 6-k share a formula so the chain stays self-inverse,
//! and the reflector slot never turns.

use crate::alphabet::ALPHABET_LEN;

/// Chain slot occupied by the reflector.
pub const REFLECTOR_SLOT: usize = 3;

/// Returns how many places the rotor in `slot` has advanced by the time
/// the character at 1-based `position` is processed.
///
/// # Parameters
/// - `position`: 1-based character position within the message.
/// - `slot`: Chain slot (`0..7`).
///
/// # Returns
/// The shift amount in `0..26`.
pub fn shift_for(position: usize, slot: usize) -> usize {
    match slot {
        0 | 6 => position % ALPHABET_LEN,
        1 | 5 => (position / ALPHABET_LEN) % ALPHABET_LEN,
        2 | 4 => (position / (ALPHABET_LEN * ALPHABET_LEN)) % ALPHABET_LEN,
        _ => 0,
    }
}
