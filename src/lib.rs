//! Rotorcrypt: educational rotor cipher engine.
//!
//! Simulates a classical mechanical rotor cipher in two modes: a static
//! single-rotor substitution with a cached inverse for decryption, and a
//! stepping seven-stage chain whose position-dependent shifts emulate
//! mechanical rotor advancement. The stepping transform is involutive —
//! the same function encrypts and decrypts.
//!
//! Not a production cryptosystem: no key management, no randomness, and
//! no resistance to statistical analysis. Educational simulation only.
//!
//! # Architecture
//!
//! ```text
//! alphabet  (index mapping and wrapping rotation — no dependencies)
//!     ↕
//! Rotor     (validated 26-symbol bijection + cached inverse)
//!     ↕ grouped by RotorTable into the 7-stage RotorChain
//! RotorMachine (schedule-driven stepping transform + static transform)
//! ```
//!
//! # Examples
//!
//! Stepping mode, applied twice to recover the plaintext:
//!
//! ```
//! use rotorcrypt::RotorMachine;
//!
//! let machine = RotorMachine::new().unwrap();
//! let ciphertext = machine.transform_stepping("ATTACKATDAWN").unwrap();
//! let plaintext = machine.transform_stepping(&ciphertext).unwrap();
//! assert_eq!(plaintext, "ATTACKATDAWN");
//! ```
//!
//! Static mode with an explicit direction:
//!
//! ```
//! use rotorcrypt::{Direction, RotorMachine};
//!
//! let machine = RotorMachine::new().unwrap();
//! let rotor = machine.table().fast();
//! let ciphertext = machine
//!     .transform_static("HELLO", rotor, Direction::Encrypt)
//!     .unwrap();
//! let plaintext = machine
//!     .transform_static(&ciphertext, rotor, Direction::Decrypt)
//!     .unwrap();
//! assert_eq!(plaintext, "HELLO");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod rotor;
pub mod schedule;
pub mod table;

mod machine;

pub use error::RotorCryptError;
pub use machine::{Direction, RotorMachine};
