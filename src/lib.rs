//! Enigma rotor cipher machine simulator with a crib-based settings solver.
//!
//! The crate reproduces the letter substitution and stepping behavior of an
//! electromechanical rotor cipher machine — plugboard, 3 or 4 rotors with
//! ring settings and turnover notches, reflector — and provides a
//! brute-force solver that recovers unknown settings from a ciphertext and
//! a guessed plaintext fragment (the crib).
//!
//! # Architecture
//!
//! ```text
//! keyboard → Plugboard → Rotor (right) → … → Rotor (left) → Reflector
//!                 ↑                                             │
//! lampboard ← Plugboard ← Rotor (right) ← … ← Rotor (left) ←────┘
//! ```
//!
//! The rightmost rotor steps before every character; a rotor sitting at its
//! turnover notch drags its left neighbor along. [`Enigma`] composes the
//! stages and owns the odometer; [`Solver`] enumerates candidate settings,
//! decoding the ciphertext on a fresh machine per candidate.
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut machine = Enigma::new();
//! machine.add_plugboard(&["AZ", "BY", "CX"]).unwrap();
//! machine
//!     .add_rotors(&["I", "III", "IV"], Some(&['A', 'B', 'C']), Some(&[3, 2, 1]))
//!     .unwrap();
//! machine.add_reflector("B").unwrap();
//!
//! let ciphertext = machine.encode_message("TOPSECRET").unwrap();
//! assert_ne!(ciphertext, "TOPSECRET");
//!
//! machine.reset();
//! assert_eq!(machine.encode_message(&ciphertext).unwrap(), "TOPSECRET");
//! ```
//!
//! Recover an unknown reflector with a crib:
//!
//! ```
//! use enigma::{Enigma, Solver};
//!
//! let mut machine = Enigma::new();
//! machine.add_rotors(&["II", "V", "I"], Some(&['F', 'O', 'X']), None).unwrap();
//! machine.add_reflector("C").unwrap();
//! let ciphertext = machine.encode_message("ATTACKATDAWN").unwrap();
//!
//! let solutions = Solver::new(&ciphertext, "DAWN")
//!     .known_rotors(["II", "V", "I"])
//!     .known_positions(['F', 'O', 'X'])
//!     .known_ring_settings([1, 1, 1])
//!     .solve()
//!     .unwrap();
//! assert_eq!(solutions[0].config.reflector.as_deref(), Some("C"));
//! assert_eq!(solutions[0].plaintext, "ATTACKATDAWN");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod solver;
mod wiring;

pub use error::EnigmaError;
pub use machine::{Enigma, MachineConfig, RotorSetting};
pub use plugboard::{PlugLead, Plugboard};
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use solver::{Solution, Solver};
