//! Error types for the enigma library.

use thiserror::Error;

/// Errors produced by the enigma library.
///
/// Validation errors abort the operation that raised them and leave the
/// machine in whatever state it had reached; nothing is retried or
/// auto-corrected. [`SolveTimeout`](EnigmaError::SolveTimeout) is the one
/// non-validation case, raised when the solver runs out of iteration budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Plug lead pair is not exactly two distinct uppercase letters.
    #[error("Invalid plug lead {0:?}: a pair must be two distinct uppercase letters")]
    InvalidPlugPair(String),
    /// Plugboard already holds the maximum number of pairs.
    #[error("Plugboard full: only 10 pairs are supported")]
    PlugboardFull,
    /// A letter of the new pair already appears in a stored pair.
    #[error("Plug lead {0} conflicts with an existing pair")]
    ConflictingPlugPair(String),
    /// Rotor name is not one of the seven known variants.
    #[error("Invalid rotor name {0:?}: valid rotors are I, II, III, IV, V, Beta and Gamma")]
    UnknownRotor(String),
    /// Reflector name is not one of the three known variants.
    #[error("Invalid reflector name {0:?}: valid reflectors are A, B and C")]
    UnknownReflector(String),
    /// Rotor names, positions and ring settings differ in length.
    #[error("Rotor settings must have consistent lengths")]
    MismatchedRotorSettings,
    /// A single installation takes 3 or 4 rotors.
    #[error("Enigma machine can only take 3 or 4 rotors, got {0}")]
    InvalidRotorCount(usize),
    /// The machine already has a plugboard.
    #[error("Enigma machine can only have 1 plugboard")]
    DuplicatePlugboard,
    /// The machine already has a reflector.
    #[error("Enigma machine can only have 1 reflector")]
    DuplicateReflector,
    /// Message contains a character outside uppercase A-Z.
    #[error("Invalid character {0:?}: messages may only contain uppercase letters")]
    InvalidMessageChar(char),
    /// Encoding was attempted with fewer than 3 rotors or no reflector.
    #[error("Incomplete configuration: Enigma machine needs at least 3 rotors and 1 reflector")]
    IncompleteMachine,
    /// The solver reached its iteration budget with candidates left to try.
    #[error("Maximum solver iterations reached: {0}; raise max_iterations to search further")]
    SolveTimeout(i64),
}
