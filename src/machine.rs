//! Enigma: the machine orchestrating plugboard, rotors and reflector.
//!
//! The machine owns the full signal path and the stepping odometer. Rotors
//! are stored fastest-first (rightmost at index 0), matching the physical
//! wiring chain: keyboard → plugboard → right rotor → … → left rotor →
//! reflector → back out. Configuration is assembled piecewise with `add_*`
//! calls and torn down with `drop_*`; encoding requires at least 3 rotors
//! and exactly one reflector.

use serde::Serialize;

use crate::alphabet::{index_letter, letter_index};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Smallest rotor complement a machine will encode with.
const MIN_ROTORS: usize = 3;

/// Largest rotor complement a single `add_rotors` call accepts.
const MAX_ROTORS: usize = 4;

/// One rotor's settings as reported by [`Enigma::show_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotorSetting {
    /// Rotor variant name.
    pub name: String,
    /// Starting or current position letter, per the snapshot mode.
    pub position: char,
    /// Ring setting as configured.
    pub ring_setting: usize,
}

/// A structured snapshot of the machine configuration.
///
/// Rotors are listed left-to-right, the order they were supplied in.
/// Serializable so callers can render or persist it; the crate itself does
/// no I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineConfig {
    /// Installed plugboard pairs in insertion order, if any.
    pub plugboard: Option<Vec<String>>,
    /// Installed rotors, leftmost first.
    pub rotors: Vec<RotorSetting>,
    /// Installed reflector name, if any.
    pub reflector: Option<String>,
}

/// An Enigma machine: optional plugboard, 3 or 4 rotors, one reflector.
///
/// # Examples
///
/// Encoding is its own inverse on a fresh machine with the same settings:
///
/// ```
/// use enigma::Enigma;
///
/// let mut machine = Enigma::new();
/// machine.add_plugboard(&["AZ", "BY"]).unwrap();
/// machine.add_rotors(&["I", "II", "III"], None, None).unwrap();
/// machine.add_reflector("B").unwrap();
/// let ciphertext = machine.encode_message("RUSTENIGMA").unwrap();
///
/// machine.reset();
/// assert_eq!(machine.encode_message(&ciphertext).unwrap(), "RUSTENIGMA");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enigma {
    plugboard: Option<Plugboard>,
    // Fastest-first: index 0 is the rightmost rotor.
    rotors: Vec<Rotor>,
    reflector: Option<Reflector>,
}

impl Enigma {
    /// Creates an unconfigured machine.
    pub fn new() -> Self {
        Enigma::default()
    }

    /// Builds and installs the plugboard from a list of pair strings.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicatePlugboard`] when a plugboard is
    /// already installed, or the underlying plugboard error when the pair
    /// list is invalid.
    pub fn add_plugboard(&mut self, pairs: &[&str]) -> Result<(), EnigmaError> {
        if self.plugboard.is_some() {
            return Err(EnigmaError::DuplicatePlugboard);
        }
        self.plugboard = Some(Plugboard::from_pairs(pairs)?);
        Ok(())
    }

    /// Removes the plugboard, if any.
    pub fn drop_plugboard(&mut self) {
        self.plugboard = None;
    }

    /// Installs a bank of rotors, leftmost rotor named first.
    ///
    /// `positions` defaults to all `'A'` and `ring_settings` to all 1; when
    /// given, both must match `names` in length. Each call installs 3 or 4
    /// rotors and appends to any already present.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MismatchedRotorSettings`] on a length
    /// mismatch, [`EnigmaError::InvalidRotorCount`] when the count is not
    /// 3 or 4, or [`EnigmaError::UnknownRotor`] for an unrecognized name.
    pub fn add_rotors(
        &mut self,
        names: &[&str],
        positions: Option<&[char]>,
        ring_settings: Option<&[usize]>,
    ) -> Result<(), EnigmaError> {
        let positions: Vec<char> = match positions {
            Some(positions) => positions.to_vec(),
            None => vec!['A'; names.len()],
        };
        let ring_settings: Vec<usize> = match ring_settings {
            Some(ring_settings) => ring_settings.to_vec(),
            None => vec![1; names.len()],
        };

        if names.len() != positions.len() || names.len() != ring_settings.len() {
            return Err(EnigmaError::MismatchedRotorSettings);
        }
        if !(MIN_ROTORS..=MAX_ROTORS).contains(&names.len()) {
            return Err(EnigmaError::InvalidRotorCount(names.len()));
        }

        // Supplied left-to-right, stored fastest-first.
        for index in (0..names.len()).rev() {
            self.rotors
                .push(Rotor::new(names[index], positions[index], ring_settings[index])?);
        }
        Ok(())
    }

    /// Removes all rotors.
    pub fn drop_rotors(&mut self) {
        self.rotors.clear();
    }

    /// Installs the reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateReflector`] when a reflector is
    /// already installed, or [`EnigmaError::UnknownReflector`] for an
    /// unrecognized name.
    pub fn add_reflector(&mut self, name: &str) -> Result<(), EnigmaError> {
        if self.reflector.is_some() {
            return Err(EnigmaError::DuplicateReflector);
        }
        self.reflector = Some(Reflector::new(name)?);
        Ok(())
    }

    /// Removes the reflector, if any.
    pub fn drop_reflector(&mut self) {
        self.reflector = None;
    }

    /// Returns every rotor to its starting position, leaving the
    /// configuration itself untouched.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }

    /// Checks that the machine is ready to encode.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IncompleteMachine`] with fewer than 3 rotors
    /// or no reflector.
    pub fn validate_config(&self) -> Result<(), EnigmaError> {
        if self.rotors.len() < MIN_ROTORS || self.reflector.is_none() {
            return Err(EnigmaError::IncompleteMachine);
        }
        Ok(())
    }

    /// Checks that a message contains only uppercase letters.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidMessageChar`] for the first character
    /// outside `A..=Z`. The empty message is valid.
    pub fn validate_message(&self, message: &str) -> Result<(), EnigmaError> {
        match message.chars().find(|char| !char.is_ascii_uppercase()) {
            Some(char) => Err(EnigmaError::InvalidMessageChar(char)),
            None => Ok(()),
        }
    }

    /// Advances the odometer by one keypress.
    ///
    /// Step flags are computed from pre-step notch state for the whole
    /// round, then applied together: the rightmost rotor always steps, and
    /// each of the two rightmost rotors drags its left neighbor along when
    /// sitting at its notch.
    fn rotate_rotors(&mut self) {
        let mut to_rotate = vec![false; self.rotors.len()];
        for (index, rotor) in self.rotors.iter().enumerate() {
            if index == 0 {
                to_rotate[index] = true;
            }
            if index < 2 && rotor.check_notch() {
                to_rotate[index] = true;
                to_rotate[index + 1] = true;
            }
        }
        for (index, rotor) in self.rotors.iter_mut().enumerate() {
            if to_rotate[index] {
                rotor.rotate();
            }
        }
    }

    /// Runs one character through the full signal path, stepping first.
    ///
    /// The caller has already validated the configuration, so the reflector
    /// is present here.
    fn encode_char(&mut self, mut char: char) -> char {
        if let Some(plugboard) = &self.plugboard {
            char = plugboard.encode(char);
        }
        let mut index = letter_index(char);

        self.rotate_rotors();

        for rotor in &self.rotors {
            let (_, out) = rotor.encode_right_to_left(index);
            index = out;
        }
        if let Some(reflector) = &self.reflector {
            let (_, out) = reflector.encode_right_to_left(index);
            index = out;
        }
        for rotor in self.rotors.iter().rev() {
            let (_, out) = rotor.encode_left_to_right(index);
            index = out;
        }

        char = index_letter(index);
        if let Some(plugboard) = &self.plugboard {
            char = plugboard.encode(char);
        }
        char
    }

    /// Encodes a whole message, stepping the rotors once per character.
    ///
    /// Rotor positions carry over between characters and persist after the
    /// call: encoding two messages back-to-back is not the same as encoding
    /// them on fresh machines unless [`reset`](Self::reset) runs in
    /// between.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IncompleteMachine`] on an incomplete
    /// configuration or [`EnigmaError::InvalidMessageChar`] for a message
    /// with characters outside `A..=Z`, in both cases before any character
    /// is encoded.
    pub fn encode_message(&mut self, message: &str) -> Result<String, EnigmaError> {
        self.validate_config()?;
        self.validate_message(message)?;
        Ok(message.chars().map(|char| self.encode_char(char)).collect())
    }

    /// Reports the current configuration, rotors ordered left-to-right.
    ///
    /// With `starting_positions` set the per-rotor positions are the ones
    /// the machine was configured with; otherwise they are the positions
    /// the rotors have stepped to.
    pub fn show_config(&self, starting_positions: bool) -> MachineConfig {
        MachineConfig {
            plugboard: self.plugboard.as_ref().map(Plugboard::show_pairs),
            rotors: self
                .rotors
                .iter()
                .rev()
                .map(|rotor| RotorSetting {
                    name: rotor.name().to_string(),
                    position: if starting_positions {
                        rotor.position()
                    } else {
                        rotor.current_position()
                    },
                    ring_setting: rotor.ring_setting(),
                })
                .collect(),
            reflector: self.reflector.as_ref().map(|r| r.name().to_string()),
        }
    }
}
