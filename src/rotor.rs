//! Rotor: the steppable signal stage of the machine.
//!
//! A rotor pairs a ring-adjusted wiring table with a mutable rotation
//! offset. The physical machine rotates the pin ring and the wiring core
//! together; here both rotations collapse into one offset applied through
//! modular index arithmetic, so stepping never copies the table.

use crate::alphabet::{index_letter, letter_index, ALPHABET_LEN};
use crate::error::EnigmaError;
use crate::wiring::{rotor_spec, WiringTable};

/// A steppable rotor: named wiring, ring setting, position and notch.
///
/// Signals pass through in both directions as 0-based pin indices; the
/// rotor translates them through its wiring at the current rotation.
///
/// # Examples
///
/// ```
/// use enigma::Rotor;
///
/// let rotor = Rotor::new("I", 'A', 1).unwrap();
/// let (letter, index) = rotor.encode_right_to_left(0);
/// assert_eq!((letter, index), ('E', 4));
/// ```
#[derive(Debug, Clone)]
pub struct Rotor {
    name: &'static str,
    position: char,
    ring_setting: usize,
    table: WiringTable,
    notch: Option<char>,
    offset: usize,
}

impl Rotor {
    /// Builds a rotor from its variant name, starting position letter and
    /// ring setting.
    ///
    /// The ring setting shifts the wiring before the position is applied;
    /// settings 0 and 1 both leave the wiring untouched and values above 26
    /// wrap around the ring.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] unless `name` is one of
    /// I, II, III, IV, V, Beta or Gamma.
    pub fn new(name: &str, position: char, ring_setting: usize) -> Result<Self, EnigmaError> {
        let spec = rotor_spec(name).ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
        let ring_offset = if ring_setting > 1 {
            (ring_setting - 1) % ALPHABET_LEN
        } else {
            0
        };
        Ok(Rotor {
            name: spec.name,
            position,
            ring_setting,
            table: WiringTable::with_ring_offset(spec.wiring, ring_offset),
            notch: spec.notch,
            offset: letter_index(position),
        })
    }

    /// The rotor's variant name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The starting position letter the rotor was built with.
    pub fn position(&self) -> char {
        self.position
    }

    /// The ring setting the rotor was built with.
    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// The letter currently at pin position 0.
    pub fn current_position(&self) -> char {
        index_letter(self.offset)
    }

    /// Encodes a pin index travelling from the plugboard side toward the
    /// reflector.
    ///
    /// Returns the wired letter at `index_in` and that letter's index on
    /// the current pin ring, which is the entry index for the next stage.
    pub fn encode_right_to_left(&self, index_in: usize) -> (char, usize) {
        let wired = self.table.forward((index_in + self.offset) % ALPHABET_LEN);
        let index_out = (wired + ALPHABET_LEN - self.offset) % ALPHABET_LEN;
        (index_letter(wired), index_out)
    }

    /// Encodes a pin index travelling back from the reflector toward the
    /// plugboard.
    ///
    /// Looks up the pin letter at `index_in` within the wiring and returns
    /// the pin letter at the resulting index together with that index.
    pub fn encode_left_to_right(&self, index_in: usize) -> (char, usize) {
        let wired = self.table.inverse((index_in + self.offset) % ALPHABET_LEN);
        let index_out = (wired + ALPHABET_LEN - self.offset) % ALPHABET_LEN;
        (index_letter(wired), index_out)
    }

    /// Advances the rotor one step, shifting pins and wiring together.
    pub fn rotate(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
    }

    /// True when the rotor sits at its turnover notch.
    ///
    /// Always false for the static Beta and Gamma rotors, which carry no
    /// notch and therefore never advance their neighbor.
    pub fn check_notch(&self) -> bool {
        self.notch == Some(self.current_position())
    }

    /// Returns the rotor to its starting position.
    pub fn reset(&mut self) {
        self.offset = letter_index(self.position);
    }
}
