//! Wiring tables for the rotor and reflector variants.
//!
//! Each named variant is a fixed permutation of the 26-letter alphabet taken
//! from the historical wiring charts. [`WiringTable`] stores a permutation as
//! a value array (A = 0) together with its precomputed inverse, so that both
//! signal directions are plain table lookups; the rotated-array behavior of a
//! physical rotor is recovered through offset arithmetic at the call sites.

use crate::alphabet::{letter_index, ALPHABET_LEN};

/// Immutable definition of a rotor variant: wiring chart and notch letter.
pub(crate) struct RotorSpec {
    pub(crate) name: &'static str,
    pub(crate) wiring: &'static str,
    pub(crate) notch: Option<char>,
}

/// The seven rotor variants. I through V carry a turnover notch; the naval
/// Beta and Gamma rotors are static and never step their neighbor.
#[rustfmt::skip]
pub(crate) const ROTOR_SPECS: [RotorSpec; 7] = [
    RotorSpec { name: "I",     wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ", notch: Some('Q') },
    RotorSpec { name: "II",    wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE", notch: Some('E') },
    RotorSpec { name: "III",   wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO", notch: Some('V') },
    RotorSpec { name: "IV",    wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB", notch: Some('J') },
    RotorSpec { name: "V",     wiring: "VZBRGITYUPSDNHLXAWMJQOFECK", notch: Some('Z') },
    RotorSpec { name: "Beta",  wiring: "LEYJVCNIXWPBQMDRTAKZGFUHOS", notch: None },
    RotorSpec { name: "Gamma", wiring: "FSOKANUERHMBTIYCWLQPZXVGJD", notch: None },
];

/// Immutable definition of a reflector variant.
pub(crate) struct ReflectorSpec {
    pub(crate) name: &'static str,
    pub(crate) wiring: &'static str,
}

/// The three reflector variants; each wiring is an involution with no fixed
/// point.
#[rustfmt::skip]
pub(crate) const REFLECTOR_SPECS: [ReflectorSpec; 3] = [
    ReflectorSpec { name: "A", wiring: "EJMZALYXVBWFCRQUONTSPIKHGD" },
    ReflectorSpec { name: "B", wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT" },
    ReflectorSpec { name: "C", wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL" },
];

/// Looks up a rotor variant by name.
pub(crate) fn rotor_spec(name: &str) -> Option<&'static RotorSpec> {
    ROTOR_SPECS.iter().find(|spec| spec.name == name)
}

/// Looks up a reflector variant by name.
pub(crate) fn reflector_spec(name: &str) -> Option<&'static ReflectorSpec> {
    REFLECTOR_SPECS.iter().find(|spec| spec.name == name)
}

/// A fixed alphabet permutation with its precomputed inverse.
#[derive(Debug, Clone)]
pub(crate) struct WiringTable {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl WiringTable {
    /// Builds the table straight from a 26-letter wiring chart.
    pub(crate) fn new(wiring: &str) -> Self {
        Self::with_ring_offset(wiring, 0)
    }

    /// Builds the table from a 26-letter wiring chart adjusted for a ring
    /// offset (ring setting minus one).
    ///
    /// The adjustment shifts every mapped value forward by `ring_offset` and
    /// rotates the chart right by the same amount, which is the rotated-array
    /// ring model reduced to index arithmetic.
    pub(crate) fn with_ring_offset(wiring: &str, ring_offset: usize) -> Self {
        let shift = ring_offset % ALPHABET_LEN;
        let mut chart = [0usize; ALPHABET_LEN];
        for (slot, letter) in chart.iter_mut().zip(wiring.chars()) {
            *slot = letter_index(letter);
        }

        let mut forward = [0u8; ALPHABET_LEN];
        for (index, slot) in forward.iter_mut().enumerate() {
            let source = (index + ALPHABET_LEN - shift) % ALPHABET_LEN;
            *slot = ((chart[source] + shift) % ALPHABET_LEN) as u8;
        }

        let mut inverse = [0u8; ALPHABET_LEN];
        for (index, &value) in forward.iter().enumerate() {
            inverse[value as usize] = index as u8;
        }

        WiringTable { forward, inverse }
    }

    /// Value mapped to `index` by the permutation.
    pub(crate) fn forward(&self, index: usize) -> usize {
        self.forward[index] as usize
    }

    /// Value mapped to `index` by the inverse permutation.
    pub(crate) fn inverse(&self, index: usize) -> usize {
        self.inverse[index] as usize
    }
}
