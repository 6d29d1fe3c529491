//! Reflector: the static stage that turns the signal around.
//!
//! A reflector is a fixed-point-free involution over the alphabet. It has
//! no ring, no position and no stepping; the signal passes through it once
//! per character, in the right-to-left direction only.

use crate::alphabet::index_letter;
use crate::error::EnigmaError;
use crate::wiring::{reflector_spec, WiringTable};

/// A non-steppable reflector stage.
///
/// # Examples
///
/// ```
/// use enigma::Reflector;
///
/// let reflector = Reflector::new("B").unwrap();
/// let (letter, index) = reflector.encode_right_to_left(0);
/// assert_eq!((letter, index), ('Y', 24));
/// ```
#[derive(Debug, Clone)]
pub struct Reflector {
    name: &'static str,
    table: WiringTable,
}

impl Reflector {
    /// Builds a reflector from its variant name.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflector`] unless `name` is A, B or C.
    pub fn new(name: &str) -> Result<Self, EnigmaError> {
        let spec =
            reflector_spec(name).ok_or_else(|| EnigmaError::UnknownReflector(name.to_string()))?;
        Ok(Reflector {
            name: spec.name,
            table: WiringTable::new(spec.wiring),
        })
    }

    /// The reflector's variant name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Maps an incoming pin index to the reflected letter and its index.
    ///
    /// The reflector never rotates, so the returned index is simply the
    /// mapped letter's alphabet index.
    pub fn encode_right_to_left(&self, index_in: usize) -> (char, usize) {
        let wired = self.table.forward(index_in);
        (index_letter(wired), wired)
    }
}
