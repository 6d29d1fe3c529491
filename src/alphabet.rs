//! Alphabet helpers shared by every signal stage.
//!
//! The machine operates on the 26 uppercase letters A-Z. Signals travel
//! between stages as 0-based indices (A = 0 .. Z = 25); letters appear only
//! at the API surface and in wiring tables.

/// Number of letters in the machine alphabet.
pub(crate) const ALPHABET_LEN: usize = 26;

/// Converts an uppercase letter to its 0-based alphabet index.
///
/// Characters outside `A..=Z` are reduced modulo 26 from their byte offset
/// to `'A'`, keeping the conversion total; documented inputs are always
/// uppercase letters.
pub(crate) fn letter_index(letter: char) -> usize {
    (letter as u8).wrapping_sub(b'A') as usize % ALPHABET_LEN
}

/// Converts a 0-based alphabet index to its uppercase letter.
pub(crate) fn index_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}
