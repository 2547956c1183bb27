//! Core library for most-common-char: case-insensitive character counting
//! over the 7-bit ASCII alphabet.

pub mod error;
pub mod table;

use std::fmt;

pub use crate::error::CountError;
pub use crate::table::FrequencyTable;

/// The winning character of a frequency scan together with its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    /// Uppercased for letters; any other ASCII character as-is.
    pub character: char,
    pub count: usize,
}

impl Default for CharCount {
    /// The result reported for empty input.
    fn default() -> Self {
        Self {
            character: ' ',
            count: 0,
        }
    }
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.character, self.count)
    }
}

/// Finds the most frequent character of `input`, ignoring case.
///
/// Ties go to the character with the lowest code. Fails with
/// [`CountError::InputRange`] on the first non-ASCII character.
pub fn most_common_char(input: &str) -> Result<CharCount, CountError> {
    Ok(FrequencyTable::from_text(input)?.most_common())
}

/// Byte-oriented counterpart of [`most_common_char`] for input that may not
/// be valid UTF-8.
///
/// A multi-byte character is rejected by its leading byte, so `"é"` reports
/// `U+00C3` at its offset rather than `U+00E9`.
pub fn most_common_byte(input: &[u8]) -> Result<CharCount, CountError> {
    Ok(FrequencyTable::from_bytes(input)?.most_common())
}
