//! The fixed-size, case-insensitive frequency table.

use crate::error::CountError;
use crate::CharCount;

/// Number of slots in the table: one per 7-bit ASCII code.
pub const ALPHABET_SIZE: usize = 128;

/// Per-character occurrence counters, indexed by uppercased ASCII code.
///
/// Letters are folded to uppercase before they are counted, so the slots for
/// `a..=z` never move off zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_SIZE],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Records one occurrence of `byte`.
    ///
    /// `position` is the byte offset of `byte` in its input and is only used
    /// to report where an out-of-range byte was found. On error the table is
    /// left untouched.
    pub fn record(&mut self, position: usize, byte: u8) -> Result<(), CountError> {
        if !byte.is_ascii() {
            return Err(out_of_range(position, u32::from(byte)));
        }
        self.counts[usize::from(byte.to_ascii_uppercase())] += 1;
        Ok(())
    }

    /// Builds a table from raw bytes, rejecting the first byte >= 128.
    pub fn from_bytes(input: &[u8]) -> Result<Self, CountError> {
        let mut table = Self::new();
        for (position, &byte) in input.iter().enumerate() {
            table.record(position, byte)?;
        }
        log::debug!("Recorded {} characters", table.total());
        Ok(table)
    }

    /// Builds a table from text, rejecting the first non-ASCII character.
    ///
    /// The error carries the full Unicode scalar value of the character
    /// rather than its leading UTF-8 byte.
    pub fn from_text(input: &str) -> Result<Self, CountError> {
        if let Some((position, ch)) = input.char_indices().find(|(_, ch)| !ch.is_ascii()) {
            return Err(out_of_range(position, u32::from(ch)));
        }
        Self::from_bytes(input.as_bytes())
    }

    /// Case-insensitive count for `character`; 0 for anything outside ASCII.
    pub fn count(&self, character: char) -> usize {
        if character.is_ascii() {
            self.counts[usize::from(character.to_ascii_uppercase() as u8)]
        } else {
            0
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns the lowest-coded character with the highest count.
    ///
    /// An empty table yields `' '` with a count of 0.
    pub fn most_common(&self) -> CharCount {
        let mut best = CharCount::default();
        for (code, &count) in self.counts.iter().enumerate() {
            // Strictly greater: ties keep the earlier slot.
            if count > best.count {
                best = CharCount {
                    character: char::from(code as u8),
                    count,
                };
            }
        }
        log::debug!("Most common character: {best}");
        best
    }
}

fn out_of_range(position: usize, code_point: u32) -> CountError {
    log::warn!(
        "Rejecting U+{:04X} at byte offset {}: only 7-bit ASCII can be counted",
        code_point,
        position
    );
    CountError::InputRange {
        position,
        code_point,
    }
}
