//! Defines custom error types for the library.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned when character frequencies cannot be computed.
pub enum CountError {
    #[error("Character U+{code_point:04X} at byte offset {position} is outside the 7-bit ASCII range")]
    InputRange { position: usize, code_point: u32 },

    /// Raised by callers that read input when the stream ends before a line.
    #[error("No input: standard input was closed before a line was read")]
    NoInput,
}
