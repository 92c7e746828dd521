//! Error types for decoding MySensors messages

use thiserror::Error;

/// Errors raised while parsing a message from binary or hex form.
///
/// Encoding is total and never fails; only the inverse direction can see
/// malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Invalid payload length: {0} exceeds payload capacity")]
    InvalidLength(u8),

    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    #[error("Odd hex length: {0}")]
    OddHexLength(usize),

    #[error("Invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },

    #[error("Hex message too long: {0} characters")]
    HexTooLong(usize),

    #[error("Length mismatch: header announces {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for message decoding
pub type MessageResult<T> = Result<T, MessageError>;
