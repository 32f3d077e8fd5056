//! Error types.

use thiserror::Error;

/// Error parsing an invalid binary or textual representation of UUID.
#[derive(Error, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// The input is not 22, 32, or 36 characters long (or not 16 bytes for binary input).
    #[error("invalid length: {0}")]
    InvalidLength(usize),

    /// The canonical form lacks a mandatory `-` at the given byte offset.
    #[error("invalid format: expected '-' at {0}")]
    InvalidFormat(usize),

    /// A byte outside the valid hexadecimal or Base58 digit set.
    #[error("invalid digit {byte:#04x} at {index}")]
    InvalidDigit {
        /// Byte offset of the offending digit.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::ParseError;

    /// Formats human-readable messages
    #[test]
    fn formats_human_readable_messages() {
        assert_eq!(
            ParseError::InvalidLength(2).to_string(),
            "invalid length: 2"
        );
        assert_eq!(
            ParseError::InvalidFormat(13).to_string(),
            "invalid format: expected '-' at 13"
        );
        assert_eq!(
            ParseError::InvalidDigit {
                index: 30,
                byte: b'q'
            }
            .to_string(),
            "invalid digit 0x71 at 30"
        );
    }
}
