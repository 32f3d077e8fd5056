//! Textual representations and length-dispatched parsing.

#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::{base58, ParseError};

/// Selects one of the three textual representations of UUID.
///
/// This is a plain value rather than a process-wide setting: pass it to [`Uuid::format()`] (or
/// keep it in the caller's own configuration) wherever a representation has to be chosen. It
/// reads from and displays as `canonical`, `hash`, or `base58`.
///
/// # Examples
///
/// ```rust
/// use uuid58::Format;
///
/// let f = "base58".parse::<Format>()?;
/// assert_eq!(f, Format::Base58);
/// assert_eq!(f.encoded_len(), 22);
/// assert_eq!(Format::default(), Format::Canonical);
/// # Ok::<(), uuid58::ParseFormatError>(())
/// ```
///
/// [`Uuid::format()`]: crate::Uuid::format
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Format {
    /// 8-4-4-4-12 lowercase hexadecimal with dashes (36 characters).
    #[default]
    Canonical,

    /// 32 lowercase hexadecimal digits without separators.
    Hash,

    /// 22 Base58 digits.
    Base58,
}

impl Format {
    /// Returns the name of the format.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Hash => "hash",
            Self::Base58 => "base58",
        }
    }

    /// Returns the length of text in the format.
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Canonical => 36,
            Self::Hash => 32,
            Self::Base58 => base58::ENCODED_LEN,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src {
            "canonical" => Ok(Self::Canonical),
            "hash" => Ok(Self::Hash),
            "base58" => Ok(Self::Base58),
            _ => Err(ParseFormatError {}),
        }
    }
}

/// Error parsing an unknown format name.
#[derive(thiserror::Error, Clone, Eq, PartialEq, Hash, Debug)]
#[error("unknown format name (expected canonical, hash, or base58)")]
pub struct ParseFormatError {}

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Marks non-hexadecimal bytes in [`HEX_MAP`].
const INVALID: u8 = 0xff;

/// Maps each byte to its hexadecimal digit value or [`INVALID`].
const HEX_MAP: [u8; 256] = {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < 10 {
        map[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        map[b'a' as usize + i] = 10 + i as u8;
        map[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    map
};

/// Offsets of the first digit of each byte in the canonical form.
const CANONICAL_OFFSETS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Offsets of the mandatory dashes in the canonical form.
const DASH_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Writes the 8-4-4-4-12 canonical form.
pub(crate) fn encode_canonical(bytes: &[u8; 16]) -> FStr<36> {
    let mut buffer = [b'-'; 36];
    for (&e, &o) in bytes.iter().zip(CANONICAL_OFFSETS.iter()) {
        buffer[o] = DIGITS[(e >> 4) as usize];
        buffer[o + 1] = DIGITS[(e & 15) as usize];
    }
    debug_assert!(buffer.is_ascii());
    // SAFETY: every byte is either '-' or taken from DIGITS
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Writes the 32-digit hash form.
pub(crate) fn encode_hash(bytes: &[u8; 16]) -> FStr<32> {
    let mut buffer = [0u8; 32];
    for (&e, pair) in bytes.iter().zip(buffer.chunks_exact_mut(2)) {
        pair[0] = DIGITS[(e >> 4) as usize];
        pair[1] = DIGITS[(e & 15) as usize];
    }
    debug_assert!(buffer.is_ascii());
    // SAFETY: every byte is taken from DIGITS
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Decodes the two hexadecimal digits at `src[offset..offset + 2]`.
fn decode_hex_pair(src: &[u8], offset: usize) -> Result<u8, ParseError> {
    let hi = HEX_MAP[src[offset] as usize];
    let lo = HEX_MAP[src[offset + 1] as usize];
    if hi | lo == INVALID {
        // either nibble lookup failed; report the first bad one
        let index = if hi == INVALID { offset } else { offset + 1 };
        return Err(ParseError::InvalidDigit {
            index,
            byte: src[index],
        });
    }
    Ok((hi << 4) | lo)
}

/// Parses any of the three textual representations, selected by the length of `src`.
pub(crate) fn parse(src: &[u8]) -> Result<[u8; 16], ParseError> {
    match src.len() {
        22 => base58::decode(src),
        32 => {
            let mut dst = [0u8; 16];
            for (i, e) in dst.iter_mut().enumerate() {
                *e = decode_hex_pair(src, i * 2)?;
            }
            Ok(dst)
        }
        36 => {
            if let Some(&o) = DASH_OFFSETS.iter().find(|&&o| src[o] != b'-') {
                return Err(ParseError::InvalidFormat(o));
            }
            let mut dst = [0u8; 16];
            for (e, &o) in dst.iter_mut().zip(CANONICAL_OFFSETS.iter()) {
                *e = decode_hex_pair(src, o)?;
            }
            Ok(dst)
        }
        len => Err(ParseError::InvalidLength(len)),
    }
}
