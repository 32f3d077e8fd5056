//! Fixed-width Base58 codec for 128-bit values.
//!
//! A 16-byte value is treated as one 128-bit unsigned big-endian integer and written with the
//! Bitcoin alphabet as exactly 22 digits, most significant first, left-padded with the zero digit
//! `1`. Since 58^22 exceeds 2^128, 22 digits hold every value and the text form of UUIDs sorts the
//! same way as their binary form.
//!
//! The arithmetic runs on four `u32` words with `u64` intermediates rather than on a native
//! 128-bit integer.
//!
//! ```rust
//! use uuid58::base58;
//!
//! let bytes = [0xffu8; 16];
//! let text = base58::encode(&bytes);
//! assert_eq!(&text as &str, "YcVfxkQb6JRzqk5kF2tNLv");
//! assert_eq!(base58::decode(text.as_bytes()), Ok(bytes));
//! ```

use fstr::FStr;

use crate::ParseError;

/// Number of digits in the encoded form.
pub const ENCODED_LEN: usize = 22;

/// The 58 digit symbols in ascending order of value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Marks bytes outside [`ALPHABET`] in [`DECODE_MAP`].
const INVALID: u8 = 0xff;

/// Maps each byte to its digit value or [`INVALID`].
const DECODE_MAP: [u8; 256] = {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Returns the digit value of `byte`, or `None` if it is not one of the 58 symbols.
pub const fn digit_value(byte: u8) -> Option<u8> {
    match DECODE_MAP[byte as usize] {
        INVALID => None,
        d => Some(d),
    }
}

/// Encodes a 16-byte big-endian value into its 22-digit Base58 representation.
pub fn encode(bytes: &[u8; 16]) -> FStr<ENCODED_LEN> {
    let mut words = [0u32; 4];
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    // divide the four-word integer by 58 once per digit, filling from the right
    let mut buffer = [ALPHABET[0]; ENCODED_LEN];
    for e in buffer.iter_mut().rev() {
        if words == [0; 4] {
            break;
        }
        let mut rem = 0u64;
        for w in words.iter_mut() {
            let num = (rem << 32) | *w as u64;
            *w = (num / 58) as u32;
            rem = num % 58;
        }
        *e = ALPHABET[rem as usize];
    }

    debug_assert!(buffer.is_ascii());
    // SAFETY: every byte is taken from ALPHABET, which is ASCII
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Decodes a Base58 string of any length into a 16-byte big-endian value.
///
/// Inputs shorter than 22 digits decode to correspondingly smaller values. Inputs whose value
/// exceeds 128 bits are not rejected: the high bits are discarded and the result is the value
/// modulo 2^128.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDigit`] at the first byte that is not one of the 58 symbols.
pub fn decode(src: &[u8]) -> Result<[u8; 16], ParseError> {
    // most significant word first
    let mut words = [0u32; 4];
    for (index, &byte) in src.iter().enumerate() {
        let mut carry = digit_value(byte).ok_or(ParseError::InvalidDigit { index, byte })? as u64;
        for w in words.iter_mut().rev() {
            let num = *w as u64 * 58 + carry;
            *w = num as u32;
            carry = num >> 32;
        }
    }

    let mut dst = [0u8; 16];
    for (chunk, w) in dst.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&w.to_be_bytes());
    }
    Ok(dst)
}
