//! RFC 4122 UUIDs with three interchangeable text forms and a monotonic UUIDv7 generator
//!
//! ```rust
//! use uuid58::{Format, Uuid};
//!
//! let uuid = uuid58::new_v7()?;
//! println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{}", uuid.format(Format::Hash)); // e.g., "018094243e597c059219566f82fff672"
//! println!("{}", uuid.format(Format::Base58)); // e.g., "1Bm3MYdbYzfWEyD6wR9qku"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! // any of the three forms parses back to the same value
//! assert_eq!(uuid.format(Format::Base58).parse::<Uuid>()?, uuid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Text forms
//!
//! | Format               | Length | Example                                |
//! | -------------------- | ------ | -------------------------------------- |
//! | [`Format::Canonical`] | 36     | `6ba7b810-9dad-11d1-80b4-00c04fd430c8` |
//! | [`Format::Hash`]      | 32     | `6ba7b8109dad11d180b400c04fd430c8`     |
//! | [`Format::Base58`]    | 22     | `EJ34kCVxxF9jHMKD4EgrAK`               |
//!
//! Parsing selects the form by the length of the input. Hexadecimal digits are accepted in either
//! case. The Base58 form uses the Bitcoin alphabet and is always exactly 22 characters, padded
//! with leading `1`s (the zero digit); see the [`base58`] module.
//!
//! # Generators
//!
//! [`new_v4()`] and [`new_v7()`] use a process-wide [`Generator`]. Create dedicated
//! [`Generator`] instances to keep independent clock states or to inject a random number source
//! and clock. See the [`Generator`] documentation for the UUIDv7 layout.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables the generator, [`Uuid::format()`], and the standard error traits. Without
//!   `std`, [`Uuid`] and both codecs work in `no_std` environments through stack-allocated
//!   strings.
//! - `global_gen` (implies `std`) enables [`new_v4()`] and [`new_v7()`].
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables the conversion between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod codec;
mod error;
mod id;

pub mod base58;
pub use codec::{Format, ParseFormatError};
pub use error::ParseError;
pub use id::{Uuid, Variant};

#[cfg(feature = "std")]
pub mod generator;
#[cfg(feature = "std")]
pub use generator::{GenerateError, Generator, RandSource, StdSystemTime, TimeSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{new_v4, new_v7};
