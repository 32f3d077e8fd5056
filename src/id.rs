#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::{base58, codec, ParseError};

/// Represents a Universally Unique IDentifier.
///
/// The value is always exactly 16 bytes in RFC 4122 big-endian layout and is copied, compared,
/// and ordered byte-wise.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The layout variant of a UUID, determined by the top bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved, NCS backward compatibility (`0b0xxx_xxxx`).
    Ncs,

    /// The RFC 4122 layout (`0b10xx_xxxx`).
    Rfc4122,

    /// Reserved, Microsoft backward compatibility (`0b110x_xxxx`).
    Microsoft,

    /// Reserved for future definition (`0b111x_xxxx`).
    Future,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Omni UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const OMNI: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::namespace(0x10);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::namespace(0x11);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::namespace(0x12);

    /// Namespace for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::namespace(0x14);

    /// Version 1 (date-time and MAC address)
    pub const V1: u8 = 1;
    /// Version 2 (DCE security)
    pub const V2: u8 = 2;
    /// Version 3 (namespace name-based, MD5)
    pub const V3: u8 = 3;
    /// Version 4 (random)
    pub const V4: u8 = 4;
    /// Version 5 (namespace name-based, SHA-1)
    pub const V5: u8 = 5;
    /// Version 6 (reordered date-time)
    pub const V6: u8 = 6;
    /// Version 7 (Unix timestamp and random data)
    pub const V7: u8 = 7;

    const fn namespace(last: u8) -> Self {
        Self([
            0x6b, 0xa7, 0xb8, last, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8,
        ])
    }

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLength`] if the slice is not 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| ParseError::InvalidLength(bytes.len()))
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns true if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the version field (the high nibble of byte 6).
    ///
    /// The field is returned as is; it is meaningful only for [`Variant::Rfc4122`] UUIDs.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the layout variant.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Ncs,
            0b100..=0b101 => Variant::Rfc4122,
            0b110 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Overwrites the version field with the low four bits of `version`, leaving the low nibble of
    /// byte 6 intact.
    pub fn set_version(&mut self, version: u8) {
        self.0[6] = (self.0[6] & 0x0f) | (version << 4);
    }

    /// Overwrites the variant bits of byte 8, leaving the remaining low bits intact.
    pub fn set_variant(&mut self, variant: Variant) {
        let e = &mut self.0[8];
        *e = match variant {
            Variant::Ncs => *e & 0x7f,
            Variant::Rfc4122 => 0x80 | (*e & 0x3f),
            Variant::Microsoft => 0xc0 | (*e & 0x1f),
            Variant::Future => 0xe0 | (*e & 0x1f),
        };
    }

    /// Returns the 48-bit millisecond Unix timestamp of a UUIDv7, or `None` if the version field
    /// is not 7.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid58::Uuid;
    ///
    /// let x = "018a8fec-3ced-7164-995f-93c80cbdc575".parse::<Uuid>()?;
    /// assert_eq!(x.timestamp_v7(), Some(0x018a_8fec_3ced));
    /// assert_eq!(Uuid::NAMESPACE_DNS.timestamp_v7(), None);
    /// # Ok::<(), uuid58::ParseError>(())
    /// ```
    pub const fn timestamp_v7(&self) -> Option<u64> {
        if self.version() != Self::V7 {
            return None;
        }
        let b = &self.0;
        Some(u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]]))
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// This method is primarily for `no_std` environments. Use the [`fmt::Display`] trait or
    /// [`format()`](Self::format) usually.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid58::Uuid;
    ///
    /// let x = "6ba7b8109dad11d180b400c04fd430c8".parse::<Uuid>()?;
    /// assert_eq!(&x.encode_canonical() as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid58::ParseError>(())
    /// ```
    pub fn encode_canonical(&self) -> FStr<36> {
        codec::encode_canonical(&self.0)
    }

    /// Returns the 32-digit hexadecimal string representation without dashes.
    pub fn encode_hash(&self) -> FStr<32> {
        codec::encode_hash(&self.0)
    }

    /// Returns the 22-digit Base58 string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid58::Uuid;
    ///
    /// let x = Uuid::NAMESPACE_DNS.encode_base58();
    /// assert_eq!(&x as &str, "EJ34kCVxxF9jHMKD4EgrAK");
    /// assert_eq!(format!("{}", Uuid::NIL.encode_base58()), "1111111111111111111111");
    /// ```
    pub fn encode_base58(&self) -> FStr<22> {
        base58::encode(&self.0)
    }

    /// Parses any of the canonical (36 characters), hash (32), or Base58 (22) representations,
    /// selected by the length of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLength`] for any other length, [`ParseError::InvalidFormat`]
    /// if a canonical dash is missing, and [`ParseError::InvalidDigit`] for a byte outside the
    /// digit set of the selected representation.
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        Self::try_parse_ascii(src.as_bytes())
    }

    /// Parses a textual representation given as bytes, exactly as [`parse_str()`] does.
    ///
    /// [`parse_str()`]: Self::parse_str
    pub fn try_parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        codec::parse(src).map(Self)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_canonical())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from any of the three textual representations.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = ParseError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};
    use crate::Format;

    impl Uuid {
        /// Returns the string representation in the format given.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use uuid58::{Format, Uuid};
        ///
        /// let x = Uuid::NAMESPACE_DNS;
        /// assert_eq!(x.format(Format::Canonical), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        /// assert_eq!(x.format(Format::Hash), "6ba7b8109dad11d180b400c04fd430c8");
        /// assert_eq!(x.format(Format::Base58), "EJ34kCVxxF9jHMKD4EgrAK");
        /// ```
        pub fn format(&self, format: Format) -> String {
            match format {
                Format::Canonical => self.encode_canonical().to_string(),
                Format::Hash => self.encode_hash().to_string(),
                Format::Base58 => self.encode_base58().to_string(),
            }
        }
    }

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        /// Serializes the canonical form to human-readable formats and the 16 bytes to others.
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode_canonical())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        /// Accepts any of the three textual representations from human-readable formats.
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};
    use crate::ParseError;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(&'static str, &'static str, &'static str)] {
        &[
            (
                "00000000-0000-0000-0000-000000000000",
                "00000000000000000000000000000000",
                "1111111111111111111111",
            ),
            (
                "ffffffff-ffff-ffff-ffff-ffffffffffff",
                "ffffffffffffffffffffffffffffffff",
                "YcVfxkQb6JRzqk5kF2tNLv",
            ),
            (
                "00000000-0000-0000-0000-000000000001",
                "00000000000000000000000000000001",
                "1111111111111111111112",
            ),
            (
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "6ba7b8109dad11d180b400c04fd430c8",
                "EJ34kCVxxF9jHMKD4EgrAK",
            ),
            (
                "12345678-90ab-cdef-1234-567890abcdef",
                "1234567890abcdef1234567890abcdef",
                "3FP9ScdoVGyKrjtWQjQxDc",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (canonical, hash, base58) in prepare_cases() {
            let e = canonical.parse::<Uuid>().unwrap();
            assert_eq!(hash.parse(), Ok(e));
            assert_eq!(base58.parse(), Ok(e));
            assert_eq!(canonical.to_uppercase().parse(), Ok(e));
            assert_eq!(&e.encode_canonical() as &str, *canonical);
            assert_eq!(&e.encode_hash() as &str, *hash);
            assert_eq!(&e.encode_base58() as &str, *base58);
            assert_eq!(&e.to_string(), canonical);
        }
    }

    /// Round-trips random values through every representation
    #[cfg(feature = "std")]
    #[test]
    fn round_trips_random_values_through_every_representation() {
        use crate::Format;
        for _ in 0..10_000 {
            let e = Uuid::from(rand::random::<u128>());
            for f in [Format::Canonical, Format::Hash, Format::Base58] {
                let text = e.format(f);
                assert_eq!(text.len(), f.encoded_len());
                assert_eq!(Uuid::parse_str(&text), Ok(e));
                assert_eq!(Uuid::try_parse_ascii(text.as_bytes()), Ok(e));
            }
        }
    }

    /// Returns Nil and Omni UUIDs
    #[test]
    fn returns_nil_and_omni_uuids() {
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::OMNI.is_nil());
        assert!(Uuid::default().is_nil());
        assert_eq!(
            &Uuid::NIL.encode_canonical() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::OMNI.encode_canonical() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Provides predefined namespaces
    #[test]
    fn provides_predefined_namespaces() {
        for (e, text) in [
            (Uuid::NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ] {
            assert_eq!(e.to_string(), text);
            assert_eq!(e.version(), Uuid::V1);
            assert_eq!(e.variant(), Variant::Rfc4122);
        }
    }

    /// Reads version and variant bits
    #[test]
    fn reads_version_and_variant_bits() {
        let mut bytes = [0u8; 16];
        bytes[6] = 0x10;
        assert_eq!(Uuid::from(bytes).version(), Uuid::V1);

        for (byte8, variant) in [
            (0x00, Variant::Ncs),
            (0x7f, Variant::Ncs),
            (0x80, Variant::Rfc4122),
            (0xbf, Variant::Rfc4122),
            (0xc0, Variant::Microsoft),
            (0xdf, Variant::Microsoft),
            (0xe0, Variant::Future),
            (0xff, Variant::Future),
        ] {
            let mut bytes = [0u8; 16];
            bytes[8] = byte8;
            assert_eq!(Uuid::from(bytes).variant(), variant, "{byte8:#04x}");
        }
    }

    /// Writes version and variant bits without touching others
    #[test]
    fn writes_version_and_variant_bits_without_touching_others() {
        for v in 0..16u8 {
            let mut e = Uuid::OMNI;
            e.set_version(v);
            assert_eq!(e.version(), v);
            assert_eq!(e.as_bytes()[6] & 0x0f, 0x0f);

            let mut e = Uuid::NIL;
            e.set_version(v);
            assert_eq!(e.version(), v);
            assert_eq!(e.as_bytes()[6] & 0x0f, 0x00);
        }

        for (variant, low_bits) in [
            (Variant::Ncs, 0x7f),
            (Variant::Rfc4122, 0x3f),
            (Variant::Microsoft, 0x1f),
            (Variant::Future, 0x1f),
        ] {
            for src in [Uuid::NIL, Uuid::OMNI] {
                let mut e = src;
                e.set_variant(variant);
                assert_eq!(e.variant(), variant);
                assert_eq!(e.as_bytes()[8] & low_bits, src.as_bytes()[8] & low_bits);
                assert_eq!(e.as_bytes()[..8], src.as_bytes()[..8]);
                assert_eq!(e.as_bytes()[9..], src.as_bytes()[9..]);
            }
        }
    }

    /// Extracts timestamp from UUIDv7 only
    #[test]
    fn extracts_timestamp_from_uuidv7_only() {
        for (text, expected) in [
            ("00000000-0000-7000-0000-000000000000", Some(0)),
            ("018a8fec-3ced-7164-995f-93c80cbdc575", Some(0x018a_8fec_3ced)),
            ("ffffffff-ffff-7fff-ffff-ffffffffffff", Some(0xffff_ffff_ffff)),
            ("ffffffff-ffff-4fff-bfff-ffffffffffff", None),
            ("00000000-0000-0000-0000-000000000000", None),
        ] {
            assert_eq!(text.parse::<Uuid>().unwrap().timestamp_v7(), expected);
        }
    }

    /// Accepts exactly 16 bytes of binary input
    #[test]
    fn accepts_exactly_16_bytes_of_binary_input() {
        let bytes = *Uuid::NAMESPACE_DNS.as_bytes();
        assert_eq!(Uuid::from_slice(&bytes), Ok(Uuid::NAMESPACE_DNS));
        assert_eq!(Uuid::try_from(&bytes[..]), Ok(Uuid::NAMESPACE_DNS));

        for len in (0..16).chain(17..33) {
            let v = vec![0u8; len];
            assert_eq!(Uuid::from_slice(&v), Err(ParseError::InvalidLength(len)));
        }
    }

    /// Orders values byte-wise
    #[test]
    fn orders_values_byte_wise() {
        for _ in 0..10_000 {
            let (x, y): ([u8; 16], [u8; 16]) = rand::random();
            assert_eq!(Uuid::from(x).cmp(&Uuid::from(y)), x.cmp(&y));
            assert_eq!(Uuid::from(x) == Uuid::from(y), x == y);
        }
        assert!(Uuid::NIL < Uuid::NAMESPACE_DNS && Uuid::NAMESPACE_DNS < Uuid::OMNI);
    }

    /// Has symmetric converters
    #[cfg(feature = "std")]
    #[test]
    fn has_symmetric_converters() {
        for (canonical, _, _) in prepare_cases() {
            let e = canonical.parse::<Uuid>().unwrap();
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes(e.into_bytes()), e);
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            assert_eq!(e.encode_canonical().parse(), Ok(e));
            assert_eq!(e.encode_base58().parse(), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}
