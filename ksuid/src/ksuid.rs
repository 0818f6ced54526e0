//! The KSUID value type.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::base62;
use crate::KsuidError;

/// Seconds between the Unix epoch and the KSUID epoch.
///
/// The KSUID epoch starts more recently so that the 32-bit timestamp space
/// gives a useful lifetime of around 136 years from May 2014. The number
/// (14e8) was picked to be easy to remember.
pub const EPOCH_STAMP: u64 = 1_400_000_000;

/// Length of a binary KSUID: 4 timestamp bytes + 16 payload bytes.
pub const BYTE_LENGTH: usize = TIMESTAMP_LENGTH + PAYLOAD_LENGTH;

/// Length of a string-encoded KSUID.
pub const STRING_ENCODED_LENGTH: usize = 27;

/// Length of the big-endian timestamp prefix.
pub const TIMESTAMP_LENGTH: usize = 4;

/// Length of the random payload.
pub const PAYLOAD_LENGTH: usize = 16;

/// Text form of [`Ksuid::MAX`]; 27-char strings above this encode values
/// past 2^160-1 and are rejected by [`Ksuid::parse`].
const MAX_STRING_ENCODED: &[u8; STRING_ENCODED_LENGTH] = b"aWgEPTl1tmebfsQzFP4bxwgy80V";

/// A K-Sortable Unique Identifier.
///
/// 20 bytes: a big-endian 32-bit count of seconds since the KSUID epoch,
/// followed by 16 random payload bytes. Byte-wise ordering equals
/// creation-time ordering, and so does ordering of the 27-character text
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ksuid([u8; BYTE_LENGTH]);

impl Ksuid {
    /// The minimum KSUID, all zero bytes (`"000000000000000000000000000"`).
    pub const MIN: Ksuid = Ksuid([0x00; BYTE_LENGTH]);

    /// The maximum KSUID, all 0xFF bytes (`"aWgEPTl1tmebfsQzFP4bxwgy80V"`).
    pub const MAX: Ksuid = Ksuid([0xff; BYTE_LENGTH]);

    /// Assembles a KSUID from Unix seconds and a 16-byte random payload.
    ///
    /// The stored timestamp is `unix_secs - EPOCH_STAMP` as a wrapping
    /// unsigned 32-bit subtraction: times before the KSUID epoch silently
    /// wrap, matching the persisted format of existing implementations.
    /// This is a committed contract, not an oversight.
    pub fn from_parts(unix_secs: u64, payload: [u8; PAYLOAD_LENGTH]) -> Self {
        let stamp = unix_secs.wrapping_sub(EPOCH_STAMP) as u32;
        let mut raw = [0u8; BYTE_LENGTH];
        raw[..TIMESTAMP_LENGTH].copy_from_slice(&stamp.to_be_bytes());
        raw[TIMESTAMP_LENGTH..].copy_from_slice(&payload);
        Self(raw)
    }

    /// Creates a KSUID from its 20-byte binary form.
    pub fn from_bytes(raw: [u8; BYTE_LENGTH]) -> Self {
        Self(raw)
    }

    /// Parses the 27-character base62 text form.
    ///
    /// Validates length, alphabet membership, and that the value fits in
    /// 160 bits before decoding; the raw decoder itself never checks.
    pub fn parse(text: &str) -> Result<Self, KsuidError> {
        let bytes: &[u8; STRING_ENCODED_LENGTH] =
            text.as_bytes().try_into().map_err(|_| {
                KsuidError::InvalidFormat(format!(
                    "expected {STRING_ENCODED_LENGTH} characters, got {}",
                    text.len()
                ))
            })?;
        if let Some(&bad) = bytes.iter().find(|b| !base62::is_base62(**b)) {
            return Err(KsuidError::InvalidFormat(format!(
                "byte {bad:#04x} is outside the base62 alphabet"
            )));
        }
        // The alphabet is ASCII-ascending, so byte comparison against the
        // maximum encoding is numeric comparison.
        if bytes.as_slice() > MAX_STRING_ENCODED.as_slice() {
            return Err(KsuidError::InvalidFormat(format!(
                "{text:?} encodes a value above the 160-bit maximum"
            )));
        }
        Ok(Self(base62::decode(bytes)))
    }

    /// Returns the seconds since the KSUID epoch.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the Unix seconds this KSUID was generated at.
    pub fn unix_timestamp(&self) -> u64 {
        u64::from(self.timestamp()) + EPOCH_STAMP
    }

    /// Returns the generation instant as a calendar time.
    pub fn datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.unix_timestamp() as i64, 0)
            .single()
            .unwrap_or_default()
    }

    /// Returns the 16 random payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.0[TIMESTAMP_LENGTH..]
    }

    /// Returns the 20-byte binary form.
    pub fn as_bytes(&self) -> &[u8; BYTE_LENGTH] {
        &self.0
    }

    /// Returns a copy of the 20-byte binary form.
    pub fn to_bytes(&self) -> [u8; BYTE_LENGTH] {
        self.0
    }

    /// Reports whether this is the all-zero KSUID.
    pub fn is_zero(&self) -> bool {
        *self == Self::MIN
    }

    /// Returns the 27-character base62 text form.
    pub fn encoded(&self) -> String {
        String::from_utf8(base62::encode(&self.0).to_vec()).unwrap()
    }
}

impl fmt::Display for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

impl FromStr for Ksuid {
    type Err = KsuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; BYTE_LENGTH]> for Ksuid {
    fn from(raw: [u8; BYTE_LENGTH]) -> Self {
        Self(raw)
    }
}

impl From<Ksuid> for [u8; BYTE_LENGTH] {
    fn from(id: Ksuid) -> Self {
        id.0
    }
}

impl TryFrom<&[u8]> for Ksuid {
    type Error = KsuidError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; BYTE_LENGTH] = raw.try_into().map_err(|_| {
            KsuidError::InvalidFormat(format!(
                "expected {BYTE_LENGTH} bytes, got {}",
                raw.len()
            ))
        })?;
        Ok(Self(raw))
    }
}

impl AsRef<[u8]> for Ksuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Ksuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded())
    }
}

impl<'de> Deserialize<'de> for Ksuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KsuidVisitor;

        impl serde::de::Visitor<'_> for KsuidVisitor {
            type Value = Ksuid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 27-character base62 KSUID string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ksuid::parse(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(KsuidVisitor)
    }
}
