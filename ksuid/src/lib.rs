//! K-Sortable Unique Identifiers.
//!
//! A KSUID is a 160-bit identifier: a 32-bit big-endian timestamp (seconds
//! since a custom epoch) followed by 128 random bits. Binary form is exactly
//! 20 bytes; text form is exactly 27 base62 characters. Both forms sort
//! byte-wise in creation-time order.
//!
//! # Usage
//!
//! ```
//! use ksuid::{Generator, Ksuid};
//!
//! let mut generator = Generator::new().unwrap();
//! let id = generator.generate().unwrap();
//!
//! let text = id.to_string();
//! assert_eq!(text.len(), 27);
//!
//! let parsed = Ksuid::parse(&text).unwrap();
//! assert_eq!(parsed, *id);
//! ```
//!
//! # Design
//!
//! The binary/text conversion in [`base62`] is a fixed-width long division
//! over 32-bit limbs; it never allocates and never fails. Validation lives
//! in [`Ksuid::parse`] and the [`Generator`] entry points, not in the
//! converter. Entropy is a capability: [`Generator`] owns a boxed
//! [`RandomSource`], with [`SystemRandom`] as the platform default.

pub mod base62;
mod entropy;
mod error;
mod generator;
mod ksuid;

pub use entropy::{RandomSource, SystemRandom};
pub use error::KsuidError;
pub use generator::Generator;
pub use ksuid::{
    Ksuid, BYTE_LENGTH, EPOCH_STAMP, PAYLOAD_LENGTH, STRING_ENCODED_LENGTH, TIMESTAMP_LENGTH,
};
