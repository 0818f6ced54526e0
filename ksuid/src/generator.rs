//! KSUID generation.

use chrono::Utc;

use crate::entropy::{RandomSource, SystemRandom};
use crate::ksuid::{Ksuid, PAYLOAD_LENGTH};
use crate::KsuidError;

/// Generates KSUIDs from an owned entropy source.
///
/// A generator owns exactly one [`RandomSource`] and caches the most
/// recently generated value together with its text form; the source is
/// released when the generator is dropped.
///
/// Mutating operations take `&mut self`, so a generator is single-owner by
/// construction; wrap it in a `Mutex` to share it across threads.
pub struct Generator {
    source: Box<dyn RandomSource>,
    last: Option<(Ksuid, String)>,
}

impl Generator {
    /// Creates a generator backed by the platform entropy facility.
    ///
    /// Fails with [`KsuidError::Initialization`] if the facility cannot be
    /// opened; no generator exists in that case.
    pub fn new() -> Result<Self, KsuidError> {
        Ok(Self::with_source(Box::new(SystemRandom::new()?)))
    }

    /// Creates a generator over a caller-supplied entropy source.
    pub fn with_source(source: Box<dyn RandomSource>) -> Self {
        Self { source, last: None }
    }

    /// Generates a KSUID stamped with the current wall-clock time.
    pub fn generate(&mut self) -> Result<&Ksuid, KsuidError> {
        let now = Utc::now().timestamp().max(0) as u64;
        self.generate_at(now)
    }

    /// Generates a KSUID stamped with the given Unix seconds.
    ///
    /// Draws 16 fresh payload bytes; if the source supplies fewer, fails
    /// with [`KsuidError::Entropy`] and the previously cached value stays
    /// untouched. No partial update is observable.
    pub fn generate_at(&mut self, unix_secs: u64) -> Result<&Ksuid, KsuidError> {
        let mut payload = [0u8; PAYLOAD_LENGTH];
        let got = self.source.fill(&mut payload)?;
        if got < PAYLOAD_LENGTH {
            return Err(KsuidError::Entropy {
                need: PAYLOAD_LENGTH,
                got,
            });
        }

        let id = Ksuid::from_parts(unix_secs, payload);
        let text = id.encoded();
        let entry = self.last.insert((id, text));
        Ok(&entry.0)
    }

    /// Returns the most recently generated KSUID.
    ///
    /// Fails with [`KsuidError::NotGenerated`] before the first successful
    /// generation.
    pub fn last(&self) -> Result<&Ksuid, KsuidError> {
        self.last
            .as_ref()
            .map(|(id, _)| id)
            .ok_or(KsuidError::NotGenerated)
    }

    /// Returns the text form of the most recently generated KSUID.
    ///
    /// Same precondition as [`Generator::last`].
    pub fn last_text(&self) -> Result<&str, KsuidError> {
        self.last
            .as_ref()
            .map(|(_, text)| text.as_str())
            .ok_or(KsuidError::NotGenerated)
    }
}
