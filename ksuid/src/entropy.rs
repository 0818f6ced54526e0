//! Entropy source capability.

use crate::KsuidError;

/// Supplies cryptographically secure random bytes.
///
/// Implementations must return the number of bytes actually written;
/// returning fewer than requested signals exhaustion or a read error.
/// Use [`SystemRandom`] for the platform CSPRNG.
pub trait RandomSource: Send {
    /// Fills `dst` with random bytes. Returns the count written.
    fn fill(&mut self, dst: &mut [u8]) -> Result<usize, KsuidError>;

    /// Draws a random u32 from the source.
    fn next_u32(&mut self) -> Result<u32, KsuidError> {
        let mut buf = [0u8; 4];
        let got = self.fill(&mut buf)?;
        if got < buf.len() {
            return Err(KsuidError::Entropy {
                need: buf.len(),
                got,
            });
        }
        Ok(u32::from_be_bytes(buf))
    }

    /// Draws a random u64 from the source.
    fn next_u64(&mut self) -> Result<u64, KsuidError> {
        let mut buf = [0u8; 8];
        let got = self.fill(&mut buf)?;
        if got < buf.len() {
            return Err(KsuidError::Entropy {
                need: buf.len(),
                got,
            });
        }
        Ok(u64::from_be_bytes(buf))
    }
}

/// Platform-backed [`RandomSource`] using the OS entropy facility.
///
/// `getrandom` selects the right facility per platform (urandom,
/// CryptGenRandom descendants, etc.), so there is no platform branching
/// here.
pub struct SystemRandom(());

impl SystemRandom {
    /// Opens the platform entropy facility.
    ///
    /// Probes it once so that an unavailable facility surfaces at
    /// creation, not at first generation.
    pub fn new() -> Result<Self, KsuidError> {
        let mut probe = [0u8; 1];
        getrandom::fill(&mut probe)
            .map_err(|e| KsuidError::Initialization(e.to_string()))?;
        Ok(Self(()))
    }
}

impl RandomSource for SystemRandom {
    fn fill(&mut self, dst: &mut [u8]) -> Result<usize, KsuidError> {
        getrandom::fill(dst).map_err(|_| KsuidError::Entropy {
            need: dst.len(),
            got: 0,
        })?;
        Ok(dst.len())
    }
}
