use thiserror::Error;

/// Errors returned by ksuid operations.
#[derive(Debug, Error)]
pub enum KsuidError {
    /// The entropy source could not be opened at generator creation.
    #[error("entropy source unavailable: {0}")]
    Initialization(String),

    /// The entropy source produced fewer bytes than the payload needs.
    #[error("entropy source returned {got} of {need} random bytes")]
    Entropy { need: usize, got: usize },

    /// Parse input is not a well-formed 27-character base62 KSUID.
    #[error("invalid ksuid text: {0}")]
    InvalidFormat(String),

    /// An accessor was called before the first successful generation.
    #[error("no ksuid generated yet")]
    NotGenerated,
}
