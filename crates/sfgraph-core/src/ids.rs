//! Opaque entity identifiers.
//!
//! An identifier is 16 bytes from the OS random source, base-58 encoded with
//! the Bitcoin alphabet. Uniqueness is probabilistic: there is no collision
//! check, which is fine for batches in the low thousands.
//!
//! Formatting code takes an [`IdSource`] instead of calling the generator
//! directly so a build can be replayed with [`SequenceIds`].

use crate::errors::CoreError;

/// Number of random bytes behind each identifier.
pub const ID_BYTES: usize = 16;

/// Shortest possible encoding of [`ID_BYTES`] bytes (leading zero bytes
/// collapse to single `1` characters, so this is only reached in theory).
pub const MIN_ID_LEN: usize = 16;

/// Longest possible encoding of [`ID_BYTES`] bytes.
pub const MAX_ID_LEN: usize = 22;

/// Generate a fresh random identifier.
///
/// # Errors
///
/// Returns [`CoreError::Random`] if the OS random source cannot be read.
pub fn generate_unique_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; ID_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Random(e.to_string()))?;
    Ok(bs58::encode(bytes).into_string())
}

/// Check that `id` looks like something [`generate_unique_id`] produced.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the length is out of range or the
/// string is not valid base-58.
pub fn validate_id(id: &str) -> Result<(), CoreError> {
    if !(1..=MAX_ID_LEN).contains(&id.len()) {
        return Err(CoreError::Validation(format!(
            "identifier '{id}' has length {}, expected at most {MAX_ID_LEN}",
            id.len()
        )));
    }
    bs58::decode(id)
        .into_vec()
        .map(|_| ())
        .map_err(|e| CoreError::Validation(format!("identifier '{id}' is not base-58: {e}")))
}

/// Supplier of fresh identifiers.
pub trait IdSource {
    /// Produce the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if no identifier can be produced.
    fn next_id(&mut self) -> Result<String, CoreError>;
}

/// Identifiers from the OS random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Result<String, CoreError> {
        generate_unique_id()
    }
}

/// Deterministic identifiers `{prefix}{n}` counting up from 1.
#[derive(Debug, Clone)]
pub struct SequenceIds {
    prefix: String,
    next: u64,
}

impl SequenceIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequenceIds {
    fn next_id(&mut self) -> Result<String, CoreError> {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        Ok(id)
    }
}
