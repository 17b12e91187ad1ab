//! Error taxonomy for effect processing

use thiserror::Error;

/// Errors raised while interpreting effect data
///
/// None of these are fatal to a batch: callers log them and skip the
/// offending record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    #[error("Malformed effect description: {0:?}")]
    MalformedDescription(String),
    #[error("Invalid effect record: {0}")]
    InvalidEffectRecord(String),
    #[error("Missing context for stat derivation: {0}")]
    MissingContext(&'static str),
}
