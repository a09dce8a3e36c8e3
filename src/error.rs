//! Error types for wire-format construction

use std::borrow::Cow;
use thiserror::Error;

/// Errors reported by the wire-format builders.
///
/// All validation happens before any output byte is produced; a failed
/// construction never leaves partial output behind.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum CodecError {
    #[error("Invalid input: {0}")]
    InvalidInput(Cow<'static, str>),

    #[error("Malformed public key: {0}")]
    MalformedKey(Cow<'static, str>),

    #[error("Malformed field: {0}")]
    MalformedField(Cow<'static, str>),
}

pub type Result<T> = std::result::Result<T, CodecError>;
