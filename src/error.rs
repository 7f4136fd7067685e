use alloc::collections::TryReserveError;
use thiserror::Error;

/// Errors produced by the compression engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Out of memory")]
    OutOfMemory,

    #[error("Invalid compressed data: {0}")]
    InvalidData(Corruption),

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// The specific defect found in a malformed token stream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    #[error("unknown token tag {0:#04x}")]
    UnknownTag(u8),

    #[error("truncated literal")]
    TruncatedLiteral,

    #[error("truncated reference")]
    TruncatedReference,

    #[error("reference out of range (offset {offset}, {available} bytes available)")]
    ReferenceOutOfRange { offset: usize, available: usize },
}

impl From<Corruption> for Error {
    fn from(corruption: Corruption) -> Self {
        Self::InvalidData(corruption)
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
