//! error.rs
//! Error taxonomy for encode/decode calls.
//!
//! Every failure has a caller-visible kind (see [`ErrorKind`]): bad
//! arguments, an out-of-range size, an immutable destination, an output
//! bound that was too small, or corrupt input. `Codec` covers collaborator
//! failures that are none of those and should not happen with well-formed
//! requests.
//!
//! A size argument of the right type but outside `0..=usize::MAX` is a
//! runtime-class failure, not a bad argument.

use thiserror::Error;

use crate::types::Format;

/// Coarse classification of a [`DeflateError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong argument count/shape/type or unrecognized token.
    BadArgument,
    /// Size argument is negative or does not fit the address space.
    InvalidSize,
    /// Destination buffer cannot accept writes.
    ImmutableTarget,
    /// Output would exceed the caller-specified or implied bound.
    TargetFull,
    /// Input is not valid for the selected format.
    CorruptData,
    /// The codec failed for a reason not covered above.
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeflateError {
    #[error("wrong number of arguments (given {given}, expected {expected})")]
    WrongArgumentCount { given: usize, expected: &'static str },

    #[error("wrong argument type for {argument} ({got} given, expected {expected})")]
    WrongType {
        argument: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("wrong format key - {0} (expected deflate, raw, zlib or gzip)")]
    UnknownFormat(String),

    #[error("wrong level key - {0} (expected default, fast, min, best or max)")]
    UnknownLevel(String),

    #[error("unknown keyword - {0}")]
    UnknownKeyword(String),

    #[error("wrong negative or huge number for {argument} - {value}")]
    InvalidSize { argument: &'static str, value: i64 },

    #[error("can't modify frozen destination buffer")]
    ImmutableTarget,

    #[error("{format} output exceeds the {limit} byte limit")]
    TargetFull { format: Format, limit: usize },

    #[error("corrupt {format} data: {reason}")]
    CorruptData { format: Format, reason: String },

    #[error("{format} codec failure: {reason}")]
    Codec { format: Format, reason: String },
}

impl DeflateError {
    pub fn kind(&self) -> ErrorKind {
        use DeflateError::*;
        match self {
            WrongArgumentCount { .. }
            | WrongType { .. }
            | UnknownFormat(_)
            | UnknownLevel(_)
            | UnknownKeyword(_) => ErrorKind::BadArgument,
            InvalidSize { .. } => ErrorKind::InvalidSize,
            ImmutableTarget => ErrorKind::ImmutableTarget,
            TargetFull { .. } => ErrorKind::TargetFull,
            CorruptData { .. } => ErrorKind::CorruptData,
            Codec { .. } => ErrorKind::Internal,
        }
    }

    /// True for failures on well-formed calls: out-of-range sizes and
    /// anything detected while running the codec. Shape/type errors and
    /// frozen destinations are not runtime failures.
    pub fn is_runtime(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidSize
                | ErrorKind::TargetFull
                | ErrorKind::CorruptData
                | ErrorKind::Internal
        )
    }

    pub(crate) fn corrupt(format: Format, reason: impl Into<String>) -> Self {
        DeflateError::CorruptData {
            format,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeflateError>;
