//! Error types for byte-level reads.

use thiserror::Error;

/// Error raised by [`ByteReader`](crate::ByteReader) when a read cannot be satisfied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// Not enough bytes left in the range for the requested read.
    #[error(
        "insufficient data: needed {needed} bytes, {remaining} remaining while reading {context}"
    )]
    InsufficientData {
        needed: usize,
        remaining: usize,
        context: &'static str,
    },

    /// A null-terminated string ran off the end of the range.
    #[error("unterminated string while reading {context}")]
    UnterminatedString { context: &'static str },
}

impl ReadError {
    /// Creates a new InsufficientData error.
    pub fn insufficient(needed: usize, remaining: usize, context: &'static str) -> Self {
        Self::InsufficientData {
            needed,
            remaining,
            context,
        }
    }
}
